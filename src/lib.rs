//! account-brief: generate versioned markdown account briefs for outreach,
//! optionally enriched through a single chat-completion lookup per run.

pub mod brief;
pub mod config;
pub mod error;
pub mod llm;
pub mod output;
pub mod research;

// Load env from .env if present; silently ignore when missing.
pub fn load_env() {
    let _ = dotenvy::dotenv();
}
