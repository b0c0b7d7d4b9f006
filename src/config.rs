//! Runtime configuration loaded from environment variables.

use std::path::PathBuf;

const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
const DEFAULT_ANTHROPIC_MODEL: &str = "claude-3-5-sonnet-20241022";
const DEFAULT_HTTP_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_OUTPUT_DIR: &str = "outputs";

/// Settings that tune the brief run; every field has a default so `load`
/// never fails. API keys are read separately, only when a provider is chosen.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_model: String,
    pub anthropic_model: String,
    pub http_timeout_ms: u64,
    pub output_dir: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        Self {
            openai_model: env_or("BRIEF_OPENAI_MODEL", DEFAULT_OPENAI_MODEL),
            anthropic_model: env_or("BRIEF_ANTHROPIC_MODEL", DEFAULT_ANTHROPIC_MODEL),
            http_timeout_ms: std::env::var("BRIEF_HTTP_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_HTTP_TIMEOUT_MS),
            output_dir: PathBuf::from(env_or("BRIEF_OUTPUT_DIR", DEFAULT_OUTPUT_DIR)),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
