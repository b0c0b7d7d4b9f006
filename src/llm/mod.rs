//! Chat-completion clients for persona and company research.

pub mod anthropic;
pub mod openai;
pub mod traits;

use std::sync::Arc;

use clap::ValueEnum;
use tracing::info;

use crate::config::Config;
use crate::error::{BriefError, Result};
use anthropic::AnthropicClient;
use openai::OpenAiClient;
pub use traits::{ChatClient, ChatError};

/// Supported chat-completion providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Provider {
    #[value(name = "openai")]
    OpenAi,
    Anthropic,
}

impl Provider {
    pub fn name(&self) -> &'static str {
        match self {
            Provider::OpenAi => "openai",
            Provider::Anthropic => "anthropic",
        }
    }

    pub fn env_key(&self) -> &'static str {
        match self {
            Provider::OpenAi => "OPENAI_API_KEY",
            Provider::Anthropic => "ANTHROPIC_API_KEY",
        }
    }
}

fn is_placeholder(s: &str) -> bool {
    let t = s.trim();
    t.is_empty()
        || t.contains("${")
        || t.eq_ignore_ascii_case("your-api-key-here")
        || t.eq_ignore_ascii_case("changeme")
}

/// Build the client for the selected provider, reading its API key from the
/// environment. A missing or placeholder key is a fatal configuration error.
pub fn create_client(provider: Provider, config: &Config) -> Result<Arc<dyn ChatClient>> {
    let key = std::env::var(provider.env_key()).unwrap_or_default();
    if is_placeholder(&key) {
        return Err(BriefError::Config {
            message: format!(
                "{} is not set (required for --llm {})",
                provider.env_key(),
                provider.name()
            ),
        });
    }

    match provider {
        Provider::OpenAi => {
            info!(model = %config.openai_model, "using OpenAI chat completions");
            Ok(Arc::new(OpenAiClient::new(
                key,
                config.openai_model.clone(),
                config.http_timeout_ms,
            )?))
        }
        Provider::Anthropic => {
            info!(model = %config.anthropic_model, "using Anthropic messages API");
            Ok(Arc::new(AnthropicClient::new(
                key,
                config.anthropic_model.clone(),
                config.http_timeout_ms,
            )?))
        }
    }
}
