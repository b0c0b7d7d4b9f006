use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
    #[error("http error: {0}")]
    Http(String),
    #[error("api error {status}: {body}")]
    Api { status: u16, body: String },
    #[error("no completion text in response")]
    EmptyCompletion,
}

/// Pull the human-readable message out of a provider error body; both OpenAI
/// and Anthropic nest it under `error.message`. Falls back to the raw body.
pub(crate) fn error_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")?
                .get("message")?
                .as_str()
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}

/// A chat-completion provider. One prompt in, one completion out; the
/// implementation owns auth, endpoint, and timeout.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, ChatError>;

    fn provider_name(&self) -> &'static str;
}
