use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::llm::traits::{ChatClient, ChatError, error_detail};

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 500;

pub struct AnthropicClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    timeout_ms: u64,
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

impl AnthropicClient {
    pub fn new(api_key: String, model: String, timeout_ms: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(timeout_ms))
            .build()
            .context("Failed to build reqwest client with timeout")?;

        Ok(Self {
            client,
            api_key,
            model,
            timeout_ms,
        })
    }
}

#[async_trait]
impl ChatClient for AnthropicClient {
    async fn complete(&self, prompt: &str) -> Result<String, ChatError> {
        debug!(
            model = %self.model,
            chars = prompt.len(),
            "sending Anthropic message request"
        );

        let body = MessagesRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(MESSAGES_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ChatError::Timeout {
                        timeout_ms: self.timeout_ms,
                    }
                } else {
                    ChatError::Http(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::Api {
                status,
                body: error_detail(&body),
            });
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .map_err(|e| ChatError::Http(e.to_string()))?;

        parsed
            .content
            .into_iter()
            .find(|b| b.kind == "text" && !b.text.trim().is_empty())
            .map(|b| b.text)
            .ok_or(ChatError::EmptyCompletion)
    }

    fn provider_name(&self) -> &'static str {
        "anthropic"
    }
}
