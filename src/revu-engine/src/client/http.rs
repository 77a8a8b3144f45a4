//! HTTP review model for OpenAI-compatible chat-completions endpoints.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::ReviewModel;
use crate::error::{EngineError, Result};
use crate::prompt::REVIEW_SYSTEM_INSTRUCTION;

/// Default provider endpoint.
pub const DEFAULT_PROVIDER_URL: &str = "https://api.openai.com";

/// User-Agent sent with every provider request.
pub const USER_AGENT: &str = concat!("revu/", env!("CARGO_PKG_VERSION"));

/// Default deadline for one provider call.
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Non-streaming chat-completions client.
pub struct HttpReviewModel {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl HttpReviewModel {
    /// Create a client for `model` against `base_url` (or the default
    /// endpoint when `None`).
    pub fn new(model: String, base_url: Option<String>) -> Self {
        Self::with_timeout(model, base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client with an explicit per-request deadline.
    pub fn with_timeout(model: String, base_url: Option<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build provider client: {e}, using defaults");
                Client::new()
            });

        Self {
            client,
            base_url: base_url.unwrap_or_else(|| DEFAULT_PROVIDER_URL.to_string()),
            model,
            api_key: None,
        }
    }

    /// Set the provider API key.
    pub fn with_api_key(mut self, key: String) -> Self {
        self.api_key = Some(key);
        self
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Pull a human-readable message out of a provider error body.
fn extract_error_message(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error")?.get("message")?.as_str().map(String::from))
        .unwrap_or_else(|| {
            let preview: String = body.chars().take(200).collect();
            format!("HTTP {status}: {preview}")
        })
}

#[async_trait]
impl ReviewModel for HttpReviewModel {
    fn model(&self) -> &str {
        &self.model
    }

    fn provider(&self) -> &str {
        "openai-compatible"
    }

    async fn review(&self, code: &str) -> Result<String> {
        let Some(api_key) = &self.api_key else {
            return Err(EngineError::ApiKeyMissing);
        };

        let url = format!("{}/v1/chat/completions", self.base_url);
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: REVIEW_SYSTEM_INSTRUCTION,
                },
                ChatMessage {
                    role: "user",
                    content: code,
                },
            ],
        };

        tracing::debug!(url = %url, model = %self.model, code_bytes = code.len(), "Sending review request");

        let resp = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = extract_error_message(status, &body);
            tracing::error!(status = %status, message = %message, "Provider request failed");
            return Err(EngineError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse = resp
            .json()
            .await
            .map_err(|e| EngineError::MalformedResponse(e.to_string()))?;

        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(EngineError::EmptyResponse);
        }

        Ok(text)
    }
}
