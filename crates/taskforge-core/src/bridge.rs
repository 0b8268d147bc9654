//! Completion bridge: the single outbound call to the completion capability.
//!
//! OpenRouter's OpenAI-compatible `/chat/completions`, JSON-object response
//! format, temperature 0.1. The key stays in the backend; the bridge is the
//! only place in the crate that performs network I/O. Requests carry a 30s
//! deadline; expiry surfaces as [`ExtractError::UpstreamTimeout`].

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::ExtractError;

const OPENROUTER_API_BASE: &str = "https://openrouter.ai/api/v1";
const DEFAULT_MODEL: &str = "openai/gpt-4o-mini";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// OpenAI-compatible request/response for OpenRouter
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Deserialize)]
struct ChatMessageResponse {
    content: String,
}

/// Thin client for the completion capability. One request per extraction call.
pub struct CompletionBridge {
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl CompletionBridge {
    /// Create a bridge using `OPENROUTER_API_KEY` from the environment.
    /// Returns `None` when the key is missing or empty.
    pub fn from_env() -> Option<Self> {
        let key = std::env::var("OPENROUTER_API_KEY").ok()?.trim().to_string();
        if key.is_empty() {
            return None;
        }
        Some(Self::new(key))
    }

    /// Create a bridge with an explicit API key.
    pub fn new(api_key: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            api_key: api_key.trim().to_string(),
            model: DEFAULT_MODEL.to_string(),
            client,
        }
    }

    /// Override the model (e.g. `openai/gpt-4o-mini`, `anthropic/claude-3.5-sonnet`).
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// Send one system+user exchange and return the raw message content, which
    /// the response format constrains to a single JSON object.
    pub async fn complete_json(&self, system: &str, user: &str) -> Result<String, ExtractError> {
        let url = format!("{}/chat/completions", OPENROUTER_API_BASE);
        let body = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user.to_string(),
                },
            ],
            temperature: 0.1,
            response_format: ResponseFormat {
                kind: "json_object".to_string(),
            },
        };

        let res = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ExtractError::UpstreamTimeout
                } else {
                    ExtractError::UpstreamFailure(e.to_string())
                }
            })?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(ExtractError::UpstreamFailure(format!(
                "completion API error {}: {}",
                status, body
            )));
        }

        let parsed: ChatResponse = res
            .json()
            .await
            .map_err(|e| ExtractError::UpstreamFailure(format!("response parse failed: {}", e)))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| ExtractError::MalformedResponse("empty choices".to_string()))
    }
}
