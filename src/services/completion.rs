use std::time::Duration;

use serde_json::{json, Value};
use tracing::debug;

use crate::error::{PlannerError, Result};

const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Client for an OpenAI-compatible chat-completion endpoint
#[derive(Clone, Debug)]
pub struct CompletionClient {
    api_key: String,
    base_url: String,
}

impl CompletionClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    /// Send a single-turn chat-completion request.
    ///
    /// One shot: no retries, no streaming. Non-success statuses and API-level
    /// `error` bodies surface as [`PlannerError::Completion`].
    pub async fn chat_completion(&self, body: &Value, timeout: Duration) -> Result<Value> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| PlannerError::Unknown(format!("Failed to build HTTP client: {err}")))?;

        let request_url = build_chat_url(&self.base_url);
        debug!(target: "planner::completion", url = %request_url, "sending completion request");

        let response = client
            .post(&request_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|err| PlannerError::Completion {
                status: 0,
                message: format!("HTTP request failed: {err}"),
            })?;

        let status = response.status();
        let response_text = response.text().await.map_err(|err| PlannerError::Completion {
            status: status.as_u16(),
            message: format!("Failed to read response: {err}"),
        })?;

        if !status.is_success() {
            let api_message = serde_json::from_str::<Value>(&response_text)
                .ok()
                .and_then(|body| {
                    body.get("error")
                        .and_then(|error| error.get("message"))
                        .and_then(|value| value.as_str())
                        .map(|s| s.to_string())
                })
                .unwrap_or(response_text);

            return Err(PlannerError::Completion {
                status: status.as_u16(),
                message: api_message,
            });
        }

        let response_json: Value = serde_json::from_str(&response_text).map_err(|err| {
            PlannerError::CompletionDecode(format!("Failed to parse JSON: {err}"))
        })?;

        if let Some(error) = response_json.get("error") {
            let error_message = error
                .get("message")
                .and_then(|value| value.as_str())
                .map(|s| s.to_string())
                .unwrap_or_else(|| error.to_string());
            return Err(PlannerError::Completion {
                status: status.as_u16(),
                message: error_message,
            });
        }

        Ok(response_json)
    }
}

fn build_chat_url(base_url: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    if trimmed.ends_with("/chat/completions") {
        trimmed.to_string()
    } else {
        format!("{}/chat/completions", trimmed)
    }
}

/// Pull the assistant text out of a chat-completion response
pub fn extract_content(response: &Value) -> Result<String> {
    response
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| {
            PlannerError::CompletionDecode(
                "response has no choices[0].message.content".to_string(),
            )
        })
}

/// Request body for a single-turn chat completion
#[derive(Clone, Debug)]
pub struct ChatCompletionRequest {
    model: String,
    messages: Vec<Value>,
    temperature: f32,
    max_tokens: Option<u32>,
}

impl ChatCompletionRequest {
    pub fn new(model: impl Into<String>, messages: Vec<Value>) -> Self {
        Self {
            model: model.into(),
            messages,
            temperature: 0.0,
            max_tokens: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn into_value(self) -> Value {
        let mut body = json!({
            "model": self.model,
            "messages": self.messages,
            "temperature": self.temperature,
        });

        if let Some(max_tokens) = self.max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }

        body
    }
}
