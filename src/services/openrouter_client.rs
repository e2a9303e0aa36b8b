use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::{PlannerError, Result};

/// Transport seam for the chat-completions collaborator.
///
/// The production implementation is [`OpenRouterClient`]; tests substitute
/// scripted fakes to exercise the aggregation logic without a network.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Issue one completion request and return the raw response document.
    async fn complete(&self, body: &Value) -> Result<Value>;
}

/// HTTP client for an OpenRouter-compatible chat-completions endpoint.
///
/// Each call is a single attempt; there is no retry or backoff, and the only
/// time bound is the per-request timeout baked into the HTTP client.
#[derive(Clone, Debug)]
pub struct OpenRouterClient {
    api_key: String,
    base_url: String,
    http: reqwest::Client,
}

impl OpenRouterClient {
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(PlannerError::Http)?;
        Ok(Self {
            api_key,
            base_url,
            http,
        })
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }
}

#[async_trait]
impl CompletionClient for OpenRouterClient {
    async fn complete(&self, body: &Value) -> Result<Value> {
        let request_url = build_chat_url(&self.base_url);

        let response = self
            .http
            .post(&request_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .header("X-Title", "trip-concierge-rs")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        let response_json: Value = serde_json::from_str(&response_text).map_err(|err| {
            PlannerError::Decode(format!("response body was not JSON: {err}"))
        })?;

        if !status.is_success() {
            let api_message = response_json
                .get("error")
                .and_then(|error| error.get("message"))
                .and_then(|value| value.as_str())
                .map(|s| s.to_string())
                .unwrap_or(response_text);

            return Err(PlannerError::Api {
                status: status.as_u16(),
                message: api_message,
            });
        }

        // Some gateways report failures in-band with a 200 status.
        if let Some(error) = response_json.get("error") {
            let message = error
                .get("message")
                .and_then(|value| value.as_str())
                .map(|s| s.to_string())
                .unwrap_or_else(|| error.to_string());
            return Err(PlannerError::Api {
                status: status.as_u16(),
                message,
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

/// Builder for a chat-completions request body.
#[derive(Clone, Debug)]
pub struct ChatCompletionRequest {
    model: String,
    messages: Vec<Value>,
    temperature: Option<f64>,
    max_tokens: Option<u32>,
    response_format: Option<Value>,
}

impl ChatCompletionRequest {
    pub fn new(model: impl Into<String>, messages: Vec<Value>) -> Self {
        Self {
            model: model.into(),
            messages,
            temperature: None,
            max_tokens: None,
            response_format: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_response_format(mut self, response_format: Value) -> Self {
        self.response_format = Some(response_format);
        self
    }

    pub fn into_value(self) -> Value {
        let mut body = json!({
            "model": self.model,
            "messages": self.messages,
        });

        if let Some(temperature) = self.temperature {
            body["temperature"] = json!(temperature);
        }

        if let Some(max_tokens) = self.max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }

        if let Some(response_format) = self.response_format {
            body["response_format"] = response_format;
        }

        body
    }
}
