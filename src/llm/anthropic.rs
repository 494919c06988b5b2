//! Anthropic API client
//!
//! Direct HTTP client for the Anthropic Messages API.
//!
//! # Authentication
//!
//! Uses an Anthropic API key (set via `ANTHROPIC_API_KEY` environment variable
//! or passed directly).
//!
//! ```ignore
//! // From environment variable
//! let llm = AnthropicProvider::from_env()?;
//!
//! // With explicit API key and model configuration
//! let llm = AnthropicProvider::new("sk-ant-...")?
//!     .with_temperature(0.5)
//!     .with_max_tokens(1000);
//! ```

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::core::{AgentError, AgentResult};

use super::provider::LlmProvider;
use super::types::{
    Message, MessageRequest, MessageResponse, ToolChoice, ToolDefinition,
};

const DEFAULT_API_BASE: &str = "https://api.anthropic.com/v1";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const DEFAULT_MODEL: &str = "claude-sonnet-4-5-20250929";
const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Anthropic Messages API provider
pub struct AnthropicProvider {
    client: Client,
    api_key: String,
    api_base: String,
    model: String,
    max_tokens: u32,
    temperature: Option<f32>,
    timeout: Option<Duration>,
}

/// Error envelope returned by the API on non-2xx responses
#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(rename = "type")]
    error_type: String,
    message: String,
}

fn parse_api_error(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorEnvelope>(body)
        .ok()
        .map(|envelope| {
            format!(
                "{}: {}",
                envelope.error.error_type, envelope.error.message
            )
        })
}

impl AnthropicProvider {
    /// Create a new provider with an explicit API key
    pub fn new(api_key: impl Into<String>) -> AgentResult<Self> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: None,
            timeout: None,
        })
    }

    /// Create a new provider from the `ANTHROPIC_API_KEY` environment variable
    pub fn from_env() -> AgentResult<Self> {
        let api_key = env::var("ANTHROPIC_API_KEY")
            .map_err(|_| AgentError::MissingEnv("ANTHROPIC_API_KEY".to_string()))?;
        Self::new(api_key)
    }

    /// Set the model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the maximum number of output tokens
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set a per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the API base URL
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Get the configured model identifier
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a single user message and return the assistant's text
    ///
    /// Convenience wrapper for conversations without tools. `history` is
    /// prepended to the new message.
    pub async fn send_message(
        &self,
        text: &str,
        history: &[Message],
        system: Option<&str>,
    ) -> AgentResult<String> {
        let mut messages = history.to_vec();
        messages.push(Message::user(text));

        let response = self
            .send_with_tools(messages, system, Vec::new(), None)
            .await?;

        Ok(response.text())
    }

    /// Send a conversation with tool definitions and return the full response
    pub async fn send_with_tools(
        &self,
        messages: Vec<Message>,
        system: Option<&str>,
        tools: Vec<ToolDefinition>,
        tool_choice: Option<ToolChoice>,
    ) -> AgentResult<MessageResponse> {
        let request = MessageRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            messages,
            system: system.map(|s| s.to_string()),
            temperature: self.temperature,
            tools: if tools.is_empty() { None } else { Some(tools) },
            tool_choice,
        };

        self.post_messages(&request).await
    }

    async fn post_messages(&self, request: &MessageRequest) -> AgentResult<MessageResponse> {
        let url = format!("{}/messages", self.api_base);
        tracing::debug!(
            model = %request.model,
            messages = request.messages.len(),
            tools = request.tools.as_ref().map(|t| t.len()).unwrap_or(0),
            "Sending messages request"
        );

        let mut builder = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(request);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = parse_api_error(&body).unwrap_or(body);
            tracing::error!(status = status.as_u16(), "API request failed: {}", message);
            return Err(AgentError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let message: MessageResponse = response.json().await?;
        tracing::debug!(
            stop_reason = ?message.stop_reason,
            blocks = message.content.len(),
            "Received response"
        );

        Ok(message)
    }
}

#[async_trait]
impl LlmProvider for AnthropicProvider {
    fn model(&self) -> &str {
        &self.model
    }

    async fn send_with_tools(
        &self,
        messages: Vec<Message>,
        system: Option<&str>,
        tools: Vec<ToolDefinition>,
        tool_choice: Option<ToolChoice>,
    ) -> AgentResult<MessageResponse> {
        AnthropicProvider::send_with_tools(self, messages, system, tools, tool_choice).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let provider = AnthropicProvider::new("test-key").unwrap();
        assert_eq!(provider.model(), DEFAULT_MODEL);
        assert_eq!(provider.max_tokens, DEFAULT_MAX_TOKENS);
        assert!(provider.temperature.is_none());
        assert!(provider.timeout.is_none());
    }

    #[test]
    fn test_builder_overrides() {
        let provider = AnthropicProvider::new("test-key")
            .unwrap()
            .with_model("claude-haiku-4-5")
            .with_temperature(0.5)
            .with_max_tokens(1000)
            .with_timeout(Duration::from_secs(10));

        assert_eq!(provider.model(), "claude-haiku-4-5");
        assert_eq!(provider.temperature, Some(0.5));
        assert_eq!(provider.max_tokens, 1000);
        assert_eq!(provider.timeout, Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_parse_api_error() {
        let body = r#"{"type":"error","error":{"type":"invalid_request_error","message":"max_tokens required"}}"#;
        let parsed = parse_api_error(body).unwrap();
        assert_eq!(parsed, "invalid_request_error: max_tokens required");

        assert!(parse_api_error("not json").is_none());
    }
}
