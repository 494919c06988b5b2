//! Provider abstraction for the agent loop
//!
//! The loop talks to the model through this trait so it can run against any
//! backend (or a scripted provider in tests).

use async_trait::async_trait;

use crate::core::AgentResult;

use super::types::{Message, MessageResponse, ToolChoice, ToolDefinition};

/// Interface the agent loop uses to talk to a model
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Model identifier used for requests
    fn model(&self) -> &str;

    /// Send a conversation with tool definitions and return the full response
    async fn send_with_tools(
        &self,
        messages: Vec<Message>,
        system: Option<&str>,
        tools: Vec<ToolDefinition>,
        tool_choice: Option<ToolChoice>,
    ) -> AgentResult<MessageResponse>;
}
