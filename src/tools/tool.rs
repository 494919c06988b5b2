//! Tool trait definition
//!
//! All tools implement this trait to provide a consistent interface.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::llm::ToolDefinition;
use crate::runtime::ToolRuntime;

/// Result of executing a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// The output of the tool, fed back to the model
    pub output: String,
    /// Whether the tool execution resulted in an error
    pub is_error: bool,
}

impl ToolResult {
    /// Create a successful tool result
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            is_error: false,
        }
    }

    /// Create an error tool result
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            output: message.into(),
            is_error: true,
        }
    }
}

/// Trait for tools that the agent can use
///
/// All tools must implement this trait to be usable by the agent.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Get the name of this tool
    fn name(&self) -> &str;

    /// Get a description of this tool
    fn description(&self) -> &str;

    /// Get the tool definition for the Anthropic API
    fn definition(&self) -> ToolDefinition;

    /// Execute the tool with the given input
    ///
    /// The input is a JSON value that matches the tool's input schema.
    /// The runtime provides access to caller-supplied invocation context.
    async fn execute(&self, input: &Value, runtime: &ToolRuntime) -> Result<ToolResult>;
}
