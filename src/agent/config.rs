//! Agent configuration
//!
//! Aggregates everything an agent needs: the system prompt, the tool set,
//! an optional response format, and an optional checkpointer.

use std::sync::Arc;

use crate::checkpoint::Checkpointer;
use crate::tools::ToolRegistry;

use super::structured::ToolStrategy;

/// Maximum number of tool calls in a single turn
pub(crate) const DEFAULT_MAX_TOOL_ITERATIONS: usize = 50;

/// Configuration for assembling an agent
pub struct AgentConfig {
    pub(crate) system_prompt: String,
    pub(crate) tools: Arc<ToolRegistry>,
    pub(crate) response_format: Option<ToolStrategy>,
    pub(crate) checkpointer: Option<Arc<dyn Checkpointer>>,
    pub(crate) max_tool_iterations: usize,
}

impl AgentConfig {
    /// Create a configuration with a system prompt and no tools
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            tools: Arc::new(ToolRegistry::new()),
            response_format: None,
            checkpointer: None,
            max_tool_iterations: DEFAULT_MAX_TOOL_ITERATIONS,
        }
    }

    /// Set the tool registry
    pub fn with_tools(mut self, tools: Arc<ToolRegistry>) -> Self {
        self.tools = tools;
        self
    }

    /// Ask for structured responses in the given shape
    pub fn with_response_format(mut self, strategy: ToolStrategy) -> Self {
        self.response_format = Some(strategy);
        self
    }

    /// Persist conversations through the given checkpointer
    pub fn with_checkpointer(mut self, checkpointer: Arc<dyn Checkpointer>) -> Self {
        self.checkpointer = Some(checkpointer);
        self
    }

    /// Override the tool iteration cap
    pub fn with_max_tool_iterations(mut self, max_tool_iterations: usize) -> Self {
        self.max_tool_iterations = max_tool_iterations;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = AgentConfig::new("You are a helpful assistant");
        assert_eq!(config.system_prompt, "You are a helpful assistant");
        assert!(config.response_format.is_none());
        assert!(config.checkpointer.is_none());
        assert_eq!(config.max_tool_iterations, DEFAULT_MAX_TOOL_ITERATIONS);
        assert!(config.tools.tool_names().is_empty());
    }
}
