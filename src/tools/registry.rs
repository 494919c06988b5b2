//! Tool registry
//!
//! Name-keyed collection of the tools available to an agent.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use serde_json::Value;

use crate::llm::ToolDefinition;
use crate::runtime::ToolRuntime;

use super::tool::{Tool, ToolResult};

/// Registry of tools the agent can call by name
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool under its own name
    ///
    /// Replaces any previously registered tool with the same name.
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        self.register_arc(Arc::new(tool));
    }

    /// Register an already shared tool
    pub fn register_arc(&mut self, tool: Arc<dyn Tool>) {
        tracing::debug!("Registering tool: {}", tool.name());
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Whether a tool with this name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Names of all registered tools, sorted
    pub fn tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// Definitions of all registered tools, in name order
    pub fn get_definitions(&self) -> Vec<ToolDefinition> {
        let mut definitions: Vec<ToolDefinition> =
            self.tools.values().map(|tool| tool.definition()).collect();
        definitions.sort_by(|a, b| a.name.cmp(&b.name));
        definitions
    }

    /// Execute a registered tool by name
    pub async fn execute(
        &self,
        name: &str,
        input: &Value,
        runtime: &ToolRuntime,
    ) -> Result<ToolResult> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| anyhow::anyhow!("unknown tool: {}", name))?;

        tool.execute(input, runtime).await
    }
}
