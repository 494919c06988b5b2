//! User location tool
//!
//! Resolves the caller's location from the per-invocation user context
//! instead of tool input, so the model never has to ask for it.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Value};

use crate::llm::{define_tool, ToolDefinition};
use crate::runtime::ToolRuntime;

use super::tool::{Tool, ToolResult};

/// Name the model uses to call the location tool
pub const USER_LOCATION_TOOL_NAME: &str = "get_user_location";

/// Per-invocation user identity supplied by the caller
#[derive(Debug, Clone)]
pub struct UserContext {
    pub user_id: String,
}

impl UserContext {
    /// Create a user context for one invocation
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

/// Looks up the user's location from the invocation context
#[derive(Debug, Default)]
pub struct UserLocationTool;

impl UserLocationTool {
    /// Create a new user location tool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Tool for UserLocationTool {
    fn name(&self) -> &str {
        USER_LOCATION_TOOL_NAME
    }

    fn description(&self) -> &str {
        "Retrieve user information based on user ID."
    }

    fn definition(&self) -> ToolDefinition {
        // No input fields; everything comes from the runtime context
        define_tool(USER_LOCATION_TOOL_NAME, self.description(), json!({}), vec![])
    }

    async fn execute(&self, _input: &Value, runtime: &ToolRuntime) -> Result<ToolResult> {
        let Some(user) = runtime.context().resource::<UserContext>() else {
            return Ok(ToolResult::error(
                "No user context was provided for this invocation",
            ));
        };

        let location = if user.user_id == "1" { "Florida" } else { "SF" };
        tracing::debug!(user_id = %user.user_id, location, "Resolved user location");

        Ok(ToolResult::success(location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::RuntimeContext;

    fn runtime_for(user_id: &str) -> ToolRuntime {
        let mut context = RuntimeContext::new();
        context.insert_resource(UserContext::new(user_id));
        ToolRuntime::new(context, None)
    }

    #[tokio::test]
    async fn test_user_one_is_in_florida() {
        let tool = UserLocationTool::new();
        let result = tool.execute(&json!({}), &runtime_for("1")).await.unwrap();
        assert_eq!(result.output, "Florida");
        assert!(!result.is_error);
    }

    #[tokio::test]
    async fn test_other_users_are_in_sf() {
        let tool = UserLocationTool::new();
        let result = tool.execute(&json!({}), &runtime_for("42")).await.unwrap();
        assert_eq!(result.output, "SF");
    }

    #[tokio::test]
    async fn test_missing_context_is_a_tool_error() {
        let tool = UserLocationTool::new();
        let runtime = ToolRuntime::new(RuntimeContext::new(), None);
        let result = tool.execute(&json!({}), &runtime).await.unwrap();
        assert!(result.is_error);
        assert!(result.output.contains("user context"));
    }
}
