//! Weather lookup tool
//!
//! Tutorial tool with canned output: every city is sunny.

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::llm::{define_tool, ToolDefinition};
use crate::runtime::ToolRuntime;

use super::tool::{Tool, ToolResult};

/// Name the model uses to call the weather tool
pub const WEATHER_TOOL_NAME: &str = "get_weather_for_location";

/// Weather lookup for a specific city
#[derive(Debug, Default)]
pub struct WeatherTool;

/// Input for the weather tool
#[derive(Debug, Deserialize)]
struct WeatherInput {
    city: String,
}

impl WeatherTool {
    /// Create a new weather tool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Tool for WeatherTool {
    fn name(&self) -> &str {
        WEATHER_TOOL_NAME
    }

    fn description(&self) -> &str {
        "Get weather for a given city."
    }

    fn definition(&self) -> ToolDefinition {
        define_tool(
            WEATHER_TOOL_NAME,
            self.description(),
            json!({
                "city": {
                    "type": "string",
                    "description": "The city to look up weather for"
                }
            }),
            vec!["city".to_string()],
        )
    }

    async fn execute(&self, input: &Value, _runtime: &ToolRuntime) -> Result<ToolResult> {
        let input: WeatherInput = serde_json::from_value(input.clone())
            .map_err(|e| anyhow::anyhow!("Invalid weather input: {}", e))?;

        Ok(ToolResult::success(format!(
            "It's always sunny in {}!",
            input.city
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::RuntimeContext;

    fn test_runtime() -> ToolRuntime {
        ToolRuntime::new(RuntimeContext::new(), None)
    }

    #[tokio::test]
    async fn test_weather_for_city() {
        let tool = WeatherTool::new();
        let result = tool
            .execute(&json!({"city": "Tokyo"}), &test_runtime())
            .await
            .unwrap();

        assert_eq!(result.output, "It's always sunny in Tokyo!");
        assert!(result.output.contains("Tokyo"));
        assert!(!result.is_error);
    }

    #[tokio::test]
    async fn test_missing_city_is_rejected() {
        let tool = WeatherTool::new();
        let result = tool.execute(&json!({}), &test_runtime()).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_definition_requires_city() {
        let definition = WeatherTool::new().definition();
        assert_eq!(definition.name, WEATHER_TOOL_NAME);
        assert_eq!(
            definition.input_schema.required,
            Some(vec!["city".to_string()])
        );
    }
}
