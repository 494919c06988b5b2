//! Punny weather forecaster assembly
//!
//! The canned system prompt, the structured reply shape, and the tool set
//! used by the forecaster demos.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::agent::ToolStrategy;
use crate::tools::{ToolRegistry, UserLocationTool, WeatherTool};

/// System prompt for the punny weather forecaster
pub const FORECASTER_PROMPT: &str = r#"You are an expert weather forecaster, who speaks in puns.

You have access to two tools:

- get_weather_for_location: use this to get the weather for a specific location
- get_user_location: use this to get the user's location

If a user asks you for the weather, make sure you know the location. If you can tell from the question that they mean wherever they are, use the get_user_location tool to find their location."#;

/// Structured reply produced by the forecaster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastReply {
    /// A punny response (always required)
    pub punny_response: String,
    /// Any interesting information about the weather, if available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather_conditions: Option<String>,
}

/// Response format declaration for the forecaster
pub fn forecast_reply_format() -> ToolStrategy {
    ToolStrategy::new(
        "ForecastReply",
        "Record the final forecast reply for the user.",
        json!({
            "punny_response": {
                "type": "string",
                "description": "A punny response (always required)"
            },
            "weather_conditions": {
                "type": "string",
                "description": "Any interesting information about the weather, if available"
            }
        }),
        vec!["punny_response".to_string()],
    )
}

/// Tool set the forecaster runs with
pub fn forecast_tools() -> ToolRegistry {
    let mut tools = ToolRegistry::new();
    tools.register(UserLocationTool::new());
    tools.register(WeatherTool::new());
    tools
}
