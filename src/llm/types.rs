//! Anthropic Messages API types
//!
//! Request and response shapes shared by the provider and the agent loop.
//! Serialization matches the wire format; optional fields are skipped when
//! absent so requests stay minimal.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Role of a conversation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single conversation message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: MessageContent,
}

/// Message content: plain text or a list of content blocks
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
}

/// A content block within a message
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        text: String,
    },
    ToolUse {
        id: String,
        name: String,
        input: Value,
    },
    ToolResult {
        tool_use_id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        content: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        is_error: Option<bool>,
    },
}

impl Message {
    /// Create a user message with plain text content
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Text(text.into()),
        }
    }

    /// Create an assistant message with plain text content
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: MessageContent::Text(text.into()),
        }
    }

    /// Create an assistant message from content blocks
    pub fn assistant_with_blocks(blocks: Vec<ContentBlock>) -> Self {
        Self {
            role: Role::Assistant,
            content: MessageContent::Blocks(blocks),
        }
    }

    /// Create a user message from content blocks (tool results)
    pub fn user_with_blocks(blocks: Vec<ContentBlock>) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Blocks(blocks),
        }
    }

    /// Collect the text content of this message
    ///
    /// Non-text blocks (tool use, tool results) are skipped.
    pub fn text(&self) -> String {
        match &self.content {
            MessageContent::Text(text) => text.clone(),
            MessageContent::Blocks(blocks) => blocks
                .iter()
                .filter_map(|block| match block {
                    ContentBlock::Text { text } => Some(text.as_str()),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Why the model stopped generating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    EndTurn,
    MaxTokens,
    StopSequence,
    ToolUse,
    Refusal,
}

/// Token usage reported by the API
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// JSON schema for a tool's input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInputSchema {
    #[serde(rename = "type")]
    pub schema_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

/// A tool exposed to the model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub input_schema: ToolInputSchema,
}

/// Build a tool definition from a name, description, property map, and
/// required field list
pub fn define_tool(
    name: &str,
    description: &str,
    properties: Value,
    required: Vec<String>,
) -> ToolDefinition {
    ToolDefinition {
        name: name.to_string(),
        description: Some(description.to_string()),
        input_schema: ToolInputSchema {
            schema_type: "object".to_string(),
            properties: Some(properties),
            required: Some(required),
        },
    }
}

/// How the model should choose among the provided tools
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolChoice {
    Auto {
        #[serde(skip_serializing_if = "Option::is_none")]
        disable_parallel_tool_use: Option<bool>,
    },
    Any {
        #[serde(skip_serializing_if = "Option::is_none")]
        disable_parallel_tool_use: Option<bool>,
    },
    Tool {
        name: String,
    },
}

impl ToolChoice {
    /// Let the model decide whether to call a tool
    pub fn auto() -> Self {
        Self::Auto {
            disable_parallel_tool_use: None,
        }
    }
}

/// Request body for the Messages API
#[derive(Debug, Clone, Serialize)]
pub struct MessageRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<ToolDefinition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<ToolChoice>,
}

/// Response body from the Messages API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub id: String,
    pub model: String,
    pub role: Role,
    pub content: Vec<ContentBlock>,
    pub stop_reason: Option<StopReason>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

impl MessageResponse {
    /// Collect the text blocks of the response
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|block| match block {
                ContentBlock::Text { text } => Some(text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_text_from_blocks() {
        let message = Message::assistant_with_blocks(vec![
            ContentBlock::Text {
                text: "part one".to_string(),
            },
            ContentBlock::ToolUse {
                id: "toolu_1".to_string(),
                name: "get_weather_for_location".to_string(),
                input: json!({"city": "Tokyo"}),
            },
            ContentBlock::Text {
                text: "part two".to_string(),
            },
        ]);

        assert_eq!(message.text(), "part one\npart two");
    }

    #[test]
    fn test_request_skips_absent_fields() {
        let request = MessageRequest {
            model: "claude-sonnet-4-5-20250929".to_string(),
            max_tokens: 1000,
            messages: vec![Message::user("hello")],
            system: None,
            temperature: None,
            tools: None,
            tool_choice: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("system").is_none());
        assert!(value.get("temperature").is_none());
        assert!(value.get("tools").is_none());
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "hello");
    }

    #[test]
    fn test_response_with_tool_use_parses() {
        let body = json!({
            "id": "msg_01",
            "model": "claude-sonnet-4-5-20250929",
            "role": "assistant",
            "content": [
                {"type": "text", "text": "Let me check."},
                {
                    "type": "tool_use",
                    "id": "toolu_01",
                    "name": "get_weather_for_location",
                    "input": {"city": "Tokyo"}
                }
            ],
            "stop_reason": "tool_use",
            "usage": {"input_tokens": 10, "output_tokens": 20}
        });

        let response: MessageResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.stop_reason, Some(StopReason::ToolUse));
        assert_eq!(response.text(), "Let me check.");

        let tool_use = response
            .content
            .iter()
            .find_map(|block| match block {
                ContentBlock::ToolUse { name, input, .. } => Some((name, input)),
                _ => None,
            })
            .expect("tool_use block");
        assert_eq!(tool_use.0, "get_weather_for_location");
        assert_eq!(tool_use.1["city"], "Tokyo");
    }

    #[test]
    fn test_tool_choice_auto_wire_shape() {
        let value = serde_json::to_value(ToolChoice::auto()).unwrap();
        assert_eq!(value, json!({"type": "auto"}));
    }

    #[test]
    fn test_define_tool_schema() {
        let definition = define_tool(
            "get_weather_for_location",
            "Get weather for a given city.",
            json!({"city": {"type": "string"}}),
            vec!["city".to_string()],
        );

        assert_eq!(definition.name, "get_weather_for_location");
        assert_eq!(definition.input_schema.schema_type, "object");
        assert_eq!(
            definition.input_schema.required,
            Some(vec!["city".to_string()])
        );
    }
}
