//! Structured output via tool calls
//!
//! A [`ToolStrategy`] declares a synthetic tool whose input schema is the
//! desired response shape. When the model calls it, the loop captures the
//! call's arguments as the structured response, acknowledges with a tool
//! result, and ends the turn.

use serde_json::Value;

use crate::llm::{define_tool, ToolDefinition};

/// Acknowledgement sent back for the structured-output tool call
pub(crate) const STRUCTURED_ACK: &str = "Structured response recorded.";

/// Structured output declared as a tool schema
#[derive(Debug, Clone)]
pub struct ToolStrategy {
    name: String,
    description: String,
    properties: Value,
    required: Vec<String>,
}

impl ToolStrategy {
    /// Declare a response shape
    ///
    /// `properties` is a JSON schema property map; `required` lists the
    /// fields the model must always fill in.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        properties: Value,
        required: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            properties,
            required,
        }
    }

    /// Name of the synthetic tool
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The tool definition exposed to the model
    pub fn as_tool_definition(&self) -> ToolDefinition {
        define_tool(
            &self.name,
            &self.description,
            self.properties.clone(),
            self.required.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strategy_becomes_a_tool() {
        let strategy = ToolStrategy::new(
            "Reply",
            "Record the final reply.",
            json!({"text": {"type": "string"}}),
            vec!["text".to_string()],
        );

        let definition = strategy.as_tool_definition();
        assert_eq!(definition.name, "Reply");
        assert_eq!(definition.input_schema.schema_type, "object");
        assert_eq!(
            definition.input_schema.required,
            Some(vec!["text".to_string()])
        );
    }
}
