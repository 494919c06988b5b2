//! Agent invocation loop with tool calling support
//!
//! Each invocation runs one turn to completion: the caller's messages go out
//! to the model, tool calls requested by the model are executed and fed back,
//! and the loop continues until the model stops asking for tools (or a
//! structured response is captured).

use std::any::Any;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

use crate::core::AgentResult;
use crate::llm::{
    ContentBlock, LlmProvider, Message, MessageResponse, Role, StopReason, ToolChoice,
};
use crate::runtime::{RuntimeContext, ToolRuntime};

use super::config::AgentConfig;
use super::structured::STRUCTURED_ACK;

/// Messages submitted for one invocation
#[derive(Debug, Clone, Default)]
pub struct AgentInput {
    pub messages: Vec<Message>,
}

impl From<&str> for AgentInput {
    fn from(text: &str) -> Self {
        Self {
            messages: vec![Message::user(text)],
        }
    }
}

impl From<String> for AgentInput {
    fn from(text: String) -> Self {
        Self {
            messages: vec![Message::user(text)],
        }
    }
}

impl From<Vec<Message>> for AgentInput {
    fn from(messages: Vec<Message>) -> Self {
        Self { messages }
    }
}

/// Per-invocation options: thread correlation and runtime context
#[derive(Default)]
pub struct InvokeOptions {
    thread_id: Option<String>,
    context: RuntimeContext,
}

impl InvokeOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Correlate this invocation with a conversation thread
    pub fn with_thread_id(mut self, thread_id: impl Into<String>) -> Self {
        self.thread_id = Some(thread_id.into());
        self
    }

    /// Make a resource available to tools for this invocation
    pub fn with_resource<T: Any + Send + Sync>(mut self, resource: T) -> Self {
        self.context.insert_resource(resource);
        self
    }
}

/// Result of one agent invocation
#[derive(Debug, Clone)]
pub struct AgentResponse {
    /// Full conversation after this invocation, history included
    pub messages: Vec<Message>,
    /// Captured structured response, when a response format is configured
    pub structured_response: Option<Value>,
}

impl AgentResponse {
    /// Text of the last assistant message, if it has any
    pub fn final_text(&self) -> Option<String> {
        self.messages
            .iter()
            .rev()
            .find(|message| message.role == Role::Assistant)
            .map(|message| message.text())
            .filter(|text| !text.is_empty())
    }

    /// Decode the structured response into a declared shape
    pub fn structured_as<T: DeserializeOwned>(&self) -> AgentResult<Option<T>> {
        match &self.structured_response {
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
            None => Ok(None),
        }
    }
}

/// Agent assembled from a configuration and a model provider
pub struct Agent {
    config: AgentConfig,
    provider: Arc<dyn LlmProvider>,
}

impl Agent {
    /// Create an agent
    pub fn new(config: AgentConfig, provider: Arc<dyn LlmProvider>) -> Self {
        tracing::info!(
            model = provider.model(),
            tools = config.tools.tool_names().len(),
            "Creating agent"
        );
        Self { config, provider }
    }

    /// Run one invocation to completion
    pub async fn invoke(
        &self,
        input: impl Into<AgentInput>,
        options: InvokeOptions,
    ) -> AgentResult<AgentResponse> {
        let input = input.into();
        let run_id = Uuid::new_v4();
        tracing::info!(
            %run_id,
            thread_id = options.thread_id.as_deref().unwrap_or("-"),
            "Starting invocation"
        );

        // Replay saved history when the caller names a thread
        let mut messages = match (&self.config.checkpointer, options.thread_id.as_deref()) {
            (Some(checkpointer), Some(thread_id)) => checkpointer.load(thread_id)?,
            _ => Vec::new(),
        };
        messages.extend(input.messages);

        // Tool definitions, plus the structured-output tool when configured
        let mut tools = self.config.tools.get_definitions();
        if let Some(strategy) = &self.config.response_format {
            tools.push(strategy.as_tool_definition());
        }

        let runtime = ToolRuntime::new(options.context, options.thread_id);

        let mut structured_response: Option<Value> = None;
        let mut iteration = 0;
        loop {
            iteration += 1;
            if iteration > self.config.max_tool_iterations {
                tracing::warn!(%run_id, "Maximum tool iterations reached");
                break;
            }

            let response = self
                .provider
                .send_with_tools(
                    messages.clone(),
                    Some(&self.config.system_prompt),
                    tools.clone(),
                    Some(ToolChoice::auto()),
                )
                .await?;

            let (should_continue, new_messages) = self
                .process_response(&response, &runtime, &mut structured_response)
                .await;
            messages.extend(new_messages);

            if !should_continue {
                break;
            }
        }

        // Persist the full conversation for the thread
        if let (Some(checkpointer), Some(thread_id)) =
            (&self.config.checkpointer, runtime.thread_id())
        {
            checkpointer.save(thread_id, &messages)?;
        }

        tracing::info!(
            %run_id,
            messages = messages.len(),
            structured = structured_response.is_some(),
            "Invocation finished"
        );

        Ok(AgentResponse {
            messages,
            structured_response,
        })
    }

    /// Process a response from the model
    ///
    /// Returns (should_continue, new_messages_to_add)
    async fn process_response(
        &self,
        response: &MessageResponse,
        runtime: &ToolRuntime,
        structured_response: &mut Option<Value>,
    ) -> (bool, Vec<Message>) {
        let mut new_messages = Vec::new();
        let mut tool_results: Vec<ContentBlock> = Vec::new();
        let mut has_tool_use = false;
        let mut captured_structured = false;

        for block in &response.content {
            match block {
                ContentBlock::Text { text } => {
                    tracing::debug!("Assistant text: {}", text);
                }
                ContentBlock::ToolUse { id, name, input } => {
                    has_tool_use = true;

                    // The structured-output tool ends the turn instead of
                    // executing anything
                    if self
                        .config
                        .response_format
                        .as_ref()
                        .is_some_and(|strategy| strategy.name() == name)
                    {
                        tracing::info!("Structured response captured ({})", name);
                        *structured_response = Some(input.clone());
                        captured_structured = true;
                        tool_results.push(ContentBlock::ToolResult {
                            tool_use_id: id.clone(),
                            content: Some(STRUCTURED_ACK.to_string()),
                            is_error: None,
                        });
                        continue;
                    }

                    tracing::info!("Tool use requested: {} ({})", name, id);
                    let result = match self.config.tools.execute(name, input, runtime).await {
                        Ok(result) => ContentBlock::ToolResult {
                            tool_use_id: id.clone(),
                            content: Some(result.output),
                            is_error: if result.is_error { Some(true) } else { None },
                        },
                        Err(e) => {
                            let error_msg = format!("Tool execution failed: {}", e);
                            tracing::warn!("{}", error_msg);
                            ContentBlock::ToolResult {
                                tool_use_id: id.clone(),
                                content: Some(error_msg),
                                is_error: Some(true),
                            }
                        }
                    };
                    tool_results.push(result);
                }
                ContentBlock::ToolResult { .. } => {
                    // Tool results belong in user messages; ignore if the
                    // model ever echoes one
                    tracing::warn!("Unexpected ToolResult in assistant response");
                }
            }
        }

        // Record the assistant message, then the tool results as a user message
        new_messages.push(Message::assistant_with_blocks(response.content.clone()));
        if has_tool_use && !tool_results.is_empty() {
            new_messages.push(Message::user_with_blocks(tool_results));
        }

        let should_continue =
            matches!(response.stop_reason, Some(StopReason::ToolUse)) && !captured_structured;

        (should_continue, new_messages)
    }
}
