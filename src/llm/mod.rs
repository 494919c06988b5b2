pub mod anthropic;
pub mod provider;
pub mod types;

pub use anthropic::AnthropicProvider;
pub use provider::LlmProvider;
pub use types::{
    define_tool, ContentBlock, Message, MessageContent, MessageRequest, MessageResponse, Role,
    StopReason, ToolChoice, ToolDefinition, ToolInputSchema, Usage,
};
