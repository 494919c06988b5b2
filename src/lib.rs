//! weathervane — a punny weather forecaster agent on the Anthropic Messages API
//!
//! A compact agent runtime (model client, tool dispatch, per-invocation
//! context, structured output, thread-keyed conversation memory) plus the
//! weather tutorial surface built on top of it: two canned tools, a punny
//! forecaster prompt, and a structured reply shape.
//!
//! See `demos/` for the runnable programs:
//! - `overview`: one tool, one question, plain text answer
//! - `forecast_agent`: tools + user context + structured output + memory

pub mod agent;
pub mod checkpoint;
pub mod cli;
pub mod core;
pub mod forecast;
pub mod llm;
pub mod logging;
pub mod runtime;
pub mod tools;

pub use agent::{Agent, AgentConfig, AgentInput, AgentResponse, InvokeOptions, ToolStrategy};
pub use checkpoint::{Checkpointer, FileSaver, InMemorySaver};
pub use crate::core::{AgentError, AgentResult};
pub use llm::{AnthropicProvider, LlmProvider, Message};
pub use runtime::{RuntimeContext, ToolRuntime};
pub use tools::{Tool, ToolRegistry, ToolResult, UserContext, UserLocationTool, WeatherTool};
