pub mod agent_loop;
pub mod config;
pub mod structured;

pub use agent_loop::{Agent, AgentInput, AgentResponse, InvokeOptions};
pub use config::AgentConfig;
pub use structured::ToolStrategy;
