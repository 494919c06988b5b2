//! Tool system for the agent
//!
//! This module provides the Tool trait and ToolRegistry for managing
//! tools that the agent can use, plus the built-in tutorial tools.

pub mod location;
mod registry;
mod tool;
pub mod weather;

pub use location::{UserContext, UserLocationTool};
pub use registry::ToolRegistry;
pub use tool::{Tool, ToolResult};
pub use weather::WeatherTool;
