//! Core types shared across the framework

pub mod error;

pub use error::{AgentError, AgentResult};
