//! Framework error types
//!
//! Failures from the model client, checkpoint storage, and response decoding
//! surface through `AgentError`. Nothing is retried or swallowed; callers see
//! the underlying failure.

use thiserror::Error;

/// Result alias used throughout the framework
pub type AgentResult<T> = Result<T, AgentError>;

/// Errors produced by the agent framework
#[derive(Debug, Error)]
pub enum AgentError {
    /// A required environment variable is missing
    #[error("environment variable {0} is not set")]
    MissingEnv(String),

    /// HTTP transport failure talking to the model API
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The model API returned an error response
    #[error("api error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// JSON encoding or decoding failure
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem failure in checkpoint storage
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A named conversation thread does not exist
    #[error("thread not found: {0}")]
    ThreadNotFound(String),
}
