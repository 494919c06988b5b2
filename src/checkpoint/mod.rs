//! Conversation checkpointing
//!
//! Persists per-thread message history so that sequential invocations with
//! the same thread id continue one conversation.

mod memory;
mod store;

pub use memory::InMemorySaver;
pub use store::{FileSaver, ThreadMetadata};

use crate::core::AgentResult;
use crate::llm::Message;

/// Storage for per-thread conversation history
pub trait Checkpointer: Send + Sync {
    /// Load the saved history for a thread
    ///
    /// Unknown threads load as an empty history.
    fn load(&self, thread_id: &str) -> AgentResult<Vec<Message>>;

    /// Replace the saved history for a thread
    fn save(&self, thread_id: &str, messages: &[Message]) -> AgentResult<()>;

    /// List thread ids with saved history
    fn list_threads(&self) -> AgentResult<Vec<String>>;

    /// Remove a thread and its history
    fn delete_thread(&self, thread_id: &str) -> AgentResult<()>;
}
