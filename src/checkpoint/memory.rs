//! In-memory checkpointer
//!
//! Process-local conversation memory. History is lost when the process exits;
//! use [`super::FileSaver`] for durable threads.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::core::AgentResult;
use crate::llm::Message;

use super::Checkpointer;

/// Checkpointer backed by a process-local map
#[derive(Default)]
pub struct InMemorySaver {
    threads: RwLock<HashMap<String, Vec<Message>>>,
}

impl InMemorySaver {
    /// Create an empty saver
    pub fn new() -> Self {
        Self::default()
    }
}

impl Checkpointer for InMemorySaver {
    fn load(&self, thread_id: &str) -> AgentResult<Vec<Message>> {
        let threads = self.threads.read().unwrap();
        Ok(threads.get(thread_id).cloned().unwrap_or_default())
    }

    fn save(&self, thread_id: &str, messages: &[Message]) -> AgentResult<()> {
        let mut threads = self.threads.write().unwrap();
        threads.insert(thread_id.to_string(), messages.to_vec());
        Ok(())
    }

    fn list_threads(&self) -> AgentResult<Vec<String>> {
        let threads = self.threads.read().unwrap();
        let mut ids: Vec<String> = threads.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }

    fn delete_thread(&self, thread_id: &str) -> AgentResult<()> {
        let mut threads = self.threads.write().unwrap();
        threads.remove(thread_id);
        Ok(())
    }
}
