//! File-backed checkpointer
//!
//! Each thread gets a directory under the base path holding the message
//! history as JSONL plus a small metadata file, so conversations survive
//! process restarts.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{AgentError, AgentResult};
use crate::llm::Message;

use super::Checkpointer;

/// Default directory for thread storage
const THREADS_DIR: &str = "threads";

/// Metadata kept alongside each thread's history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadMetadata {
    pub thread_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub message_count: usize,
}

impl ThreadMetadata {
    /// Create metadata for a new thread
    pub fn new(thread_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            thread_id: thread_id.into(),
            created_at: now,
            updated_at: now,
            message_count: 0,
        }
    }
}

/// Checkpointer backed by per-thread directories on disk
#[derive(Debug, Clone)]
pub struct FileSaver {
    base_dir: PathBuf,
}

impl FileSaver {
    /// Create a saver with the default directory
    pub fn new() -> Self {
        Self {
            base_dir: PathBuf::from(THREADS_DIR),
        }
    }

    /// Create a saver with a custom directory
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: dir.into(),
        }
    }

    /// Get the directory path for a thread
    pub fn thread_dir(&self, thread_id: &str) -> PathBuf {
        self.base_dir.join(thread_id)
    }

    fn metadata_path(&self, thread_id: &str) -> PathBuf {
        self.thread_dir(thread_id).join("metadata.json")
    }

    fn history_path(&self, thread_id: &str) -> PathBuf {
        self.thread_dir(thread_id).join("history.jsonl")
    }

    fn ensure_thread_dir(&self, thread_id: &str) -> AgentResult<PathBuf> {
        let dir = self.thread_dir(thread_id);
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        Ok(dir)
    }

    /// Load thread metadata
    pub fn load_metadata(&self, thread_id: &str) -> AgentResult<ThreadMetadata> {
        let path = self.metadata_path(thread_id);
        if !path.exists() {
            return Err(AgentError::ThreadNotFound(thread_id.to_string()));
        }

        let file = File::open(&path)?;
        let reader = BufReader::new(file);
        let metadata: ThreadMetadata = serde_json::from_reader(reader)?;

        Ok(metadata)
    }

    fn save_metadata(&self, metadata: &ThreadMetadata) -> AgentResult<()> {
        self.ensure_thread_dir(&metadata.thread_id)?;
        let path = self.metadata_path(&metadata.thread_id);

        let file = File::create(&path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, metadata)?;

        Ok(())
    }

    /// Append a single message to a thread's history
    pub fn append_message(&self, thread_id: &str, message: &Message) -> AgentResult<()> {
        self.ensure_thread_dir(thread_id)?;
        let path = self.history_path(thread_id);

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?;

        let json = serde_json::to_string(message)?;
        writeln!(file, "{}", json)?;

        let count = self.load(thread_id)?.len();
        self.touch_metadata(thread_id, count)
    }

    fn touch_metadata(&self, thread_id: &str, message_count: usize) -> AgentResult<()> {
        let mut metadata = match self.load_metadata(thread_id) {
            Ok(metadata) => metadata,
            Err(AgentError::ThreadNotFound(_)) => ThreadMetadata::new(thread_id),
            Err(e) => return Err(e),
        };
        metadata.updated_at = Utc::now();
        metadata.message_count = message_count;
        self.save_metadata(&metadata)
    }
}

impl Default for FileSaver {
    fn default() -> Self {
        Self::new()
    }
}

impl Checkpointer for FileSaver {
    fn load(&self, thread_id: &str) -> AgentResult<Vec<Message>> {
        let path = self.history_path(thread_id);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&path)?;
        let reader = BufReader::new(file);
        let mut messages = Vec::new();

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let message: Message = serde_json::from_str(&line)?;
            messages.push(message);
        }

        Ok(messages)
    }

    fn save(&self, thread_id: &str, messages: &[Message]) -> AgentResult<()> {
        self.ensure_thread_dir(thread_id)?;
        let path = self.history_path(thread_id);

        let file = File::create(&path)?;
        let mut writer = BufWriter::new(file);

        for message in messages {
            let json = serde_json::to_string(message)?;
            writeln!(writer, "{}", json)?;
        }
        writer.flush()?;

        self.touch_metadata(thread_id, messages.len())
    }

    fn list_threads(&self) -> AgentResult<Vec<String>> {
        if !self.base_dir.exists() {
            return Ok(Vec::new());
        }

        let mut threads = Vec::new();
        for entry in fs::read_dir(&self.base_dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_dir() {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    if self.metadata_path(name).exists() {
                        threads.push(name.to_string());
                    }
                }
            }
        }

        threads.sort();
        Ok(threads)
    }

    fn delete_thread(&self, thread_id: &str) -> AgentResult<()> {
        let dir = self.thread_dir(thread_id);
        if dir.exists() {
            fs::remove_dir_all(&dir)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_saver() -> (FileSaver, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let saver = FileSaver::with_dir(temp_dir.path());
        (saver, temp_dir)
    }

    #[test]
    fn test_unknown_thread_loads_empty() {
        let (saver, _temp) = create_test_saver();
        assert!(saver.load("missing").unwrap().is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let (saver, _temp) = create_test_saver();

        let messages = vec![Message::user("Hello"), Message::assistant("Hi there")];
        saver.save("thread-1", &messages).unwrap();

        let loaded = saver.load("thread-1").unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[1].text(), "Hi there");
    }

    #[test]
    fn test_append_message() {
        let (saver, _temp) = create_test_saver();

        saver.append_message("thread-1", &Message::user("Hello")).unwrap();
        saver
            .append_message("thread-1", &Message::assistant("Hi there"))
            .unwrap();

        let loaded = saver.load("thread-1").unwrap();
        assert_eq!(loaded.len(), 2);

        let metadata = saver.load_metadata("thread-1").unwrap();
        assert_eq!(metadata.message_count, 2);
    }

    #[test]
    fn test_save_updates_metadata() {
        let (saver, _temp) = create_test_saver();

        saver.save("thread-1", &[Message::user("one")]).unwrap();
        let first = saver.load_metadata("thread-1").unwrap();
        assert_eq!(first.message_count, 1);

        saver
            .save("thread-1", &[Message::user("one"), Message::assistant("two")])
            .unwrap();
        let second = saver.load_metadata("thread-1").unwrap();
        assert_eq!(second.message_count, 2);
        assert_eq!(second.created_at, first.created_at);
        assert!(second.updated_at >= first.updated_at);
    }

    #[test]
    fn test_missing_metadata_is_thread_not_found() {
        let (saver, _temp) = create_test_saver();
        let result = saver.load_metadata("missing");
        assert!(matches!(result, Err(AgentError::ThreadNotFound(_))));
    }

    #[test]
    fn test_list_and_delete_threads() {
        let (saver, _temp) = create_test_saver();

        saver.save("b", &[Message::user("x")]).unwrap();
        saver.save("a", &[Message::user("y")]).unwrap();
        assert_eq!(saver.list_threads().unwrap(), vec!["a", "b"]);

        saver.delete_thread("a").unwrap();
        assert_eq!(saver.list_threads().unwrap(), vec!["b"]);
        assert!(saver.load("a").unwrap().is_empty());
    }
}
