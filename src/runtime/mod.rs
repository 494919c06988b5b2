//! Runtime plumbing shared between the agent loop and tools

pub mod context;

pub use context::RuntimeContext;

/// Execution environment handed to a tool for a single call
///
/// Holds the caller-supplied [`RuntimeContext`] and the thread id of the
/// active invocation, when one was given. Constructed fresh per invocation.
pub struct ToolRuntime {
    context: RuntimeContext,
    thread_id: Option<String>,
}

impl ToolRuntime {
    /// Create a runtime for one invocation
    pub fn new(context: RuntimeContext, thread_id: Option<String>) -> Self {
        Self { context, thread_id }
    }

    /// Caller-supplied resources for this invocation
    pub fn context(&self) -> &RuntimeContext {
        &self.context
    }

    /// Thread id of the active invocation, if any
    pub fn thread_id(&self) -> Option<&str> {
        self.thread_id.as_deref()
    }
}
