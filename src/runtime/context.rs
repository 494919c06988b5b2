//! Per-invocation runtime context
//!
//! A by-type resource map. Callers fill it when invoking the agent and tools
//! read from it during execution. Resources are shared via `Arc`, so cloning
//! the context is cheap and a clone sees the same resources.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

/// Resources available to tools during a single invocation
#[derive(Default, Clone)]
pub struct RuntimeContext {
    resources: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl RuntimeContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a resource by value
    ///
    /// Replaces any existing resource of the same type.
    pub fn insert_resource<T: Any + Send + Sync>(&mut self, resource: T) {
        self.resources.insert(TypeId::of::<T>(), Arc::new(resource));
    }

    /// Insert an already shared resource
    pub fn insert_resource_arc<T: Any + Send + Sync>(&mut self, resource: Arc<T>) {
        self.resources.insert(TypeId::of::<T>(), resource);
    }

    /// Look up a resource by type
    pub fn resource<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.resources
            .get(&TypeId::of::<T>())
            .cloned()
            .and_then(|resource| resource.downcast::<T>().ok())
    }

    /// Whether any resources have been inserted
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct UserId(String);

    #[test]
    fn test_insert_and_get() {
        let mut context = RuntimeContext::new();
        assert!(context.is_empty());

        context.insert_resource(UserId("1".to_string()));
        let user = context.resource::<UserId>().unwrap();
        assert_eq!(*user, UserId("1".to_string()));
    }

    #[test]
    fn test_missing_resource_is_none() {
        let context = RuntimeContext::new();
        assert!(context.resource::<UserId>().is_none());
    }

    #[test]
    fn test_insert_replaces_same_type() {
        let mut context = RuntimeContext::new();
        context.insert_resource(UserId("1".to_string()));
        context.insert_resource(UserId("2".to_string()));

        let user = context.resource::<UserId>().unwrap();
        assert_eq!(user.0, "2");
    }

    #[test]
    fn test_arc_resource_shared_with_clone() {
        let mut context = RuntimeContext::new();
        let shared = Arc::new(UserId("42".to_string()));
        context.insert_resource_arc(shared.clone());

        let cloned = context.clone();
        let from_clone = cloned.resource::<UserId>().unwrap();
        assert!(Arc::ptr_eq(&shared, &from_clone));
    }
}
