//! The test-processor contract and a host-facing registry.
//!
//! The surrounding framework owns processor lifecycle: it registers
//! implementations at startup and deregisters them at shutdown. The registry
//! here is the host-runtime-agnostic form of that plumbing.

use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::types::{TestRequest, TestResponse};

/// A pluggable executor of one test step.
///
/// Implementations absorb every failure: `execute_test` always returns a
/// [`TestResponse`], with an all-unset record signaling that the step
/// produced no usable result. Each invocation must be independent and
/// side-effect-free with respect to other invocations.
pub trait TestProcessor: Send + Sync {
    /// Stable name the framework uses to select this processor.
    fn name(&self) -> &str;

    /// Execute one test step, blocking until the outcome is known.
    fn execute_test(&self, request: &TestRequest) -> TestResponse;
}

/// Name-keyed set of registered processors.
///
/// Used single-threaded at framework startup and shutdown; lookups hand out
/// clones of the shared processor handle.
#[derive(Default)]
pub struct ProcessorRegistry {
    processors: HashMap<String, Arc<dyn TestProcessor>>,
}

impl ProcessorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a processor, replacing any existing one of the same name.
    pub fn register(&mut self, processor: Arc<dyn TestProcessor>) {
        debug!(name = processor.name(), "registering test processor");
        self.processors
            .insert(processor.name().to_string(), processor);
    }

    /// Remove a processor by name, returning it if it was registered.
    pub fn deregister(&mut self, name: &str) -> Option<Arc<dyn TestProcessor>> {
        debug!(name, "deregistering test processor");
        self.processors.remove(name)
    }

    pub fn lookup(&self, name: &str) -> Option<Arc<dyn TestProcessor>> {
        self.processors.get(name).cloned()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.processors.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct CannedProcessor {
        name: &'static str,
        status: u16,
    }

    impl TestProcessor for CannedProcessor {
        fn name(&self) -> &str {
            self.name
        }

        fn execute_test(&self, _request: &TestRequest) -> TestResponse {
            TestResponse {
                body: None,
                status_code: Some(self.status),
                response_headers: None,
            }
        }
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = ProcessorRegistry::new();
        registry.register(Arc::new(CannedProcessor {
            name: "canned",
            status: 200,
        }));

        let processor = registry.lookup("canned").expect("registered");
        let response = processor.execute_test(&TestRequest::new("http://x", "<operation>GET</operation>"));
        assert_eq!(response.status_code, Some(200));
    }

    #[test]
    fn test_lookup_unknown_name() {
        let registry = ProcessorRegistry::new();
        assert!(registry.lookup("missing").is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut registry = ProcessorRegistry::new();
        registry.register(Arc::new(CannedProcessor {
            name: "canned",
            status: 200,
        }));
        registry.register(Arc::new(CannedProcessor {
            name: "canned",
            status: 204,
        }));

        assert_eq!(registry.len(), 1);
        let processor = registry.lookup("canned").unwrap();
        let response = processor.execute_test(&TestRequest::new("http://x", "<operation>GET</operation>"));
        assert_eq!(response.status_code, Some(204));
    }

    #[test]
    fn test_deregister_removes_processor() {
        let mut registry = ProcessorRegistry::new();
        registry.register(Arc::new(CannedProcessor {
            name: "canned",
            status: 200,
        }));

        assert!(registry.deregister("canned").is_some());
        assert!(registry.lookup("canned").is_none());
        assert!(registry.deregister("canned").is_none());
    }
}
