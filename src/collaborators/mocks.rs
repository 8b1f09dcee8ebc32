// Mock test helpers and common mock patterns
//
// Design Decision: Centralized mock helpers for consistent testing
//
// Rationale: Provides reusable mock constructors with sensible defaults.
// Tests can override specific behaviors while inheriting baseline setup.
//
// Usage:
//     use crate::collaborators::mocks::test_helpers::*;
//     let mut mock_fs = create_mock_filesystem();
//     mock_fs.expect_read_to_string()
//         .returning(|_| Ok("custom data".to_string()));

#[cfg(test)]
pub mod test_helpers {
    use super::super::traits::*;
    use crate::error::Result;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Create a mock filesystem with default "file not found" behavior
    ///
    /// Default behavior:
    /// - exists() returns false
    pub fn create_mock_filesystem() -> MockFileSystem {
        let mut mock = MockFileSystem::new();

        // Default: file doesn't exist
        mock.expect_exists().returning(|_| false);

        mock
    }

    /// Create a mock filesystem that serves one fixed file body
    ///
    /// All reads succeed with `content`; exists() returns true.
    pub fn create_filesystem_with_content(content: &str) -> MockFileSystem {
        let mut mock = MockFileSystem::new();
        let content = content.to_string();

        mock.expect_exists().returning(|_| true);
        mock.expect_read_to_string()
            .returning(move |_| Ok(content.clone()));

        mock
    }

    /// Delegate stand-in for property-injection tests
    ///
    /// Carries no behavior; the tests only care about slot identity
    /// and lifetime, so the marker trait is all it needs.
    pub struct TestWorker;

    impl NetworkServiceDelegate for TestWorker {}

    /// Task queue that counts submissions without running anything
    ///
    /// Submitted tasks are dropped unexecuted. Used to verify the
    /// exactly-once and no-leakage properties of parameter injection
    /// without timing dependence.
    pub struct CountingQueue {
        submissions: AtomicUsize,
    }

    impl CountingQueue {
        pub fn new() -> Arc<Self> {
            Arc::new(Self {
                submissions: AtomicUsize::new(0),
            })
        }

        pub fn submission_count(&self) -> usize {
            self.submissions.load(Ordering::SeqCst)
        }
    }

    impl TaskQueue for CountingQueue {
        fn submit(&self, _task: Task) -> Result<()> {
            self.submissions.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    /// Task queue that runs submitted work inline on the caller's thread
    ///
    /// Useful when a test needs the work's side effects to be observable
    /// immediately after submit() returns.
    pub struct InlineQueue;

    impl TaskQueue for InlineQueue {
        fn submit(&self, task: Task) -> Result<()> {
            task();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_helpers::*;
    use crate::collaborators::traits::TaskQueue;

    #[test]
    fn test_create_mock_filesystem() {
        let mock = create_mock_filesystem();
        // Just verify it compiles and can be created
        drop(mock);
    }

    #[test]
    fn test_counting_queue_counts() {
        let queue = CountingQueue::new();
        queue.submit(Box::new(|| {})).unwrap();
        queue.submit(Box::new(|| {})).unwrap();

        assert_eq!(queue.submission_count(), 2);
    }

    #[test]
    fn test_inline_queue_runs_immediately() {
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::sync::Arc;

        let ran = Arc::new(AtomicBool::new(false));
        let ran_clone = ran.clone();

        InlineQueue
            .submit(Box::new(move || ran_clone.store(true, Ordering::SeqCst)))
            .unwrap();

        assert!(ran.load(Ordering::SeqCst));
    }
}
