// Core trait definitions for collaborator capabilities
//
// Design Decision: Trait-based abstractions for every collaborator role
//
// Rationale: Traits provide compile-time polymorphism in Rust, enabling:
// 1. Substitution of any conforming implementation (the point of DI)
// 2. Type-safe mocking (trait objects with Arc<dyn Trait>)
// 3. Explicit contracts for what a component actually needs
// 4. Send + Sync bounds for async/concurrent safety
//
// Each injected component depends on one of these roles, never on a
// concrete type. All traits are marked Send + Sync to work with tokio's
// async runtime, which requires thread-safe types for spawning tasks
// across threads.

use crate::error::Result;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use std::path::Path;

/// Filesystem abstraction injected into FileLoader at construction
///
/// Provides async file operations backed by tokio::fs in production.
/// Kept deliberately small: FileLoader only demonstrates that a required
/// collaborator travels through an initializer.
///
/// Usage:
///     let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);
///     let content = fs.read_to_string(Path::new("config.json")).await?;
#[cfg_attr(test, automock)]
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Read entire file contents as a UTF-8 string
    ///
    /// # Errors
    /// - File not found
    /// - Permission denied
    /// - Invalid UTF-8 encoding
    async fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Check if a path exists (file or directory)
    ///
    /// Returns false on permission errors (cannot distinguish from non-existence)
    async fn exists(&self, path: &Path) -> bool;
}

/// Marker capability for objects that may act as NetworkService's delegate
///
/// Intentionally empty: the property-injection demonstration is about the
/// slot, not about what the delegate can do. Any Send + Sync type can
/// conform, matching the delegate-protocol idiom this is modelled on.
pub trait NetworkServiceDelegate: Send + Sync {}

/// A unit of work handed to a task queue
///
/// Boxed so queues can move it across threads without knowing its shape.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Task-execution capability injected into DataService per call
///
/// A queue accepts work and runs it at some later point on its own
/// thread(s). Submission is fire-and-forget: there is no completion
/// signal, no result, and no ordering guarantee relative to the caller
/// or to other queues.
///
/// Usage:
///     let queue = TokioTaskQueue::new();
///     queue.submit(Box::new(|| println!("ran later")))?;
#[cfg_attr(test, automock)]
pub trait TaskQueue: Send + Sync {
    /// Hand a unit of work to the queue
    ///
    /// Returns as soon as the work is accepted, before it runs.
    ///
    /// # Errors
    /// - SchedulingError if the queue has already shut down
    fn submit(&self, task: Task) -> Result<()>;
}
