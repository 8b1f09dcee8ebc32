// Centralized error handling using thiserror for type-safe error management
//
// Design Decision: Unified error type with context
//
// Rationale: Instead of using Box<dyn Error> throughout, we define specific
// error variants that map to the failure modes the playground actually has.
// This enables pattern matching, better error messages, and type safety.
//
// Note how small the taxonomy is. Missing-required-dependency is not here:
// FileLoader's constructor signature makes that a compile error, not a
// runtime one. Absent-optional-dependency is not here either: an empty
// delegate slot on NetworkService is a normal state, surfaced as Option.

use thiserror::Error;

/// Main error type for the di-flavours playground
///
/// Usage:
///     async fn load(&self, path: &Path) -> Result<String> {
///         let content = self.file_manager.read_to_string(path).await?;
///         Ok(content)
///     }
#[derive(Debug, Error)]
pub enum DiError {
    /// Work could not be handed to a task queue
    ///
    /// Raised when submitting to a queue that has already shut down.
    /// Failures of the scheduled work itself are the queue's concern
    /// and are never surfaced here.
    #[error("Scheduling error: {0}")]
    SchedulingError(String),

    /// IO operation failed (file read, etc.)
    ///
    /// Wraps std::io::Error with automatic conversion via #[from].
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Type alias for Result with DiError
///
/// Use this instead of std::result::Result<T, DiError> for convenience.
pub type Result<T> = std::result::Result<T, DiError>;
