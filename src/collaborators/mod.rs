// Collaborator layer: the capabilities the injected components depend on
//
// Design Decision: Trait-per-role ports with real and mock adapters
//
// Rationale: Every dependency a demonstration component receives is an
// abstract role, never a concrete type. This is what makes the three
// injection flavours worth demonstrating:
// 1. Any conforming implementation can be substituted (file -> in-memory,
//    tokio queue -> inline queue)
// 2. Unit tests inject mocks and never touch real I/O or a real runtime
// 3. The component's contract names exactly what it needs, nothing more
//
// Layout mirrors a ports-and-adapters split:
// - traits define the ports (FileSystem, NetworkServiceDelegate, TaskQueue)
// - filesystem/queue provide the production adapters
// - mocks provides test doubles and helpers (test builds only)

pub mod filesystem;
#[cfg(test)]
pub mod mocks;
pub mod queue;
pub mod traits;

// Re-export commonly used types
pub use filesystem::RealFileSystem;
pub use queue::TokioTaskQueue;
pub use traits::{FileSystem, NetworkServiceDelegate, Task, TaskQueue};
