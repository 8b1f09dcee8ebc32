// di-flavours: an educational playground for the three dependency-injection
// flavours in Rust.
//
// Each flavour is one small, self-contained component:
// - initializer::FileLoader  — required collaborator at construction
// - property::NetworkService — optional, non-owning collaborator assigned later
// - parameter::DataService   — transient collaborators passed per call
//
// The components do not interact; the collaborators module holds the
// capability traits they depend on, with real and mock implementations.
// Runnable walkthroughs live under demos/.

pub mod collaborators; // Capability traits and their adapters
pub mod error;
pub mod initializer;
pub mod parameter;
pub mod property;

// Re-export commonly used types for convenience
pub use collaborators::{
    FileSystem, NetworkServiceDelegate, RealFileSystem, Task, TaskQueue, TokioTaskQueue,
};
pub use error::{DiError, Result};
pub use initializer::FileLoader;
pub use parameter::DataService;
pub use property::{NetworkService, Worker};
