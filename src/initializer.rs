// Initializer injection: required collaborators arrive at construction
//
// Design Decision: Constructor takes the dependency, the field is private
// and never reassigned
//
// Rationale: Rust enforces the whole contract structurally:
// 1. FileLoader::new has no default for its argument, so forgetting the
//    dependency is a compile error, not a runtime check
// 2. No setter exists, so the reference is immutable for the object's
//    entire lifetime
// 3. Arc<dyn FileSystem> keeps the collaborator abstract; any conforming
//    implementation can be injected

use crate::collaborators::FileSystem;
use crate::error::Result;
use std::path::Path;
use std::sync::Arc;

/// File loader with an initializer-injected filesystem dependency
///
/// The filesystem is supplied exactly once, at construction, and is
/// guaranteed present for as long as the loader exists.
///
/// Usage:
///     let loader = FileLoader::new(Arc::new(RealFileSystem));
///     let content = loader.load(Path::new("notes.txt")).await?;
pub struct FileLoader {
    file_manager: Arc<dyn FileSystem>,
}

impl FileLoader {
    /// Create a loader around the given filesystem
    ///
    /// There is no way to construct a FileLoader without one.
    pub fn new(file_manager: Arc<dyn FileSystem>) -> Self {
        Self { file_manager }
    }

    /// Read a file through the injected filesystem
    ///
    /// # Errors
    /// Whatever the injected filesystem reports (missing file,
    /// permissions, encoding).
    pub async fn load(&self, path: &Path) -> Result<String> {
        tracing::debug!(path = %path.display(), "loading file");
        self.file_manager.read_to_string(path).await
    }

    /// The collaborator this loader was constructed with
    pub fn file_manager(&self) -> &Arc<dyn FileSystem> {
        &self.file_manager
    }
}
