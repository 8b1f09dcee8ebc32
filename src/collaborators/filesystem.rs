// Real filesystem implementation for production use
//
// Design Decision: Thin wrapper around tokio::fs
//
// Rationale: Keep implementation simple and focused on the trait contract.
// tokio::fs provides async file I/O that works with tokio runtime.
//
// This is the "real" adapter behind the FileSystem port. Test code uses
// MockFileSystem instead.

use super::traits::FileSystem;
use crate::error::{DiError, Result};
use async_trait::async_trait;
use std::path::Path;

/// Real filesystem implementation using tokio::fs
///
/// Zero-cost wrapper around tokio filesystem operations.
/// All operations are async and work with tokio runtime.
///
/// Usage:
///     let fs = RealFileSystem;
///     let content = fs.read_to_string(Path::new("config.json")).await?;
pub struct RealFileSystem;

#[async_trait]
impl FileSystem for RealFileSystem {
    async fn read_to_string(&self, path: &Path) -> Result<String> {
        tokio::fs::read_to_string(path)
            .await
            .map_err(DiError::IoError)
    }

    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }
}
