//! Filesystem access for playlist files
//!
//! All operations are whole-buffer; nothing is streamed.

use crate::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Filesystem primitives used by load, save and migration
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Check whether a file exists
    async fn exists(&self, path: &Path) -> bool;

    /// Read a whole file
    async fn read(&self, path: &Path) -> Result<Vec<u8>>;

    /// Write a whole file, replacing any existing one
    async fn write(&self, path: &Path, data: &[u8]) -> Result<()>;

    /// Delete a file
    async fn remove(&self, path: &Path) -> Result<()>;
}

/// [`FileSystem`] backed by the local disk
///
/// Writes go to a hidden sibling file which is then renamed over the
/// target, so a failed write never leaves a truncated playlist behind.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    pub fn new() -> Self {
        Self
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.tmp"))
}

#[async_trait]
impl FileSystem for LocalFileSystem {
    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::metadata(path)
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false)
    }

    async fn read(&self, path: &Path) -> Result<Vec<u8>> {
        Ok(tokio::fs::read(path).await?)
    }

    async fn write(&self, path: &Path, data: &[u8]) -> Result<()> {
        let staging = staging_path(path);
        debug!(path = %path.display(), bytes = data.len(), "Writing playlist file");

        if let Err(e) = tokio::fs::write(&staging, data).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(e.into());
        }

        if let Err(e) = tokio::fs::rename(&staging, path).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(e.into());
        }

        Ok(())
    }

    async fn remove(&self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "Removing playlist file");
        Ok(tokio::fs::remove_file(path).await?)
    }
}
