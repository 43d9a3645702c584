//! # Documents-Directory Artifact Store
//!
//! The default [`ArtifactStore`] implementation: writes export artifacts to
//! the platform's per-user data directory via async file I/O. Platform
//! shells that have their own sandboxed documents folder (or tests using a
//! scratch directory) construct the store with an explicit path instead.
//!
//! ## Platform-Specific Paths
//! - **macOS**: `~/Library/Application Support/com.scantally.tally/`
//! - **Windows**: `%APPDATA%\scantally\tally\data\`
//! - **Linux**: `~/.local/share/tally/`
//!
//! ## Development Override
//! Set the `TALLY_EXPORT_DIR` environment variable to use a custom path.

use std::path::PathBuf;

use async_trait::async_trait;
use directories::ProjectDirs;
use tracing::debug;

use tally_core::error::{ExportError, ExportResult};

use crate::capability::ArtifactStore;

/// Filesystem-backed artifact store rooted at one directory.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    dir: PathBuf,
}

impl DocumentStore {
    /// Creates a store rooted at an explicit directory.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        DocumentStore { dir: dir.into() }
    }

    /// Creates a store rooted at the platform data directory, honoring the
    /// `TALLY_EXPORT_DIR` override.
    pub fn from_env() -> ExportResult<Self> {
        if let Ok(dir) = std::env::var("TALLY_EXPORT_DIR") {
            return Ok(DocumentStore::at(dir));
        }

        let proj_dirs =
            ProjectDirs::from("com", "scantally", "tally").ok_or(ExportError::WriteFailed {
                name: String::new(),
                reason: "could not determine a documents directory".to_string(),
            })?;

        Ok(DocumentStore::at(proj_dirs.data_dir()))
    }

    /// The directory artifacts land in.
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }
}

#[async_trait]
impl ArtifactStore for DocumentStore {
    async fn write(&self, name: &str, content: &str) -> ExportResult<PathBuf> {
        let map_io = |err: std::io::Error| ExportError::WriteFailed {
            name: name.to_string(),
            reason: err.to_string(),
        };

        tokio::fs::create_dir_all(&self.dir).await.map_err(map_io)?;

        let location = self.dir.join(name);
        tokio::fs::write(&location, content).await.map_err(map_io)?;

        debug!(?location, bytes = content.len(), "export artifact written");
        Ok(location)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_creates_artifact_in_dir() {
        let scratch = tempfile::tempdir().unwrap();
        let store = DocumentStore::at(scratch.path());

        let location = store.write("barcodes.csv", "123\n456").await.unwrap();

        assert_eq!(location, scratch.path().join("barcodes.csv"));
        assert_eq!(std::fs::read_to_string(&location).unwrap(), "123\n456");
    }

    #[tokio::test]
    async fn test_rewrite_overwrites_same_name() {
        let scratch = tempfile::tempdir().unwrap();
        let store = DocumentStore::at(scratch.path());

        store.write("barcodes.csv", "old").await.unwrap();
        let location = store.write("barcodes.csv", "new").await.unwrap();

        assert_eq!(std::fs::read_to_string(&location).unwrap(), "new");
        // One artifact, not two
        assert_eq!(std::fs::read_dir(scratch.path()).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn test_write_creates_missing_directories() {
        let scratch = tempfile::tempdir().unwrap();
        let nested = scratch.path().join("exports").join("tally");
        let store = DocumentStore::at(&nested);

        let location = store.write("barcodes.csv", "").await.unwrap();

        assert!(location.starts_with(&nested));
        assert_eq!(std::fs::read_to_string(&location).unwrap(), "");
    }

    #[tokio::test]
    async fn test_unwritable_dir_maps_to_write_failed() {
        let scratch = tempfile::tempdir().unwrap();
        // A file where the store expects a directory
        let blocker = scratch.path().join("blocked");
        std::fs::write(&blocker, "not a directory").unwrap();
        let store = DocumentStore::at(&blocker);

        let err = store.write("barcodes.csv", "123").await.unwrap_err();
        assert!(matches!(err, ExportError::WriteFailed { .. }));
    }
}
