//! # Export Pipeline
//!
//! Serialize → write → share, with re-entrancy protection.
//!
//! ## Export Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Export Pipeline                                   │
//! │                                                                         │
//! │  Tap "Export"                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  acquire in-flight mutex  ◄── a second export queues here, so two       │
//! │       │                       exports never race writes to the same     │
//! │       ▼                       artifact name                             │
//! │  session.serialize() ──────► "123\n456" (pure read, history intact)     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ArtifactStore::write("barcodes.csv", …) ──► location                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ShareTarget::share(location) ──► OS share surface                      │
//! │                                                                         │
//! │  Any failure in write or share surfaces as one ExportError; the         │
//! │  session's `collected` is never modified either way.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tokio::sync::Mutex as AsyncMutex;
use tracing::{error, info};

use tally_core::error::ExportResult;
use tally_core::EXPORT_FILE_NAME;

use crate::capability::{ArtifactStore, ShareTarget};
use crate::state::SessionState;

/// Hands the accumulated session list to the persistence and share
/// capabilities.
#[derive(Clone)]
pub struct Exporter {
    store: Arc<dyn ArtifactStore>,
    share: Arc<dyn ShareTarget>,

    /// Serializes in-flight exports. Held across both capability awaits.
    in_flight: Arc<AsyncMutex<()>>,
}

impl Exporter {
    /// Creates an exporter over the given capabilities.
    pub fn new(store: Arc<dyn ArtifactStore>, share: Arc<dyn ShareTarget>) -> Self {
        Exporter {
            store,
            share,
            in_flight: Arc::new(AsyncMutex::new(())),
        }
    }

    /// Exports the session's current list.
    ///
    /// ## Behavior
    /// - An export started while another is in flight queues behind it;
    ///   the two never run concurrently
    /// - Always writes the fixed artifact name, so a re-export overwrites
    ///   the prior artifact instead of accumulating files
    /// - An empty list exports an empty artifact - not an error
    /// - Never consumes or clears the session history, on success or failure
    pub async fn export_session(&self, session: &SessionState) -> ExportResult<()> {
        let _in_flight = self.in_flight.lock().await;

        // Snapshot under the session lock, then do all I/O without it
        let content = session.serialize();
        let line_count = if content.is_empty() {
            0
        } else {
            content.lines().count()
        };
        info!(lines = line_count, "exporting session");

        let location = self
            .store
            .write(EXPORT_FILE_NAME, &content)
            .await
            .map_err(|err| {
                error!(error = %err, "export write step failed");
                err
            })?;

        self.share.share(&location).await.map_err(|err| {
            error!(error = %err, ?location, "export share step failed");
            err
        })?;

        info!(?location, "export shared");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use tally_core::error::ExportError;
    use tally_core::types::ScanEvent;

    /// Records writes in memory.
    #[derive(Default)]
    struct MemoryStore {
        writes: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl ArtifactStore for MemoryStore {
        async fn write(&self, name: &str, content: &str) -> ExportResult<PathBuf> {
            self.writes
                .lock()
                .unwrap()
                .push((name.to_string(), content.to_string()));
            Ok(PathBuf::from("/documents").join(name))
        }
    }

    struct FailingStore;

    #[async_trait]
    impl ArtifactStore for FailingStore {
        async fn write(&self, name: &str, _content: &str) -> ExportResult<PathBuf> {
            Err(ExportError::WriteFailed {
                name: name.to_string(),
                reason: "disk full".to_string(),
            })
        }
    }

    /// Counts share presentations.
    #[derive(Default)]
    struct CountingShare {
        presented: AtomicUsize,
    }

    #[async_trait]
    impl ShareTarget for CountingShare {
        async fn share(&self, _location: &Path) -> ExportResult<()> {
            self.presented.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct FailingShare;

    #[async_trait]
    impl ShareTarget for FailingShare {
        async fn share(&self, _location: &Path) -> ExportResult<()> {
            Err(ExportError::ShareFailed {
                reason: "no share target available".to_string(),
            })
        }
    }

    fn session_with(payloads: &[&str]) -> SessionState {
        let session = SessionState::begin();
        for payload in payloads {
            session.resume();
            session.handle_decode(&ScanEvent::new("ean13", *payload));
        }
        session
    }

    #[tokio::test]
    async fn test_export_writes_fixed_name_and_shares() {
        let store = Arc::new(MemoryStore::default());
        let share = Arc::new(CountingShare::default());
        let exporter = Exporter::new(store.clone(), share.clone());
        let session = session_with(&["123", "456"]);

        exporter.export_session(&session).await.unwrap();

        let writes = store.writes.lock().unwrap();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].0, EXPORT_FILE_NAME);
        assert_eq!(writes[0].1, "123\n456");
        assert_eq!(share.presented.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_export_empty_session_writes_empty_artifact() {
        let store = Arc::new(MemoryStore::default());
        let exporter = Exporter::new(store.clone(), Arc::new(CountingShare::default()));
        let session = SessionState::begin();

        exporter.export_session(&session).await.unwrap();

        assert_eq!(store.writes.lock().unwrap()[0].1, "");
    }

    #[tokio::test]
    async fn test_write_failure_surfaces_and_skips_share() {
        let share = Arc::new(CountingShare::default());
        let exporter = Exporter::new(Arc::new(FailingStore), share.clone());
        let session = session_with(&["123"]);

        let err = exporter.export_session(&session).await.unwrap_err();

        assert!(matches!(err, ExportError::WriteFailed { .. }));
        assert_eq!(share.presented.load(Ordering::SeqCst), 0);
        // History survives the failure
        assert_eq!(session.snapshot().collected, ["123"]);
    }

    #[tokio::test]
    async fn test_share_failure_surfaces_and_history_survives() {
        let exporter = Exporter::new(Arc::new(MemoryStore::default()), Arc::new(FailingShare));
        let session = session_with(&["123"]);

        let err = exporter.export_session(&session).await.unwrap_err();

        assert!(matches!(err, ExportError::ShareFailed { .. }));
        assert_eq!(session.snapshot().collected, ["123"]);
        assert_eq!(session.serialize(), "123");
    }

    /// Store that trips if two writes ever overlap.
    #[derive(Default)]
    struct OverlapDetectingStore {
        busy: AtomicBool,
        overlapped: AtomicBool,
    }

    #[async_trait]
    impl ArtifactStore for OverlapDetectingStore {
        async fn write(&self, name: &str, _content: &str) -> ExportResult<PathBuf> {
            if self.busy.swap(true, Ordering::SeqCst) {
                self.overlapped.store(true, Ordering::SeqCst);
            }
            // Give a racing export a chance to interleave here
            tokio::task::yield_now().await;
            tokio::task::yield_now().await;
            self.busy.store(false, Ordering::SeqCst);
            Ok(PathBuf::from("/documents").join(name))
        }
    }

    #[tokio::test]
    async fn test_concurrent_exports_are_serialized() {
        let store = Arc::new(OverlapDetectingStore::default());
        let exporter = Exporter::new(store.clone(), Arc::new(CountingShare::default()));
        let session = session_with(&["123"]);

        let first = tokio::spawn({
            let exporter = exporter.clone();
            let session = session.clone();
            async move { exporter.export_session(&session).await }
        });
        let second = tokio::spawn({
            let exporter = exporter.clone();
            let session = session.clone();
            async move { exporter.export_session(&session).await }
        });

        first.await.unwrap().unwrap();
        second.await.unwrap().unwrap();

        assert!(!store.overlapped.load(Ordering::SeqCst));
    }
}
