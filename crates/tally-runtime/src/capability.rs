//! # Platform Capabilities
//!
//! Traits for the three external collaborators the runtime consumes.
//! The runtime never touches camera hardware, OS permission dialogs, or the
//! share sheet directly - platform layers implement these traits, and tests
//! substitute fakes.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    External Capabilities                                │
//! │                                                                         │
//! │  CameraPermission ──► OS permission dialog (may suspend indefinitely)   │
//! │  ArtifactStore ─────► durable byte storage (documents directory)        │
//! │  ShareTarget ───────► OS share surface (mail, messages, files, …)       │
//! │                                                                         │
//! │  The barcode decoder is the fourth collaborator, but it needs no        │
//! │  trait: it only pushes `ScanEvent`s into an mpsc channel (see pump).    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use tally_core::error::{ExportResult, PermissionResult};
use tally_core::types::AuthorizationStatus;

/// The platform's camera permission capability.
///
/// Implementations route the request through the OS dialog; the call may
/// suspend for as long as the user leaves the dialog open. A resolved
/// request returns the user's answer; `Err` means the capability itself
/// failed, which the gate collapses to `Denied`.
#[async_trait]
pub trait CameraPermission: Send + Sync {
    /// Requests camera access. Each call is a fresh request, independent
    /// of any prior outcome.
    async fn request(&self) -> PermissionResult<AuthorizationStatus>;
}

/// The platform's durable byte storage for export artifacts.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Writes `content` under the well-known `name`, overwriting any prior
    /// artifact of the same name, and returns the artifact's location.
    async fn write(&self, name: &str, content: &str) -> ExportResult<PathBuf>;
}

/// The platform's OS-level share surface.
#[async_trait]
pub trait ShareTarget: Send + Sync {
    /// Presents the share surface for the artifact at `location`.
    async fn share(&self, location: &Path) -> ExportResult<()>;
}
