//! # Permission State
//!
//! The camera permission gate. Owns the process-visible
//! [`AuthorizationStatus`] and the only code path that may mutate it.
//!
//! ## Request Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Permission Request Flow                              │
//! │                                                                         │
//! │  startup ──────────► request_access() ─┐                                │
//! │  "Allow Camera" ───► request_access() ─┤ (any number of retries)        │
//! │                                        │                                │
//! │                                        ▼                                │
//! │                      status = Unknown (request in flight)               │
//! │                                        │                                │
//! │                       OS dialog / platform capability                   │
//! │                              │                   │                      │
//! │                         Ok(answer)            Err(_)                    │
//! │                              │                   │                      │
//! │                              ▼                   ▼                      │
//! │                      status = answer      status = Denied               │
//! │                                                                         │
//! │  A second request_access() while one is in flight waits for the         │
//! │  first to resolve, then issues its own fresh request.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use tokio::sync::Mutex as AsyncMutex;
use tracing::{info, warn};

use tally_core::types::AuthorizationStatus;

use crate::capability::CameraPermission;

/// The camera permission gate.
///
/// ## Thread Safety
/// - The visible status lives behind a std `Mutex` (reads are instant copies)
/// - Requests are serialized behind a tokio `Mutex` held across the await on
///   the platform dialog, so re-entrant requests queue instead of racing
#[derive(Clone)]
pub struct PermissionState {
    /// The platform capability that actually shows the dialog.
    backend: Arc<dyn CameraPermission>,

    /// Process-visible authorization status. Only this type mutates it.
    status: Arc<Mutex<AuthorizationStatus>>,

    /// Serializes in-flight requests.
    request_gate: Arc<AsyncMutex<()>>,
}

impl PermissionState {
    /// Creates a gate over the given platform capability.
    /// Status starts `Unknown` until the first request resolves.
    pub fn new(backend: Arc<dyn CameraPermission>) -> Self {
        PermissionState {
            backend,
            status: Arc::new(Mutex::new(AuthorizationStatus::Unknown)),
            request_gate: Arc::new(AsyncMutex::new(())),
        }
    }

    /// Requests camera access and returns the resolved status.
    ///
    /// ## Behavior
    /// - Each call is a fresh request, independent of prior outcome
    /// - The visible status re-enters `Unknown` while the request is in flight
    ///   (a retry after `Denied` renders as "requesting" again)
    /// - A capability error collapses to `Denied` - there is no distinct
    ///   error status
    /// - May suspend arbitrarily long while the user sits on the OS dialog
    pub async fn request_access(&self) -> AuthorizationStatus {
        let _in_flight = self.request_gate.lock().await;

        self.set_status(AuthorizationStatus::Unknown);
        info!("requesting camera access");

        let resolved = match self.backend.request().await {
            Ok(AuthorizationStatus::Unknown) => {
                // A capability that resolves without an answer is a
                // capability failure, and failures collapse to Denied.
                warn!("permission capability resolved without an answer");
                AuthorizationStatus::Denied
            }
            Ok(status) => status,
            Err(err) => {
                warn!(error = %err, "permission request failed, treating as denied");
                AuthorizationStatus::Denied
            }
        };

        info!(?resolved, "camera access request resolved");
        self.set_status(resolved);
        resolved
    }

    /// Current authorization status (instant copy, never blocks on a request).
    pub fn status(&self) -> AuthorizationStatus {
        *self.status.lock().expect("permission status mutex poisoned")
    }

    fn set_status(&self, status: AuthorizationStatus) {
        *self.status.lock().expect("permission status mutex poisoned") = status;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
