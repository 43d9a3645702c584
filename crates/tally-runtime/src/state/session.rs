//! # Session State
//!
//! Thread-safe wrapper around the pure [`ScanSession`] machine.
//!
//! ## Thread Safety
//! The session is wrapped in `Arc<Mutex<T>>` because:
//! 1. The decode pump, user actions, and export all touch the same session
//! 2. Only one operation may modify the session at a time - an accepted
//!    decode's three-field update must never interleave with a clear
//! 3. The lock is never held across an await point
//!
//! ## Gating
//! While the camera permission is unresolved or denied, **no session
//! exists**: [`SessionState::begin_if_granted`] is the only constructor the
//! runtime uses, and it returns `None` unless the gate reads `Granted`.

use std::sync::{Arc, Mutex};

use tracing::debug;

use tally_core::session::{DecodeOutcome, ScanSession};
use tally_core::types::{ScanEvent, SessionSnapshot};

use crate::state::PermissionState;

/// Runtime handle to one scanning session.
///
/// ## Why Not RwLock?
/// Session operations are quick, and most of them modify state.
/// A RwLock would add complexity with minimal benefit.
#[derive(Debug, Clone)]
pub struct SessionState {
    session: Arc<Mutex<ScanSession>>,
}

impl SessionState {
    /// Creates a fresh, empty, active session.
    ///
    /// Prefer [`SessionState::begin_if_granted`] outside of tests - the
    /// scanning surface must not exist before the permission resolves.
    pub fn begin() -> Self {
        let session = ScanSession::new();
        debug!(session_id = %session.id(), "scan session started");
        SessionState {
            session: Arc::new(Mutex::new(session)),
        }
    }

    /// Creates a session only once camera access has been granted.
    ///
    /// Returns `None` while the gate reads `Unknown` or `Denied`, keeping
    /// the session inert and uninstantiated until the grant.
    pub fn begin_if_granted(gate: &PermissionState) -> Option<Self> {
        if gate.status().is_granted() {
            Some(SessionState::begin())
        } else {
            None
        }
    }

    /// Feeds one decode event from the scanning capability.
    ///
    /// The pause guard lives in the pure machine; this wrapper only adds
    /// the lock and the log line. Events arriving while paused are dropped
    /// here no matter what the capture surface is doing visually.
    pub fn handle_decode(&self, event: &ScanEvent) -> DecodeOutcome {
        let outcome = self.with_session_mut(|s| s.on_decode(event));

        match outcome {
            DecodeOutcome::Accepted => {
                debug!(symbology = %event.symbology, payload = %event.payload, "decode accepted")
            }
            DecodeOutcome::IgnoredPaused => {
                debug!(symbology = %event.symbology, "decode ignored while paused")
            }
        }
        outcome
    }

    /// Re-arms the session for the next scan. Idempotent.
    pub fn resume(&self) {
        debug!("resume scanning");
        self.with_session_mut(|s| s.resume());
    }

    /// Empties the accumulated list. Leaves the pause flag untouched.
    pub fn clear_all(&self) {
        debug!("clear session history");
        self.with_session_mut(|s| s.clear_all());
    }

    /// Serializes the accumulated list for export. Pure read.
    pub fn serialize(&self) -> String {
        self.with_session(|s| s.serialize())
    }

    /// Read-only render snapshot for the presentation layer.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.with_session(|s| s.snapshot())
    }

    /// Executes a function with read access to the session.
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ScanSession) -> R,
    {
        let session = self.session.lock().expect("session mutex poisoned");
        f(&session)
    }

    /// Executes a function with write access to the session.
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ScanSession) -> R,
    {
        let mut session = self.session.lock().expect("session mutex poisoned");
        f(&mut session)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
