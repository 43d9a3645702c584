//! # Domain Types
//!
//! Core domain types used throughout ScanTally.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐   ┌─────────────────────┐                     │
//! │  │ AuthorizationStatus │   │      ScanEvent      │                     │
//! │  │  ─────────────────  │   │  ─────────────────  │                     │
//! │  │  Unknown            │   │  symbology          │                     │
//! │  │  Granted            │   │  payload            │                     │
//! │  │  Denied             │   │  observed_at        │                     │
//! │  └─────────────────────┘   └─────────────────────┘                     │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────┐               │
//! │  │                  SessionSnapshot                    │               │
//! │  │  ─────────────────────────────────────────────────  │               │
//! │  │  paused, last_payload, collected, scan_count        │               │
//! │  │  (read-only view handed to the presentation layer)  │               │
//! │  └─────────────────────────────────────────────────────┘               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

// =============================================================================
// Authorization Status
// =============================================================================

/// Camera authorization status, as visible to the rest of the process.
///
/// ## Lifecycle
/// ```text
/// process start ──► Unknown ──request──► Granted
///                      ▲        └──────► Denied
///                      │                   │
///                      └────retry requested┘
/// ```
/// Starts `Unknown`. Each permission request resolves to `Granted` or
/// `Denied`. A user-initiated retry after `Denied` re-enters `Unknown`
/// while the new request is in flight.
///
/// ## Why no Error variant?
/// A platform capability error (as opposed to an explicit denial) is
/// collapsed to `Denied`: the user-visible consequence is identical, and
/// keeping the state space at three values keeps every render branch total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum AuthorizationStatus {
    /// No request has resolved yet (or a retry is in flight).
    #[default]
    Unknown,

    /// The user granted camera access; the scanning surface may render.
    Granted,

    /// The user denied camera access, or the platform request errored.
    Denied,
}

impl AuthorizationStatus {
    /// True only when scanning is allowed to proceed.
    #[inline]
    pub const fn is_granted(&self) -> bool {
        matches!(self, AuthorizationStatus::Granted)
    }
}

// =============================================================================
// Scan Event
// =============================================================================

/// One decode emitted by the external barcode-decoding capability.
///
/// Immutable once constructed; consumed exactly once by the session.
/// A live video feed emits many of these per second for a single code
/// held in frame - the session's debounce decides which ones count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ScanEvent {
    /// Barcode format tag reported by the decoder (e.g., "ean13", "qr").
    /// Logged for diagnostics; acceptance does not depend on it.
    pub symbology: String,

    /// Decoded string content of the barcode.
    pub payload: String,

    /// When the decoder emitted this event.
    pub observed_at: DateTime<Utc>,
}

impl ScanEvent {
    /// Creates a scan event stamped with the current time.
    pub fn new(symbology: impl Into<String>, payload: impl Into<String>) -> Self {
        ScanEvent {
            symbology: symbology.into(),
            payload: payload.into(),
            observed_at: Utc::now(),
        }
    }
}

// =============================================================================
// Session Snapshot
// =============================================================================

/// Read-only view of the session for the presentation layer.
///
/// ## Serialization
/// This is what the frontend receives when it asks for the current state:
/// ```json
/// {
///   "sessionId": "7f9c...",
///   "paused": true,
///   "lastPayload": "4006381333931",
///   "collected": ["4006381333931"],
///   "scanCount": 1
/// }
/// ```
/// The presentation layer never mutates session state through this type;
/// all writes go through the named operations.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    /// Session identifier for log correlation.
    pub session_id: Uuid,

    /// When this session began accumulating.
    pub started_at: DateTime<Utc>,

    /// True while the session is holding between scans.
    pub paused: bool,

    /// The most recently accepted payload, if any.
    pub last_payload: Option<String>,

    /// All accepted payloads in acceptance order, duplicates preserved.
    pub collected: Vec<String>,

    /// Number of accepted scans (== collected.len()).
    pub scan_count: usize,
}
