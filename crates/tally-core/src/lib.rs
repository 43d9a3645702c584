//! # tally-core: Pure Scan-Session Logic for ScanTally
//!
//! This crate is the **heart** of ScanTally. It contains the
//! scan-accumulation state machine as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       ScanTally Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation Layer (platform UI)                │   │
//! │  │   Permission prompt ──► Scan surface ──► List ──► Export button │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ render snapshot / operations           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    tally-runtime                                │   │
//! │  │   PermissionState, SessionState, Exporter, decode pump          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌─────────────┐  ┌───────────┐                │   │
//! │  │   │   types   │  │   session   │  │   error   │                │   │
//! │  │   │ ScanEvent │  │ ScanSession │  │ Permission│                │   │
//! │  │   │ Snapshot  │  │  debounce   │  │  Export   │                │   │
//! │  │   └───────────┘  └─────────────┘  └───────────┘                │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CAMERA • NO FILESYSTEM • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (AuthorizationStatus, ScanEvent, SessionSnapshot)
//! - [`session`] - The scan-accumulation state machine
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Camera, file system, and share surface access is FORBIDDEN here
//! 3. **Explicit Guards**: The debounce is an explicit check on the event
//!    handler, never an artifact of UI visibility
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::session::ScanSession;
//! use tally_core::types::ScanEvent;
//!
//! let mut session = ScanSession::new();
//!
//! // First decode in frame is accepted and pauses the session
//! session.on_decode(&ScanEvent::new("ean13", "4006381333931"));
//! assert!(session.is_paused());
//!
//! // The user resumes before the next physical scan
//! session.resume();
//! session.on_decode(&ScanEvent::new("qr", "hello"));
//!
//! assert_eq!(session.serialize(), "4006381333931\nhello");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod session;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::ScanSession` instead of
// `use tally_core::session::ScanSession`

pub use error::{ExportError, PermissionError};
pub use session::{DecodeOutcome, ScanSession};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Fixed name of the export artifact for one session.
///
/// ## Why a constant?
/// The export surface always writes the same well-known name, so a
/// re-export within a session overwrites the prior artifact instead of
/// littering the documents directory with one file per export.
pub const EXPORT_FILE_NAME: &str = "barcodes.csv";
