//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tally-core errors (this file)                                         │
//! │  ├── PermissionError  - Camera access request failures                 │
//! │  └── ExportError      - Export artifact write/share failures           │
//! │                                                                         │
//! │  tally-runtime errors (separate crate)                                 │
//! │  └── ApiError         - What the presentation layer sees (serialized)  │
//! │                                                                         │
//! │  Flow: capability failure → domain error → ApiError → one notice       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Exactly two user-visible error kinds - permission and export - each
//!    reported as a single human-readable notice
//! 3. Internal variants carry the failing step for logs; the user-facing
//!    message never distinguishes them
//! 4. No error is fatal: session state survives every failure, and retry is
//!    always a fresh explicit user action

use thiserror::Error;

// =============================================================================
// Permission Error
// =============================================================================

/// Camera permission failures.
///
/// Denial and platform error are separate variants for logging, but both
/// collapse to `AuthorizationStatus::Denied` in the visible status - there
/// is no distinct "error" state for the interface to render.
#[derive(Debug, Clone, Error)]
pub enum PermissionError {
    /// The user explicitly denied camera access in the OS dialog.
    #[error("camera access denied by the user")]
    Denied,

    /// The platform permission capability itself failed.
    #[error("camera permission request failed: {reason}")]
    RequestFailed { reason: String },
}

impl PermissionError {
    /// Single human-readable notice shown for any permission failure.
    pub fn user_message(&self) -> &'static str {
        "Camera access is required to scan barcodes"
    }
}

// =============================================================================
// Export Error
// =============================================================================

/// Export failures.
///
/// ## When This Occurs
/// - The persistence capability could not write the artifact
/// - The share capability could not present the OS share surface
///
/// ## User Workflow
/// ```text
/// Tap "Export"
///      │
///      ▼
/// write("barcodes.csv", …) ── fails ──► WriteFailed
///      │
///      ▼
/// share(location) ─────────── fails ──► ShareFailed
///      │
///      ▼
/// Either way the UI shows one notice: "Could not save or share…"
/// ```
/// The two steps stay distinguishable in logs; the caller-facing report is
/// deliberately collapsed to one failure kind.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    /// The persistence capability failed to write the artifact.
    #[error("could not write export artifact '{name}': {reason}")]
    WriteFailed { name: String, reason: String },

    /// The share capability failed to present the artifact.
    #[error("could not share export artifact: {reason}")]
    ShareFailed { reason: String },
}

impl ExportError {
    /// Single human-readable notice shown for any export failure.
    ///
    /// Write and share failures are reported identically; the distinction
    /// lives only in logs.
    pub fn user_message(&self) -> &'static str {
        "Could not save or share the export file"
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with PermissionError.
pub type PermissionResult<T> = Result<T, PermissionError>;

/// Convenience type alias for Results with ExportError.
pub type ExportResult<T> = Result<T, ExportError>;

// =============================================================================
// Unit Tests
// =============================================================================
