//! # API Error Type
//!
//! Unified error type for operations exposed to the presentation layer.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in ScanTally                              │
//! │                                                                         │
//! │  Presentation              Runtime                                      │
//! │  ────────────              ───────                                      │
//! │                                                                         │
//! │  export tapped                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  export_session()                                                │  │
//! │  │         │                                                        │  │
//! │  │  write failed? ──── ExportError::WriteFailed ──┐                 │  │
//! │  │         │                                      ├──► ApiError ───►│  │
//! │  │  share failed? ──── ExportError::ShareFailed ──┘                 │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄──── { "code": "EXPORT_FAILED",                                      │
//! │          "message": "Could not save or share the export file" }        │
//! │                                                                         │
//! │  The presentation layer shows ONE notice per failure kind; which        │
//! │  step broke is visible only in logs.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use tally_core::error::{ExportError, PermissionError};

/// API error returned from runtime operations.
///
/// ## Serialization
/// This is what the presentation layer receives when an operation fails:
/// ```json
/// {
///   "code": "EXPORT_FAILED",
///   "message": "Could not save or share the export file"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling.
    pub code: ErrorCode,

    /// Human-readable error message for display.
    pub message: String,
}

/// Error codes for API responses.
///
/// Exactly two kinds: neither is fatal, neither is retried automatically -
/// retry is always a fresh explicit user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Camera access was denied, or the permission request itself errored.
    PermissionDenied,

    /// Writing or sharing the export artifact failed.
    ExportFailed,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }
}

/// Collapses permission failures to the single user-facing notice.
impl From<PermissionError> for ApiError {
    fn from(err: PermissionError) -> Self {
        ApiError::new(ErrorCode::PermissionDenied, err.user_message())
    }
}

/// Collapses write and share failures to the single user-facing notice.
impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        ApiError::new(ErrorCode::ExportFailed, err.user_message())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::from(ExportError::ShareFailed {
            reason: "share sheet dismissed by the platform".to_string(),
        });

        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "EXPORT_FAILED");
        assert_eq!(json["message"], "Could not save or share the export file");
    }

    #[test]
    fn test_write_and_share_collapse_to_one_code() {
        let write: ApiError = ExportError::WriteFailed {
            name: "barcodes.csv".to_string(),
            reason: "disk full".to_string(),
        }
        .into();
        let share: ApiError = ExportError::ShareFailed {
            reason: "no target".to_string(),
        }
        .into();

        assert_eq!(write.code, share.code);
        assert_eq!(write.message, share.message);
    }

    #[test]
    fn test_permission_denial_and_error_collapse() {
        let denied: ApiError = PermissionError::Denied.into();
        let errored: ApiError = PermissionError::RequestFailed {
            reason: "capability crashed".to_string(),
        }
        .into();

        assert_eq!(denied.code, ErrorCode::PermissionDenied);
        assert_eq!(denied.code, errored.code);
    }
}
