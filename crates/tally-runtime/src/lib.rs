//! # ScanTally Runtime
//!
//! Orchestration layer for the ScanTally scanning core.
//! This crate wires the pure session logic to the platform capabilities
//! and exposes the operations a presentation layer calls.
//!
//! ## Module Organization
//! ```text
//! tally_runtime/
//! ├── lib.rs          ◄─── You are here (tracing setup & re-exports)
//! ├── capability.rs   ◄─── Traits for the three external capabilities
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── permission.rs ◄─ Camera permission gate
//! │   └── session.rs  ◄─── Thread-safe session wrapper
//! ├── pump.rs         ◄─── Decode event pump (mpsc → session)
//! ├── export.rs       ◄─── Serialize → write → share pipeline
//! ├── fs.rs           ◄─── Documents-directory artifact store
//! └── error.rs        ◄─── API error type for the presentation layer
//! ```
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Runtime Control Flow                              │
//! │                                                                         │
//! │  1. request_access() ─────────────────────────────────────────────────► │
//! │     • PermissionState asks the platform capability                      │
//! │     • Unknown while in flight, then Granted or Denied                   │
//! │                                                                         │
//! │  2. SessionState::begin_if_granted() ─────────────────────────────────► │
//! │     • While unresolved or denied: no session exists at all              │
//! │     • On grant: fresh empty session, active (not paused)                │
//! │                                                                         │
//! │  3. run_decode_pump(session, events) ─────────────────────────────────► │
//! │     • Drains the decoder's mpsc channel into the session                │
//! │     • The session's pause guard debounces redundant frames              │
//! │                                                                         │
//! │  4. Exporter::export_session() ───────────────────────────────────────► │
//! │     • serialize → ArtifactStore::write → ShareTarget::share             │
//! │     • Concurrent exports are queued behind one async mutex              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod capability;
pub mod error;
pub mod export;
pub mod fs;
pub mod pump;
pub mod state;

use tracing::Level;
use tracing_subscriber::EnvFilter;

pub use capability::{ArtifactStore, CameraPermission, ShareTarget};
pub use error::{ApiError, ErrorCode};
pub use export::Exporter;
pub use fs::DocumentStore;
pub use pump::run_decode_pump;
pub use state::{PermissionState, SessionState};

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tally=trace` - Show trace for tally crates only
/// - Default: INFO level
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tally=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .init();
}
