//! # State Module
//!
//! Manages runtime state for the scanning core.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can mock/inject individual states
//! 3. **Clearer Operation Signatures**: Callers declare exactly what state they need
//! 4. **Reduced Contention**: The permission gate never blocks the session lock
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────┐        ┌──────────────────────────────────┐  │
//! │  │   PermissionState    │ gates  │         SessionState             │  │
//! │  │                      │──────► │                                  │  │
//! │  │  AuthorizationStatus │        │  Arc<Mutex<ScanSession>>         │  │
//! │  │  + request serializer│        │  decode / resume / clear / read  │  │
//! │  └──────────────────────┘        └──────────────────────────────────┘  │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • PermissionState: status behind a std Mutex, requests serialized     │
//! │    behind a tokio Mutex (held across the await on the OS dialog)       │
//! │  • SessionState: protected by Arc<Mutex<T>> for exclusive access;      │
//! │    never held across an await                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod permission;
mod session;

pub use permission::PermissionState;
pub use session::SessionState;
