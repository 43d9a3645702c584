//! # Decode Event Pump
//!
//! Drains the decoding capability's event channel into the session.
//!
//! The decoder needs no trait of its own: the platform layer holds an
//! `mpsc::Sender<ScanEvent>` and pushes whatever it recognizes, as often as
//! it likes. The pump applies each event through [`SessionState`], where the
//! pause guard decides whether it counts - suppression is never the pump's
//! job, so a decoder that keeps emitting while the capture surface is hidden
//! still cannot grow the list.

use tokio::sync::mpsc;
use tracing::debug;

use tally_core::types::ScanEvent;

use crate::state::SessionState;

/// Applies decode events to the session until the channel closes.
///
/// Runs as a spawned task for the lifetime of the scanning surface; when the
/// platform layer drops its sender, the pump exits cleanly.
pub async fn run_decode_pump(session: SessionState, mut events: mpsc::Receiver<ScanEvent>) {
    debug!("decode pump started");

    while let Some(event) = events.recv().await {
        session.handle_decode(&event);
    }

    debug!("decode pump stopped: event channel closed");
}

// =============================================================================
// Unit Tests
// =============================================================================
