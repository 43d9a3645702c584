//! # Scan Session
//!
//! The scan-accumulation state machine.
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session State Operations                             │
//! │                                                                         │
//! │  Decoder / User Action      Operation              State Change         │
//! │  ─────────────────────      ─────────              ────────────         │
//! │                                                                         │
//! │  Code enters frame ────────► on_decode() ────────► paused = true        │
//! │                                                    last = payload       │
//! │                                                    collected.push()     │
//! │                                                                         │
//! │  Code still in frame ──────► on_decode() ────────► (ignored: paused)    │
//! │                                                                         │
//! │  Tap "Scan again" ─────────► resume() ───────────► paused = false       │
//! │                                                    last = None          │
//! │                                                                         │
//! │  Tap "Clear" ──────────────► clear_all() ────────► collected.clear()    │
//! │                                                    (paused untouched)   │
//! │                                                                         │
//! │  Tap "Export" ─────────────► serialize() ────────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Debounce
//! A live video feed emits many redundant decode events per second while a
//! code stays in frame. Accepting one decode pauses the session, and the
//! pause is an **explicit guard** on [`ScanSession::on_decode`]: the decoder
//! may keep emitting events (even with the capture surface hidden) and none
//! of them touch the list until the user resumes. This turns a continuous
//! recognition stream into a discrete one-decode-per-user-intent protocol.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::types::{ScanEvent, SessionSnapshot};

/// Outcome of feeding one decode event to the session.
///
/// Lets the caller log dropped events without the session doing I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// The payload was recorded and the session is now paused.
    Accepted,

    /// The session was paused; the event was ignored entirely.
    IgnoredPaused,
}

/// One scanning session's accumulated state.
///
/// ## Invariants
/// - `collected` is append-only: the only shrinking operation is
///   [`ScanSession::clear_all`], never partial removal
/// - Duplicates are preserved - repeat counts are meaningful to the user
/// - `paused == true` whenever `last_payload` is `Some` and no resume has
///   occurred since the accepting decode
/// - The three-field update of an accepted decode is a single `&mut self`
///   call, so no observer can see a partial accept
#[derive(Debug, Clone)]
pub struct ScanSession {
    /// Session identifier for log correlation.
    session_id: Uuid,

    /// When this session began.
    started_at: DateTime<Utc>,

    /// True between an accepted decode and the next resume.
    paused: bool,

    /// Most recently accepted payload.
    last_payload: Option<String>,

    /// Accepted payloads in acceptance order.
    collected: Vec<String>,
}

impl ScanSession {
    /// Creates a new empty session, active (not paused).
    pub fn new() -> Self {
        ScanSession {
            session_id: Uuid::new_v4(),
            started_at: Utc::now(),
            paused: false,
            last_payload: None,
            collected: Vec::new(),
        }
    }

    /// Feeds one decode event to the session.
    ///
    /// ## Behavior
    /// - Paused: the event is ignored entirely, `collected` unchanged
    /// - Active: pauses the session, records the payload as most recent,
    ///   and appends it to `collected`
    ///
    /// Identical payloads append again; the list is a tally, not a set.
    pub fn on_decode(&mut self, event: &ScanEvent) -> DecodeOutcome {
        if self.paused {
            return DecodeOutcome::IgnoredPaused;
        }

        self.paused = true;
        self.last_payload = Some(event.payload.clone());
        self.collected.push(event.payload.clone());
        DecodeOutcome::Accepted
    }

    /// Re-arms the session for the next physical scan.
    ///
    /// Clears the pause and forgets the last payload. Always legal;
    /// calling while already active is a no-op.
    pub fn resume(&mut self) {
        self.paused = false;
        self.last_payload = None;
    }

    /// Empties the accumulated list.
    ///
    /// Deliberately does NOT touch `paused`: clearing history while still
    /// holding mid-scan is a valid, intentional state. A caller wanting
    /// both must also call [`ScanSession::resume`] - the two operations have
    /// independent triggers in the interface and stay independent here.
    pub fn clear_all(&mut self) {
        self.collected.clear();
    }

    /// Serializes the accumulated list for export.
    ///
    /// One payload per line, acceptance order, no trailing separator, no
    /// header row. Pure read: an empty list serializes to the empty string
    /// and the session is never modified.
    pub fn serialize(&self) -> String {
        self.collected.join("\n")
    }

    /// Produces the read-only render snapshot.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.session_id,
            started_at: self.started_at,
            paused: self.paused,
            last_payload: self.last_payload.clone(),
            collected: self.collected.clone(),
            scan_count: self.collected.len(),
        }
    }

    /// Session identifier for log correlation.
    pub fn id(&self) -> Uuid {
        self.session_id
    }

    /// True between an accepted decode and the next resume.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Most recently accepted payload, if any.
    pub fn last_payload(&self) -> Option<&str> {
        self.last_payload.as_deref()
    }

    /// Number of accepted scans.
    pub fn scan_count(&self) -> usize {
        self.collected.len()
    }

    /// Accepted payloads in acceptance order.
    pub fn collected(&self) -> &[String] {
        &self.collected
    }

    /// Checks if nothing has been accepted (or everything was cleared).
    pub fn is_empty(&self) -> bool {
        self.collected.is_empty()
    }
}

impl Default for ScanSession {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn event(payload: &str) -> ScanEvent {
        ScanEvent::new("ean13", payload)
    }

    #[test]
    fn test_accept_pauses_and_appends() {
        let mut session = ScanSession::new();

        let outcome = session.on_decode(&event("123"));

        assert_eq!(outcome, DecodeOutcome::Accepted);
        assert!(session.is_paused());
        assert_eq!(session.last_payload(), Some("123"));
        assert_eq!(session.collected(), ["123"]);
    }

    #[test]
    fn test_decodes_while_paused_are_ignored() {
        let mut session = ScanSession::new();
        session.on_decode(&event("123"));

        // The decoder keeps emitting for the same and different codes
        for payload in ["123", "456", "123"] {
            let outcome = session.on_decode(&event(payload));
            assert_eq!(outcome, DecodeOutcome::IgnoredPaused);
        }

        assert_eq!(session.collected(), ["123"]);
        assert_eq!(session.last_payload(), Some("123"));
    }

    #[test]
    fn test_resume_rearms_next_decode() {
        let mut session = ScanSession::new();
        session.on_decode(&event("123"));

        session.resume();
        assert!(!session.is_paused());
        assert_eq!(session.last_payload(), None);

        let outcome = session.on_decode(&event("456"));
        assert_eq!(outcome, DecodeOutcome::Accepted);
        assert_eq!(session.collected(), ["123", "456"]);
    }

    #[test]
    fn test_resume_is_idempotent() {
        let mut session = ScanSession::new();
        session.on_decode(&event("123"));

        session.resume();
        let once = session.snapshot();
        session.resume();
        let twice = session.snapshot();

        assert_eq!(once.paused, twice.paused);
        assert_eq!(once.last_payload, twice.last_payload);
        assert_eq!(once.collected, twice.collected);
    }

    #[test]
    fn test_duplicates_are_preserved_in_order() {
        let mut session = ScanSession::new();

        for payload in ["A", "B", "A"] {
            session.resume();
            session.on_decode(&event(payload));
        }

        assert_eq!(session.collected(), ["A", "B", "A"]);
        assert_eq!(session.serialize(), "A\nB\nA");
    }

    #[test]
    fn test_clear_all_empties_but_keeps_pause() {
        let mut session = ScanSession::new();
        session.on_decode(&event("123"));
        assert!(session.is_paused());

        session.clear_all();

        assert!(session.is_empty());
        // Clearing history mid-pause must not resume scanning
        assert!(session.is_paused());
        assert_eq!(session.last_payload(), Some("123"));
    }

    #[test]
    fn test_clear_all_on_active_session_keeps_active() {
        let mut session = ScanSession::new();
        session.clear_all();
        assert!(!session.is_paused());
    }

    #[test]
    fn test_serialize_empty_is_empty_string() {
        let session = ScanSession::new();
        assert_eq!(session.serialize(), "");
    }

    #[test]
    fn test_serialize_has_no_trailing_newline() {
        let mut session = ScanSession::new();
        session.on_decode(&event("only"));
        assert_eq!(session.serialize(), "only");
    }

    #[test]
    fn test_serialize_does_not_consume_history() {
        let mut session = ScanSession::new();
        session.on_decode(&event("123"));

        let _ = session.serialize();
        let _ = session.serialize();

        assert_eq!(session.collected(), ["123"]);
    }

    #[test]
    fn test_snapshot_counts_match() {
        let mut session = ScanSession::new();
        session.on_decode(&event("123"));
        session.resume();
        session.on_decode(&event("456"));

        let snapshot = session.snapshot();
        assert_eq!(snapshot.scan_count, 2);
        assert_eq!(snapshot.collected.len(), 2);
        assert_eq!(snapshot.session_id, session.id());
    }
}
