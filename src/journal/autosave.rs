//! Debounced autosave of the in-progress draft.
//!
//! The slot is write-only: every flush overwrites it, and nothing in the
//! store reads it back. Restoring from it is left to callers that decide
//! to offer recovery.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use super::entry::Mood;

/// Idle period that must elapse after the last change before a flush.
pub const AUTOSAVE_DELAY: Duration = Duration::from_millis(800);

/// Field values captured for the autosave slot. Tags stay as the raw
/// unsplit field text, unlike the persisted entry list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutosaveSnapshot {
    pub title: String,
    pub content: String,
    pub date: String,
    pub mood: Mood,
    pub tags: String,
}

/// Debounce window over draft changes.
///
/// Each `record` restarts the window, so only the last change within any
/// idle period survives to be flushed by `poll`.
#[derive(Debug, Default)]
pub struct AutosaveBuffer {
    pending: Option<(AutosaveSnapshot, Instant)>,
}

impl AutosaveBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notes a draft change at `now`, replacing any pending snapshot and
    /// restarting the idle window.
    pub fn record(&mut self, snapshot: AutosaveSnapshot, now: Instant) {
        self.pending = Some((snapshot, now));
    }

    /// Yields the pending snapshot once the idle window has elapsed.
    /// Returns `None` while a change is still fresh or nothing is pending.
    pub fn poll(&mut self, now: Instant) -> Option<AutosaveSnapshot> {
        match &self.pending {
            Some((_, recorded)) if now.duration_since(*recorded) >= AUTOSAVE_DELAY => {
                self.pending.take().map(|(snapshot, _)| snapshot)
            }
            _ => None,
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
