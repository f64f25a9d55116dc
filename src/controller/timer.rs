//! Debounced visibility timers.
//!
//! Each timer holds at most one deadline. Triggering replaces it, so a
//! retrigger before expiry extends visibility instead of queueing a second
//! hide.

/// Default visibility of the play/pause overlay.
pub const DEFAULT_OVERLAY_MS: u64 = 2500;
/// Default visibility of the seek-direction indicator.
pub const DEFAULT_SEEK_INDICATOR_MS: u64 = 1000;

/// A single-shot visibility countdown with replace-on-retrigger semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebounceTimer {
    duration_ms: u64,
    deadline_ms: Option<u64>,
}

impl DebounceTimer {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            deadline_ms: None,
        }
    }

    /// Show the signal and (re)start the countdown at `now_ms`.
    ///
    /// Returns true if the signal was hidden before this trigger.
    pub fn trigger(&mut self, now_ms: u64) -> bool {
        let was_visible = self.is_visible(now_ms);
        self.deadline_ms = Some(now_ms.saturating_add(self.duration_ms));
        !was_visible
    }

    /// Whether the signal is visible at `now_ms`.
    pub fn is_visible(&self, now_ms: u64) -> bool {
        self.deadline_ms.is_some_and(|deadline| now_ms < deadline)
    }

    /// Pending expiry, if the signal is showing.
    pub fn deadline(&self) -> Option<u64> {
        self.deadline_ms
    }

    /// Clear the deadline if it has passed.
    ///
    /// Returns true exactly once per expiry.
    pub fn expire(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }
}
