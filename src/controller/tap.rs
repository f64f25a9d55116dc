//! Single/double tap disambiguation.
//!
//! A tap opens a disambiguation window. A second tap inside the window
//! makes a double tap (left or right half, by the second tap's position);
//! if the window closes first, the pending tap resolves to a single tap.

use serde::{Deserialize, Serialize};

use crate::controller::error::ControllerError;

/// Default disambiguation window.
pub const DEFAULT_TAP_WINDOW_MS: u64 = 300;

/// A single observed touch-down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TapEvent {
    /// Monotonic timestamp in milliseconds
    pub timestamp_ms: u64,
    /// Horizontal position in container coordinates
    pub x: f64,
}

impl TapEvent {
    pub fn new(timestamp_ms: u64, x: f64) -> Self {
        Self { timestamp_ms, x }
    }
}

/// Which half of the container a double tap landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Half {
    Left,
    Right,
}

impl Half {
    /// Left when `x` is strictly before the container midpoint.
    pub fn of(x: f64, container_width: f64) -> Self {
        if x < container_width / 2.0 {
            Half::Left
        } else {
            Half::Right
        }
    }
}

/// Classification of a tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "tap", rename_all = "snake_case")]
pub enum TapClassification {
    /// Disambiguation window still open
    Pending,
    /// No second tap arrived within the window
    Single,
    /// A second tap arrived within the window
    Double { half: Half },
}

/// Classify a tap against the timestamp of the last pending tap.
///
/// Returns the classification and the new pending timestamp: `Some` when
/// the tap opened a window, `None` when it completed a double tap.
///
/// # Arguments
/// * `event` - The tap just observed
/// * `last_tap_ms` - Timestamp of the pending tap, if any
/// * `window_ms` - Disambiguation window (must be positive)
/// * `container_width` - Width used to pick the double-tap half
pub fn classify_tap(
    event: &TapEvent,
    last_tap_ms: Option<u64>,
    window_ms: u64,
    container_width: f64,
) -> (TapClassification, Option<u64>) {
    match last_tap_ms {
        Some(last) if event.timestamp_ms.saturating_sub(last) < window_ms => {
            let half = Half::of(event.x, container_width);
            (TapClassification::Double { half }, None)
        }
        _ => (TapClassification::Pending, Some(event.timestamp_ms)),
    }
}

/// Stateful tap detector holding at most one pending tap.
#[derive(Debug, Clone)]
pub struct TapDetector {
    window_ms: u64,
    pending_ms: Option<u64>,
}

impl TapDetector {
    /// # Errors
    /// `ControllerError::InvalidWindow` when `window_ms` is 0.
    pub fn new(window_ms: u64) -> Result<Self, ControllerError> {
        if window_ms == 0 {
            return Err(ControllerError::InvalidWindow);
        }
        Ok(Self {
            window_ms,
            pending_ms: None,
        })
    }

    /// When the pending tap resolves to `Single`, if one is pending.
    pub fn deadline(&self) -> Option<u64> {
        self.pending_ms.map(|t| t.saturating_add(self.window_ms))
    }

    /// Feed a tap.
    ///
    /// Callers resolve due deadlines with [`TapDetector::resolve_due`] first;
    /// a pending tap whose window already closed is otherwise replaced.
    pub fn tap(&mut self, event: &TapEvent, container_width: f64) -> TapClassification {
        let (current, pending) =
            classify_tap(event, self.pending_ms, self.window_ms, container_width);
        self.pending_ms = pending;
        current
    }

    /// Resolve the pending tap to `Single` if its window closed by `now_ms`.
    pub fn resolve_due(&mut self, now_ms: u64) -> Option<TapClassification> {
        match self.deadline() {
            Some(deadline) if now_ms >= deadline => {
                self.pending_ms = None;
                Some(TapClassification::Single)
            }
            _ => None,
        }
    }
}
