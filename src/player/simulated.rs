//! Clock-driven stand-in for a platform media player.

use crate::player::MediaPlayer;

/// In-memory player whose position advances with an external clock.
///
/// Position only moves when [`advance_to`](Self::advance_to) is called, so
/// replays are deterministic. Playback pauses on reaching the end.
#[derive(Debug, Clone)]
pub struct SimulatedPlayer {
    position: f64,
    duration: f64,
    playing: bool,
    muted: bool,
    /// Clock reading at the last position update
    clock_ms: u64,
}

impl SimulatedPlayer {
    /// Create a paused player at position 0.
    ///
    /// `duration` is reported as-is, including invalid values, so hosts can
    /// exercise the controller's coercion.
    pub fn new(duration: f64) -> Self {
        Self {
            position: 0.0,
            duration,
            playing: false,
            muted: false,
            clock_ms: 0,
        }
    }

    /// Advance the clock, moving the position if playing.
    ///
    /// Readings earlier than the last one are ignored.
    pub fn advance_to(&mut self, now_ms: u64) {
        if now_ms <= self.clock_ms {
            return;
        }
        let elapsed = (now_ms - self.clock_ms) as f64 / 1000.0;
        self.clock_ms = now_ms;

        if !self.playing {
            return;
        }

        self.position += elapsed;
        if let Some(end) = self.end() {
            if self.position >= end {
                self.position = end;
                self.playing = false;
                tracing::debug!("reached end of stream at {:.1}s", end);
            }
        }
    }

    fn end(&self) -> Option<f64> {
        (self.duration.is_finite() && self.duration > 0.0).then_some(self.duration)
    }
}

impl MediaPlayer for SimulatedPlayer {
    fn current_time(&self) -> f64 {
        self.position
    }

    fn set_current_time(&mut self, seconds: f64) {
        let seconds = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
        self.position = match self.end() {
            Some(end) => seconds.min(end),
            None => seconds,
        };
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn playing(&self) -> bool {
        self.playing
    }

    fn muted(&self) -> bool {
        self.muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn play(&mut self) {
        // Restart from the top when play is pressed at the end
        if let Some(end) = self.end() {
            if self.position >= end {
                self.position = 0.0;
            }
        }
        self.playing = true;
    }

    fn pause(&mut self) {
        self.playing = false;
    }
}
