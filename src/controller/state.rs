//! Playback snapshot and command types
//!
//! Contains the read-only `PlaybackState` snapshot handed to the controller
//! by the media player, and the `SeekCommand` values the controller emits.

use serde::Serialize;

use crate::controller::error::ControllerError;
use crate::controller::seek::relative_seek;

/// Snapshot of the media player's state.
///
/// Owned by the player; the controller only reads it. Values are
/// sanitized on construction so the controller can clamp against them
/// without panicking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    /// Current playback position in seconds
    pub current_time: f64,
    /// Total duration in seconds (0 when unknown)
    pub duration: f64,
    /// Whether the player is currently playing
    pub playing: bool,
    /// Whether audio is muted
    pub muted: bool,
}

impl PlaybackState {
    /// Create a paused, unmuted snapshot.
    ///
    /// # Arguments
    /// * `current_time` - Position in seconds (negative or NaN becomes 0)
    /// * `duration` - Duration in seconds (invalid values become 0)
    pub fn new(current_time: f64, duration: f64) -> Self {
        Self {
            current_time: sanitize_position(current_time),
            duration: sanitize_duration(duration),
            playing: false,
            muted: false,
        }
    }

    /// Builder-style helper to set the playing flag.
    pub fn with_playing(mut self, playing: bool) -> Self {
        self.playing = playing;
        self
    }
}

/// Check a duration reported by the player.
///
/// # Errors
/// `ControllerError::InvalidDuration` when the value is non-finite or negative.
pub fn check_duration(duration: f64) -> Result<f64, ControllerError> {
    if duration.is_finite() && duration >= 0.0 {
        Ok(duration)
    } else {
        Err(ControllerError::InvalidDuration(duration))
    }
}

/// Coerce an invalid duration to 0 (unknown) instead of propagating it.
pub fn sanitize_duration(duration: f64) -> f64 {
    check_duration(duration).unwrap_or_else(|e| {
        tracing::debug!("{}; treating duration as unknown", e);
        0.0
    })
}

fn sanitize_position(position: f64) -> f64 {
    if position.is_finite() {
        position.max(0.0)
    } else {
        0.0
    }
}

/// A playback command emitted by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum SeekCommand {
    /// Toggle between playing and paused
    TogglePlayPause,
    /// Seek by a signed offset from the current position
    SeekRelative { delta_secs: f64 },
    /// Seek to an absolute position, always within [0, duration]
    SeekAbsolute { target_secs: f64 },
}

impl SeekCommand {
    /// Resolve a relative seek against a playback snapshot.
    ///
    /// `SeekRelative` becomes a clamped `SeekAbsolute`; other commands are
    /// returned unchanged.
    pub fn resolve(self, state: &PlaybackState) -> Self {
        match self {
            Self::SeekRelative { delta_secs } => {
                relative_seek(state.current_time, state.duration, delta_secs)
            }
            other => other,
        }
    }

    /// Absolute seek target, if this is a `SeekAbsolute`.
    pub fn target_secs(&self) -> Option<f64> {
        match self {
            Self::SeekAbsolute { target_secs } => Some(*target_secs),
            _ => None,
        }
    }
}
