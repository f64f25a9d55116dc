//! Gesture and seek controller for video transport controls.
//!
//! Turns raw touch input into playback commands and transient visibility
//! signals. Nothing here renders or talks to a real player; hosts feed
//! events in and apply the emitted [`ControllerEvent`]s.
//!
//! # Architecture
//!
//! - `tap`: single/double tap disambiguation
//! - `seek`: track position mapping and clamped seeking
//! - `timer`: debounced visibility countdowns
//! - `scrub`: drag state for the seek track
//! - `state`: playback snapshot and command types
//!
//! # Time
//!
//! All operations take a monotonic `now_ms`. Deadlines that fall due
//! between two inputs are processed in deadline order before the later
//! input, so output order matches input order regardless of how often the
//! host calls [`GestureController::tick`].

mod error;
mod scrub;
mod seek;
mod state;
mod tap;
mod timer;

pub use error::ControllerError;
pub use scrub::ScrubState;
pub use seek::{map_position_to_fraction, relative_seek, seek_to_fraction, TrackGeometry};
pub use state::{check_duration, sanitize_duration, PlaybackState, SeekCommand};
pub use tap::{
    classify_tap, Half, TapClassification, TapDetector, TapEvent,
    DEFAULT_TAP_WINDOW_MS,
};
pub use timer::{DebounceTimer, DEFAULT_OVERLAY_MS, DEFAULT_SEEK_INDICATOR_MS};

use serde::Serialize;

/// Default jump for double taps and arrow keys.
pub const DEFAULT_SEEK_STEP_SECS: f64 = 10.0;

/// Tunables for a [`GestureController`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    /// Single/double tap disambiguation window
    pub tap_window_ms: u64,
    /// Seconds skipped by a double tap
    pub seek_step_secs: f64,
    /// Visibility of the play/pause overlay
    pub overlay_ms: u64,
    /// Visibility of the seek-direction indicator
    pub seek_indicator_ms: u64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            tap_window_ms: DEFAULT_TAP_WINDOW_MS,
            seek_step_secs: DEFAULT_SEEK_STEP_SECS,
            overlay_ms: DEFAULT_OVERLAY_MS,
            seek_indicator_ms: DEFAULT_SEEK_INDICATOR_MS,
        }
    }
}

/// Direction shown by the seek indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeekDirection {
    Backward,
    Forward,
}

impl From<Half> for SeekDirection {
    fn from(half: Half) -> Self {
        match half {
            Half::Left => SeekDirection::Backward,
            Half::Right => SeekDirection::Forward,
        }
    }
}

/// Output of the controller, in the order it happened.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ControllerEvent {
    /// A tap was classified (including `Pending`)
    Classified { tap: TapClassification },
    /// A command for the media player
    Command { command: SeekCommand },
    OverlayShown,
    OverlayHidden,
    SeekIndicatorShown { direction: SeekDirection },
    SeekIndicatorHidden,
    /// The displayed scrub position moved while dragging
    Scrubbed { position_secs: f64 },
}

/// Which deadline falls due next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Signal {
    Overlay,
    SeekIndicator,
    TapWindow,
}

/// Stateful controller for one player surface.
#[derive(Debug, Clone)]
pub struct GestureController {
    config: GestureConfig,
    taps: TapDetector,
    overlay: DebounceTimer,
    seek_indicator: DebounceTimer,
    seek_direction: Option<SeekDirection>,
    scrub: ScrubState,
    container_width: f64,
    track: Option<TrackGeometry>,
}

impl GestureController {
    /// Create a controller for a surface `container_width` wide.
    ///
    /// # Errors
    /// `ControllerError::InvalidWindow` when the tap window is 0.
    pub fn new(config: GestureConfig, container_width: f64) -> Result<Self, ControllerError> {
        Ok(Self {
            taps: TapDetector::new(config.tap_window_ms)?,
            overlay: DebounceTimer::new(config.overlay_ms),
            seek_indicator: DebounceTimer::new(config.seek_indicator_ms),
            seek_direction: None,
            scrub: ScrubState::default(),
            container_width,
            track: None,
            config,
        })
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Update the surface width after a layout change.
    pub fn set_container_width(&mut self, width: f64) {
        self.container_width = width;
    }

    /// Update the measured seek-track bounds.
    pub fn set_track_geometry(&mut self, geometry: TrackGeometry) {
        self.track = Some(geometry);
    }

    pub fn is_dragging(&self) -> bool {
        self.scrub.is_dragging()
    }

    /// Whether the play/pause overlay is visible at `now_ms`.
    pub fn overlay_visible(&self, now_ms: u64) -> bool {
        self.overlay.is_visible(now_ms)
    }

    /// Seek indicator direction, if visible at `now_ms`.
    pub fn seek_indicator(&self, now_ms: u64) -> Option<SeekDirection> {
        if self.seek_indicator.is_visible(now_ms) {
            self.seek_direction
        } else {
            None
        }
    }

    /// Position the UI should display, given the latest polled position.
    pub fn displayed_position(&self, polled_secs: f64) -> f64 {
        self.scrub.displayed(polled_secs)
    }

    /// Earliest pending deadline, for scheduling a single wake-up.
    pub fn next_deadline(&self) -> Option<u64> {
        self.next_due().map(|(deadline, _)| deadline)
    }

    /// Process every deadline up to and including `now_ms`.
    pub fn tick(&mut self, now_ms: u64) -> Vec<ControllerEvent> {
        let mut out = Vec::new();
        self.advance(now_ms, &mut out);
        out
    }

    /// Handle a tap on the video surface.
    pub fn on_tap(&mut self, event: &TapEvent, state: &PlaybackState) -> Vec<ControllerEvent> {
        let mut out = Vec::new();
        self.advance(event.timestamp_ms, &mut out);

        // advance() has already resolved any tap whose window closed
        let current = self.taps.tap(event, self.container_width);

        tracing::debug!(
            "tap at {}ms x={:.1} -> {:?}",
            event.timestamp_ms,
            event.x,
            current
        );
        out.push(ControllerEvent::Classified { tap: current });

        if let TapClassification::Double { half } = current {
            let delta = match half {
                Half::Left => -self.config.seek_step_secs,
                Half::Right => self.config.seek_step_secs,
            };
            self.push_seek(delta, event.timestamp_ms, state, &mut out);
        }

        out
    }

    /// Keyboard-style relative seek; shows the seek indicator.
    pub fn seek_by(
        &mut self,
        delta_secs: f64,
        now_ms: u64,
        state: &PlaybackState,
    ) -> Vec<ControllerEvent> {
        let mut out = Vec::new();
        self.advance(now_ms, &mut out);
        self.push_seek(delta_secs, now_ms, state, &mut out);
        out
    }

    /// Explicit play/pause toggle (button or key); shows the overlay.
    pub fn toggle_play_pause(&mut self, now_ms: u64) -> Vec<ControllerEvent> {
        let mut out = Vec::new();
        self.advance(now_ms, &mut out);
        out.push(ControllerEvent::Command {
            command: SeekCommand::TogglePlayPause,
        });
        self.show_overlay(now_ms, &mut out);
        out
    }

    /// Press on the seek track: start a scrub at the pressed position.
    ///
    /// Unusable geometry is logged and the press ignored.
    pub fn press_track(
        &mut self,
        x: f64,
        now_ms: u64,
        state: &PlaybackState,
    ) -> Vec<ControllerEvent> {
        let mut out = Vec::new();
        self.advance(now_ms, &mut out);
        self.scrub_to(x, now_ms, state, &mut out);
        out
    }

    /// Drag along the seek track. Ignored unless a press started a scrub.
    pub fn drag_track(
        &mut self,
        x: f64,
        now_ms: u64,
        state: &PlaybackState,
    ) -> Vec<ControllerEvent> {
        let mut out = Vec::new();
        self.advance(now_ms, &mut out);
        if self.scrub.is_dragging() {
            self.scrub_to(x, now_ms, state, &mut out);
        } else {
            tracing::debug!("drag at x={:.1} without a press, ignoring", x);
        }
        out
    }

    /// Release the seek track: seek to the last scrubbed position.
    pub fn release_track(&mut self, now_ms: u64, state: &PlaybackState) -> Vec<ControllerEvent> {
        let mut out = Vec::new();
        self.advance(now_ms, &mut out);
        if let Some(position) = self.scrub.release() {
            // Clamp against the duration as it is now, not at press time
            let command = relative_seek(position, state.duration, 0.0);
            tracing::debug!("scrub released -> {:?}", command);
            out.push(ControllerEvent::Command { command });
            self.show_overlay(now_ms, &mut out);
        }
        out
    }

    fn scrub_to(
        &mut self,
        x: f64,
        now_ms: u64,
        state: &PlaybackState,
        out: &mut Vec<ControllerEvent>,
    ) {
        let Some(geometry) = self.track else {
            tracing::warn!("seek track has not been measured yet, ignoring press");
            return;
        };

        let fraction = match map_position_to_fraction(x, &geometry) {
            Ok(fraction) => fraction,
            Err(e) => {
                tracing::warn!("{}, ignoring press", e);
                return;
            }
        };

        let position_secs = seek_to_fraction(fraction, state.duration)
            .target_secs()
            .unwrap_or(0.0);
        self.scrub.update(position_secs);
        out.push(ControllerEvent::Scrubbed { position_secs });
        self.show_overlay(now_ms, out);
    }

    fn push_seek(
        &mut self,
        delta_secs: f64,
        now_ms: u64,
        state: &PlaybackState,
        out: &mut Vec<ControllerEvent>,
    ) {
        let command = SeekCommand::SeekRelative { delta_secs }.resolve(state);
        tracing::debug!("seek {:+}s -> {:?}", delta_secs, command);
        out.push(ControllerEvent::Command { command });

        let direction = if delta_secs < 0.0 {
            SeekDirection::Backward
        } else {
            SeekDirection::Forward
        };
        let newly_shown = self.seek_indicator.trigger(now_ms);
        if newly_shown || self.seek_direction != Some(direction) {
            out.push(ControllerEvent::SeekIndicatorShown { direction });
        }
        self.seek_direction = Some(direction);
    }

    fn resolve_single(&mut self, at_ms: u64, out: &mut Vec<ControllerEvent>) {
        tracing::debug!("tap window closed at {}ms -> Single", at_ms);
        out.push(ControllerEvent::Classified {
            tap: TapClassification::Single,
        });
        out.push(ControllerEvent::Command {
            command: SeekCommand::TogglePlayPause,
        });
        self.show_overlay(at_ms, out);
    }

    fn show_overlay(&mut self, at_ms: u64, out: &mut Vec<ControllerEvent>) {
        if self.overlay.trigger(at_ms) {
            out.push(ControllerEvent::OverlayShown);
        }
    }

    fn next_due(&self) -> Option<(u64, Signal)> {
        // Ties resolve in this order: an expiring signal hides before a
        // tap resolution retriggers it.
        [
            (self.overlay.deadline(), Signal::Overlay),
            (self.seek_indicator.deadline(), Signal::SeekIndicator),
            (self.taps.deadline(), Signal::TapWindow),
        ]
        .into_iter()
        .filter_map(|(deadline, signal)| deadline.map(|d| (d, signal)))
        .min_by_key(|(deadline, _)| *deadline)
    }

    fn advance(&mut self, now_ms: u64, out: &mut Vec<ControllerEvent>) {
        while let Some((deadline, signal)) = self.next_due() {
            if deadline > now_ms {
                break;
            }
            match signal {
                Signal::Overlay => {
                    if self.overlay.expire(deadline) {
                        out.push(ControllerEvent::OverlayHidden);
                    }
                }
                Signal::SeekIndicator => {
                    if self.seek_indicator.expire(deadline) {
                        self.seek_direction = None;
                        out.push(ControllerEvent::SeekIndicatorHidden);
                    }
                }
                Signal::TapWindow => {
                    if self.taps.resolve_due(deadline).is_some() {
                        self.resolve_single(deadline, out);
                    }
                }
            }
        }
    }
}
