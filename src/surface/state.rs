//! Terminal surface state
//!
//! Holds the layout and rendering flags of the interactive surface, plus
//! the gesture recorder, as well as shared types used across surface
//! modules.

use crate::controller::{GestureController, TrackGeometry};
use crate::render::track_geometry;
use crate::script::{GestureScript, ScriptEvent, ScriptHeader};

/// Result of processing an input event.
///
/// Returned by input handlers to signal control flow to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep running
    Continue,
    /// Exit the surface
    Quit,
}

/// Layout and rendering state of the terminal surface.
#[derive(Debug)]
pub struct SurfaceState {
    /// Current terminal width
    pub term_cols: u16,
    /// Current terminal height
    pub term_rows: u16,
    /// True when screen needs to be redrawn
    pub needs_render: bool,
    /// Gestures captured so far, when recording
    pub recording: Option<GestureScript>,
}

impl SurfaceState {
    /// Number of chrome lines below the surface (separator + track + status)
    pub const STATUS_LINES: u16 = 3;

    pub fn new(term_cols: u16, term_rows: u16) -> Self {
        Self {
            term_cols,
            term_rows,
            needs_render: true,
            recording: None,
        }
    }

    /// Start capturing gestures into a script.
    pub fn start_recording(&mut self, duration: f64, playing: bool, title: Option<String>) {
        let mut header = ScriptHeader::new(self.term_cols as f64, duration);
        header.track = Some(self.track_geometry());
        header.playing = playing;
        header.title = title;
        self.recording = Some(GestureScript::new(header));
    }

    /// Append an event to the recording, if one is running.
    pub fn record(&mut self, event: ScriptEvent) {
        if let Some(script) = self.recording.as_mut() {
            script.events.push(event);
        }
    }

    /// Rows available to the video surface.
    pub fn surface_rows(&self) -> u16 {
        self.term_rows.saturating_sub(Self::STATUS_LINES)
    }

    /// Row of the seek track (0-indexed).
    pub fn progress_row(&self) -> u16 {
        self.term_rows.saturating_sub(2)
    }

    pub fn track_geometry(&self) -> TrackGeometry {
        track_geometry(self.term_cols)
    }

    /// Handle terminal resize event.
    ///
    /// Re-measures the surface width and the seek track for the controller.
    pub fn handle_resize(&mut self, cols: u16, rows: u16, controller: &mut GestureController) {
        self.term_cols = cols;
        self.term_rows = rows;
        controller.set_container_width(cols as f64);
        controller.set_track_geometry(self.track_geometry());
        self.needs_render = true;
    }
}
