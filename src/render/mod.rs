//! Rendering components for the terminal surface.
//!
//! Draws the video surface (overlay and seek indicator), the seek track,
//! and the status bar with raw ANSI sequences.

mod progress;
mod status;
mod surface;

pub use progress::{
    build_progress_bar_chars, format_duration, render_progress_bar, track_geometry, track_width,
};
pub use status::{render_separator_line, render_status_bar};
pub use surface::{indicator_label, render_surface, SurfaceFrame};
