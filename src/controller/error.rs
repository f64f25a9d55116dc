//! Gesture controller errors.

/// Errors that can occur while mapping gestures to playback commands.
///
/// None of these are fatal: the controller degrades to a clamp or a no-op
/// and logs the cause.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ControllerError {
    #[error("Invalid track geometry: width {width_px}px (origin {origin_x})")]
    InvalidGeometry { origin_x: f64, width_px: f64 },

    #[error("Invalid duration reported by player: {0}")]
    InvalidDuration(f64),

    #[error("Tap window must be a positive number of milliseconds")]
    InvalidWindow,
}
