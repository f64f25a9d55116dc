//! Seek-track mapping and clamped seeking.
//!
//! Pure functions converting a press position on the seek track into a
//! fraction of the duration, and offsets into in-range absolute targets.

use serde::{Deserialize, Serialize};

use crate::controller::error::ControllerError;
use crate::controller::state::SeekCommand;

/// On-screen bounds of the seek track.
///
/// Usually measured from the rendered layout, so it may be stale or
/// zero-sized between measurements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackGeometry {
    /// Left edge of the track in device-local coordinates
    pub origin_x: f64,
    /// Width of the track in pixels
    pub width_px: f64,
}

impl TrackGeometry {
    pub fn new(origin_x: f64, width_px: f64) -> Self {
        Self { origin_x, width_px }
    }

    /// Whether the geometry can be used for mapping.
    pub fn is_valid(&self) -> bool {
        self.origin_x.is_finite() && self.width_px.is_finite() && self.width_px > 0.0
    }
}

/// Map a press position on the track to a fraction in [0, 1].
///
/// # Errors
/// `ControllerError::InvalidGeometry` when the track has no usable width.
pub fn map_position_to_fraction(
    press_x: f64,
    geometry: &TrackGeometry,
) -> Result<f64, ControllerError> {
    if !geometry.is_valid() {
        return Err(ControllerError::InvalidGeometry {
            origin_x: geometry.origin_x,
            width_px: geometry.width_px,
        });
    }

    let fraction = (press_x - geometry.origin_x) / geometry.width_px;
    if fraction.is_nan() {
        return Ok(0.0);
    }
    Ok(fraction.clamp(0.0, 1.0))
}

/// Seek by `delta_secs` from `current`, clamped to [0, duration].
///
/// When the duration is unknown (0 or invalid) the upper bound is the
/// current position, so forward seeks become no-ops.
pub fn relative_seek(current: f64, duration: f64, delta_secs: f64) -> SeekCommand {
    let current = if current.is_finite() { current.max(0.0) } else { 0.0 };
    let upper = if duration.is_finite() && duration > 0.0 {
        duration
    } else {
        current
    };

    let delta = if delta_secs.is_finite() { delta_secs } else { 0.0 };
    SeekCommand::SeekAbsolute {
        target_secs: (current + delta).clamp(0.0, upper),
    }
}

/// Seek to a fraction of the duration.
///
/// The fraction is clamped to [0, 1] and an unknown duration seeks to 0.
pub fn seek_to_fraction(fraction: f64, duration: f64) -> SeekCommand {
    let duration = if duration.is_finite() { duration.max(0.0) } else { 0.0 };
    let fraction = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
    SeekCommand::SeekAbsolute {
        target_secs: (fraction * duration).clamp(0.0, duration),
    }
}
