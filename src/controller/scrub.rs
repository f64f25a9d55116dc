//! Drag-to-scrub state for the seek track.

/// Scrub position held while the user drags along the track.
///
/// While dragging, polled player positions are ignored for display so the
/// thumb stays under the finger until release.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrubState {
    dragging: bool,
    position_secs: f64,
}

impl ScrubState {
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Start or continue a drag at `position_secs`.
    pub fn update(&mut self, position_secs: f64) {
        self.dragging = true;
        self.position_secs = position_secs;
    }

    /// End the drag, returning the last scrubbed position.
    pub fn release(&mut self) -> Option<f64> {
        if !self.dragging {
            return None;
        }
        self.dragging = false;
        Some(self.position_secs)
    }

    /// Position to display given the latest polled player position.
    pub fn displayed(&self, polled_secs: f64) -> f64 {
        if self.dragging {
            self.position_secs
        } else {
            polled_secs
        }
    }
}
