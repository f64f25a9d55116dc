//! Video surface rendering: the area taps land on.
//!
//! There is no video here; the surface shows the play/pause overlay and
//! the seek-direction indicator when the controller says they are visible.

use std::io::Write;

use anyhow::Result;

use crate::controller::SeekDirection;

/// What the surface should show for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceFrame<'a> {
    pub title: Option<&'a str>,
    pub playing: bool,
    pub overlay: bool,
    pub indicator: Option<SeekDirection>,
    pub seek_step_secs: f64,
}

/// Label drawn for the seek indicator.
pub fn indicator_label(direction: SeekDirection, step_secs: f64) -> String {
    match direction {
        SeekDirection::Backward => format!("« {}s", step_secs),
        SeekDirection::Forward => format!("{}s »", step_secs),
    }
}

/// Render the surface into rows `0..rows`.
pub fn render_surface<W: Write>(
    out: &mut W,
    width: u16,
    rows: u16,
    frame: &SurfaceFrame<'_>,
) -> Result<()> {
    let mut output = String::with_capacity(width as usize * rows as usize + 64);
    for row in 0..rows {
        output.push_str(&format!("\x1b[{};1H\x1b[2K", row + 1));
    }

    if let Some(title) = frame.title {
        output.push_str(&format!("\x1b[1;2H\x1b[90m{}\x1b[0m", title));
    }

    let mid_row = rows / 2 + 1;
    let third = width / 3;

    if frame.overlay {
        // Icon shows the action a tap would take
        let icon = if frame.playing { "⏸" } else { "▶" };
        output.push_str(&format!("\x1b[{};{}H\x1b[97m{}\x1b[0m", mid_row, width / 2, icon));
    }

    if let Some(direction) = frame.indicator {
        let label = indicator_label(direction, frame.seek_step_secs);
        let col = match direction {
            SeekDirection::Backward => (third / 2).max(1),
            SeekDirection::Forward => {
                let end = width - third / 2;
                end.saturating_sub(label.chars().count() as u16).max(1)
            }
        };
        output.push_str(&format!("\x1b[{};{}H\x1b[36m{}\x1b[0m", mid_row, col, label));
    }

    write!(out, "{}", output)?;
    Ok(())
}
