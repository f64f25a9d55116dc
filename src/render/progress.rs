//! Seek track rendering.
//!
//! Displays playback progress and the scrub thumb, and defines where the
//! track sits so mouse presses can be mapped back onto it.

use std::io::Write;

use anyhow::Result;

use crate::controller::TrackGeometry;

/// Columns taken by padding and the time display next to the bar.
const CHROME_COLS: u16 = 14;

/// Format a duration in seconds to MM:SS format.
///
/// # Arguments
/// * `seconds` - Duration in seconds
///
/// # Returns
/// A string in MM:SS format
pub fn format_duration(seconds: f64) -> String {
    let total_secs = seconds as u64;
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Width of the seek track for a terminal `width` columns wide.
pub fn track_width(width: u16) -> u16 {
    width.saturating_sub(CHROME_COLS)
}

/// Geometry of the seek track in terminal columns.
///
/// The bar starts at column 1 (after one column of padding).
pub fn track_geometry(width: u16) -> TrackGeometry {
    TrackGeometry::new(1.0, track_width(width) as f64)
}

/// Build the progress bar character array.
///
/// # Arguments
/// * `bar_width` - Width of the bar in characters
/// * `position` - Displayed playback position
/// * `duration` - Total duration (0 when unknown)
///
/// # Returns
/// A tuple of (bar_chars, filled_count). An unknown duration renders an
/// empty bar with the thumb at the start.
pub fn build_progress_bar_chars(
    bar_width: usize,
    position: f64,
    duration: f64,
) -> (Vec<char>, usize) {
    let progress = if duration > 0.0 {
        (position / duration).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let filled = (bar_width as f64 * progress) as usize;

    let mut bar: Vec<char> = vec!['─'; bar_width];

    if filled < bar_width {
        bar[filled] = '⏺';
    }

    (bar, filled)
}

/// Render the seek track.
///
/// # Arguments
/// * `out` - Writer to render into
/// * `width` - Terminal width
/// * `row` - Row to render at (0-indexed)
/// * `position` - Displayed playback position
/// * `duration` - Total duration
/// * `scrubbing` - Highlight the thumb while the user drags it
pub fn render_progress_bar<W: Write>(
    out: &mut W,
    width: u16,
    row: u16,
    position: f64,
    duration: f64,
    scrubbing: bool,
) -> Result<()> {
    let bar_width = track_width(width) as usize;
    let (bar, filled) = build_progress_bar_chars(bar_width, position, duration);

    let total_str = if duration > 0.0 {
        format_duration(duration)
    } else {
        "--:--".to_string()
    };
    let time_display = format!(" {}/{}", format_duration(position), total_str);

    // ANSI color codes
    const GREEN: &str = "\x1b[32m";
    const YELLOW: &str = "\x1b[33m";
    const WHITE: &str = "\x1b[97m";
    const DARK_GREY: &str = "\x1b[90m";
    const GREY: &str = "\x1b[37m";

    let mut output = String::with_capacity(width as usize * 4);
    output.push_str(&format!("\x1b[{};1H", row + 1));
    output.push_str("\x1b[48;5;236m ");

    output.push_str(GREEN);
    for (i, &c) in bar.iter().enumerate() {
        if i < filled {
            output.push('━');
        } else if i == filled {
            output.push_str(if scrubbing { YELLOW } else { WHITE });
            output.push(c);
        } else {
            output.push_str(DARK_GREY);
            output.push(c);
        }
    }

    output.push_str(GREY);
    output.push_str(&time_display);

    let used_width = 1 + bar_width + time_display.len();
    let remaining = (width as usize).saturating_sub(used_width);
    for _ in 0..remaining {
        output.push(' ');
    }

    output.push_str("\x1b[0m");
    write!(out, "{}", output)?;

    Ok(())
}
