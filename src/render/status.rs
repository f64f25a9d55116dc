//! Status bar rendering for the terminal surface.
//!
//! Displays playback state and keyboard shortcuts.

use std::io::Write;

use anyhow::Result;

/// Render a separator line.
///
/// # Arguments
/// * `out` - Writer to render into
/// * `width` - Terminal width
/// * `row` - Row to render at (0-indexed)
pub fn render_separator_line<W: Write>(out: &mut W, width: u16, row: u16) -> Result<()> {
    // Build line as string to minimize syscalls
    let mut output = String::with_capacity(width as usize + 20);
    output.push_str(&format!("\x1b[{};1H\x1b[90m", row + 1));
    for _ in 0..width {
        output.push('─');
    }
    output.push_str("\x1b[0m");
    write!(out, "{}", output)?;
    Ok(())
}

/// Render the status/controls bar.
///
/// # Arguments
/// * `out` - Writer to render into
/// * `width` - Terminal width
/// * `row` - Row to render at (0-indexed)
/// * `playing` - Whether playback is running
/// * `muted` - Whether audio is muted
/// * `recording` - Whether gestures are being recorded to a script
pub fn render_status_bar<W: Write>(
    out: &mut W,
    width: u16,
    row: u16,
    playing: bool,
    muted: bool,
    recording: bool,
) -> Result<()> {
    // ANSI color codes
    const WHITE: &str = "\x1b[97m";
    const RED: &str = "\x1b[31m";
    const DARK_GREY: &str = "\x1b[90m";
    const YELLOW: &str = "\x1b[33m";
    const CYAN: &str = "\x1b[36m";
    const RESET: &str = "\x1b[0m";

    let mut output = String::with_capacity(256);
    let mut visible_len: usize = 0;

    output.push_str(&format!("\x1b[{};1H", row + 1));

    output.push_str(WHITE);
    output.push(' ');
    visible_len += 1;

    // State icon (▶ and ⏸ are double-width unicode)
    let state = if playing { "⏸  " } else { "▶  " };
    output.push_str(state);
    visible_len += 4;

    if muted {
        output.push_str(YELLOW);
        output.push_str("[M] ");
        visible_len += 4;
    }

    if recording {
        output.push_str(RED);
        output.push_str("[REC] ");
        visible_len += 6;
    }

    let play_action = if playing { ":pause " } else { ":play " };
    let hints: [(&str, &str); 4] = [
        ("space", play_action),
        ("←/→", ":seek "),
        ("m", ":mute "),
        ("q", ":quit"),
    ];

    output.push_str(DARK_GREY);
    output.push_str("│ ");
    visible_len += 2;
    for (key, action) in hints {
        output.push_str(CYAN);
        output.push_str(key);
        visible_len += key.chars().count();
        output.push_str(DARK_GREY);
        output.push_str(action);
        visible_len += action.len();
    }

    // Pad to full width to overwrite any leftover content
    let padding = (width as usize).saturating_sub(visible_len);
    for _ in 0..padding {
        output.push(' ');
    }

    output.push_str(RESET);
    write!(out, "{}", output)?;

    Ok(())
}
