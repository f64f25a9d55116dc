//! Theme configuration for CLI output
//!
//! Centralizes the colors used by subcommand output and the replay
//! transcript. Honors `NO_COLOR`.

use crossterm::style::Color;

/// Colors used for CLI output.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: Color,
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Accent color for highlights and important elements
    pub accent: Color,
    /// Success color
    pub success: Color,
    /// When false every helper returns the text unchanged
    pub colored: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text_primary: Color::Grey,
            text_secondary: Color::DarkGrey,
            accent: Color::DarkGreen,
            success: Color::DarkGreen,
            colored: true,
        }
    }
}

impl Theme {
    /// Theme with colors switched off.
    pub fn plain() -> Self {
        Self {
            colored: false,
            ..Self::default()
        }
    }

    fn paint(&self, color: Color, text: &str) -> String {
        if !self.colored {
            return text.to_string();
        }
        format!("{}{}{}", color_to_ansi(color), text, ANSI_RESET)
    }

    /// Format text with the accent color.
    pub fn accent_text(&self, text: &str) -> String {
        self.paint(self.accent, text)
    }

    /// Format text with the primary color.
    pub fn primary_text(&self, text: &str) -> String {
        self.paint(self.text_primary, text)
    }

    /// Format text with the secondary color.
    pub fn secondary_text(&self, text: &str) -> String {
        self.paint(self.text_secondary, text)
    }

    /// Format text with the success color.
    pub fn success_text(&self, text: &str) -> String {
        self.paint(self.success, text)
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// Convert a crossterm Color to an ANSI foreground escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::DarkRed => "\x1b[31m",
        Color::DarkGreen => "\x1b[32m",
        Color::DarkYellow => "\x1b[33m",
        Color::DarkBlue => "\x1b[34m",
        Color::DarkMagenta => "\x1b[35m",
        Color::DarkCyan => "\x1b[36m",
        Color::Grey => "\x1b[37m",
        Color::DarkGrey => "\x1b[90m",
        Color::Red => "\x1b[91m",
        Color::Green => "\x1b[92m",
        Color::Yellow => "\x1b[93m",
        Color::Blue => "\x1b[94m",
        Color::Magenta => "\x1b[95m",
        Color::Cyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // RGB and indexed colors fall back to no color
        _ => "",
    }
}

/// Theme for the current process.
///
/// Plain when `NO_COLOR` is set to a non-empty value.
pub fn current_theme() -> Theme {
    match std::env::var_os("NO_COLOR") {
        Some(value) if !value.is_empty() => Theme::plain(),
        _ => Theme::default(),
    }
}
