//! Log output setup.
//!
//! Diagnostics go to stderr so stdout stays clean for transcripts and
//! config output. `RUST_LOG` overrides the configured level.

use anyhow::{Context, Result};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Effective level once `-v` flags are applied to the configured one.
pub fn level_for_verbosity(configured: &str, verbose: u8) -> String {
    match verbose {
        0 => configured.to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global subscriber.
///
/// # Errors
/// Fails on an unknown level name or if a subscriber is already installed.
pub fn init(level: &str) -> Result<()> {
    let default_level: LevelFilter = level
        .parse()
        .with_context(|| format!("Unknown log level: {}", level))?;

    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(!no_color)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .context("Failed to install log subscriber")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(level_for_verbosity("warn", 0), "warn");
        assert_eq!(level_for_verbosity("warn", 1), "info");
        assert_eq!(level_for_verbosity("error", 2), "debug");
        assert_eq!(level_for_verbosity("warn", 7), "trace");
    }

    #[test]
    fn unknown_level_is_rejected() {
        assert!(init("chatty").is_err());
    }
}
