//! Play command handler

use std::path::PathBuf;

use anyhow::{bail, Result};

use tapseek::surface::{run_surface, SurfaceOptions};
use tapseek::Config;

/// Open the interactive surface.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    duration: f64,
    title: Option<String>,
    autoplay: bool,
    record: Option<PathBuf>,
    config: &Config,
) -> Result<()> {
    if !(duration.is_finite() && duration >= 0.0) {
        bail!("Duration must be zero or a positive number of seconds");
    }

    let options = SurfaceOptions {
        duration_secs: duration,
        title,
        poll_interval_ms: config.player.poll_interval_ms,
        autoplay,
        record,
    };
    run_surface(&options, config.gesture()?)
}
