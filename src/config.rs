//! Configuration file handling
//!
//! The configuration lives at `<config dir>/tapseek/config.toml`
//! (overridable with `TAPSEEK_CONFIG`). Every field has a default, so a
//! missing file or a partial file is valid.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::controller::{
    ControllerError, GestureConfig, DEFAULT_OVERLAY_MS, DEFAULT_SEEK_INDICATOR_MS,
    DEFAULT_SEEK_STEP_SECS, DEFAULT_TAP_WINDOW_MS,
};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "TAPSEEK_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub controls: ControlsConfig,
    pub overlay: OverlayConfig,
    pub player: PlayerConfig,
    pub logging: LoggingConfig,
}

/// Tap and seek behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Single/double tap disambiguation window in milliseconds
    pub tap_window_ms: u64,
    /// Seconds skipped by a double tap or arrow key
    pub seek_step_secs: f64,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            tap_window_ms: DEFAULT_TAP_WINDOW_MS,
            seek_step_secs: DEFAULT_SEEK_STEP_SECS,
        }
    }
}

/// Auto-hide timings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// How long the play/pause overlay stays visible
    pub controls_ms: u64,
    /// How long the seek-direction indicator stays visible
    pub seek_indicator_ms: u64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            controls_ms: DEFAULT_OVERLAY_MS,
            seek_indicator_ms: DEFAULT_SEEK_INDICATOR_MS,
        }
    }
}

/// Interactive surface settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// How often the playback position is polled for display
    pub poll_interval_ms: u64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 250,
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level (`error`, `warn`, `info`, `debug`, `trace`); `RUST_LOG` wins
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Path of the configuration file.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("tapseek").join("config.toml"))
    }

    /// Load the configuration, falling back to defaults if the file is missing.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load the configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("no config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::parse(&content).with_context(|| format!("Invalid config file: {:?}", path))
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse TOML")?;
        Ok(config)
    }

    /// Save the configuration to its default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save the configuration to a specific path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;
        Ok(())
    }

    /// Validated controller tunables.
    pub fn gesture(&self) -> Result<GestureConfig> {
        if self.controls.tap_window_ms == 0 {
            return Err(ControllerError::InvalidWindow.into());
        }
        let step = self.controls.seek_step_secs;
        if !(step.is_finite() && step > 0.0) {
            bail!("Seek step must be a positive number of seconds (got {})", step);
        }

        Ok(GestureConfig {
            tap_window_ms: self.controls.tap_window_ms,
            seek_step_secs: step,
            overlay_ms: self.overlay.controls_ms,
            seek_indicator_ms: self.overlay.seek_indicator_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_controller_defaults() {
        let config = Config::default();
        assert_eq!(config.gesture().unwrap(), GestureConfig::default());
        assert_eq!(config.player.poll_interval_ms, 250);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = Config::parse("[controls]\ntap_window_ms = 250\n").unwrap();
        assert_eq!(config.controls.tap_window_ms, 250);
        assert_eq!(config.controls.seek_step_secs, 10.0);
        assert_eq!(config.overlay, OverlayConfig::default());
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::parse("[controls\n").is_err());
        assert!(Config::parse("[controls]\ntap_window_ms = \"fast\"\n").is_err());
    }

    #[test]
    fn zero_tap_window_is_rejected() {
        let mut config = Config::default();
        config.controls.tap_window_ms = 0;
        let err = config.gesture().unwrap_err();
        assert_eq!(
            err.downcast_ref::<ControllerError>(),
            Some(&ControllerError::InvalidWindow)
        );
    }

    #[test]
    fn non_positive_seek_step_is_rejected() {
        let mut config = Config::default();
        config.controls.seek_step_secs = 0.0;
        assert!(config.gesture().is_err());
        config.controls.seek_step_secs = f64::NAN;
        assert!(config.gesture().is_err());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.overlay.controls_ms = 4000;
        config.logging.level = "debug".to_string();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let loaded = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded, Config::default());
    }
}
