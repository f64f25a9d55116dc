//! Integration tests for configuration loading and the config subcommands

use std::fs;

use tempfile::TempDir;

use tapseek::controller::GestureConfig;
use tapseek::Config;

use crate::helpers::{fixture, run_tapseek};

#[test]
fn config_path_honors_env_override() {
    let home = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_tapseek(&home, &["config", "path"]);

    assert_eq!(exit_code, 0);
    assert_eq!(
        stdout.trim(),
        home.path().join("config.toml").display().to_string()
    );
}

#[test]
fn config_show_prints_defaults_without_a_file() {
    let home = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_tapseek(&home, &["config", "show"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[controls]"));
    assert!(stdout.contains("tap_window_ms = 300"));
    assert!(stdout.contains("controls_ms = 2500"));
    assert!(stdout.contains("seek_indicator_ms = 1000"));

    // Output is valid config
    let parsed = Config::parse(&stdout).unwrap();
    assert_eq!(parsed, Config::default());
}

#[test]
fn config_show_reflects_file_values() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("config.toml"),
        "[overlay]\ncontrols_ms = 4000\n",
    )
    .unwrap();

    let (stdout, _stderr, exit_code) = run_tapseek(&home, &["config", "show"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("controls_ms = 4000"));
    assert!(stdout.contains("tap_window_ms = 300"));
}

#[test]
fn broken_config_fails_every_command() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("config.toml"), "[controls\n").unwrap();

    let (_stdout, stderr, exit_code) = run_tapseek(&home, &["config", "show"]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Invalid config file"));
}

#[test]
fn zero_tap_window_is_rejected_on_replay() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("config.toml"),
        "[controls]\ntap_window_ms = 0\n",
    )
    .unwrap();

    let path = fixture("single_tap.ndjson");
    let (_stdout, stderr, exit_code) = run_tapseek(&home, &["replay", path.to_str().unwrap()]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Tap window"));
}

#[test]
fn saved_config_feeds_the_controller() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("sub").join("config.toml");

    let mut config = Config::default();
    config.controls.tap_window_ms = 200;
    config.controls.seek_step_secs = 5.0;
    config.save_to(&path).unwrap();

    let gesture = Config::load_from(&path).unwrap().gesture().unwrap();
    assert_eq!(
        gesture,
        GestureConfig {
            tap_window_ms: 200,
            seek_step_secs: 5.0,
            ..GestureConfig::default()
        }
    );
}
