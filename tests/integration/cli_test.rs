//! Integration tests for top-level CLI behavior

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tapseek(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tapseek").unwrap();
    cmd.env("NO_COLOR", "1")
        .env("TAPSEEK_CONFIG", home.path().join("config.toml"));
    cmd
}

#[test]
fn help_lists_subcommands() {
    let home = TempDir::new().unwrap();
    tapseek(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("replay"))
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn replay_help_documents_script_format() {
    let home = TempDir::new().unwrap();
    tapseek(&home)
        .args(["replay", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<FILE>"))
        .stdout(predicate::str::contains("--json"))
        .stdout(predicate::str::contains("\"release\""));
}

#[test]
fn version_flag_prints_version() {
    let home = TempDir::new().unwrap();
    tapseek(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    tapseek(&home).assert().code(2);
}

#[test]
fn completions_for_bash() {
    let home = TempDir::new().unwrap();
    tapseek(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tapseek"));
}

#[test]
fn play_rejects_negative_duration() {
    let home = TempDir::new().unwrap();
    tapseek(&home)
        .args(["play", "--duration=-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duration"));
}
