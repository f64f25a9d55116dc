//! Shared helpers for integration tests

use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

/// Directory holding the gesture script fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Path of a named fixture.
pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Run the tapseek binary with its config isolated inside `home`.
///
/// Returns (stdout, stderr, exit code).
pub fn run_tapseek(home: &TempDir, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_tapseek"))
        .args(args)
        .env("NO_COLOR", "1")
        .env("TAPSEEK_CONFIG", home.path().join("config.toml"))
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute tapseek");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}
