//! Integration tests for the replay command (CLI)

use tempfile::TempDir;

use crate::helpers::{fixture, run_tapseek};

fn replay(args: &[&str]) -> (String, String, i32) {
    let home = TempDir::new().unwrap();
    run_tapseek(&home, args)
}

fn fixture_arg(name: &str) -> String {
    fixture(name).to_str().unwrap().to_string()
}

#[test]
fn single_tap_transcript() {
    let path = fixture_arg("single_tap.ndjson");
    let (stdout, _stderr, exit_code) = replay(&["replay", &path]);

    assert_eq!(exit_code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "Single tap");
    assert_eq!(lines[1], "    1000ms  00:01  tap (waiting for second tap)");
    assert_eq!(lines[2], "    1300ms  00:01  single tap");
    assert_eq!(lines[3], "    1300ms  00:01  toggle play/pause");
    assert_eq!(lines[4], "    1300ms  00:01  overlay shown");
    assert_eq!(lines[5], "    3800ms  00:01  overlay hidden");
    assert_eq!(lines[6], "1 event(s), 5 transcript line(s)");
}

#[test]
fn double_tap_transcript() {
    let path = fixture_arg("double_tap.ndjson");
    let (stdout, _stderr, exit_code) = replay(&["replay", &path]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("    5150ms  00:00  double tap (right)"));
    assert!(stdout.contains("    5150ms  00:10  seek to 00:10"));
    assert!(stdout.contains("seek indicator shown (forward)"));
    assert!(stdout.contains("    6150ms  00:10  seek indicator hidden"));
    assert!(!stdout.contains("single tap"));
    assert!(!stdout.contains("overlay shown"));
}

#[test]
fn scrub_json_transcript() {
    let path = fixture_arg("scrub.ndjson");
    let (stdout, _stderr, exit_code) = replay(&["replay", &path, "--json"]);

    assert_eq!(exit_code, 0);
    let entries: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    let scrubs: Vec<(f64, f64)> = entries
        .iter()
        .filter(|e| e["event"] == "scrubbed")
        .map(|e| {
            (
                e["position_secs"].as_f64().unwrap(),
                e["playhead_secs"].as_f64().unwrap(),
            )
        })
        .collect();
    // The player is untouched while scrubbing
    assert_eq!(scrubs, vec![(25.0, 0.0), (75.0, 0.0)]);

    let seek = entries.iter().find(|e| e["event"] == "command").unwrap();
    assert_eq!(seek["timestamp_ms"], 80);
    assert_eq!(seek["command"]["command"], "seek_absolute");
    assert_eq!(seek["command"]["target_secs"], 75.0);
    assert_eq!(seek["playhead_secs"], 75.0);

    let last = entries.last().unwrap();
    assert_eq!(last["event"], "overlay_hidden");
    assert_eq!(last["timestamp_ms"], 2580);
}

#[test]
fn missing_file_fails() {
    let (_stdout, stderr, exit_code) = replay(&["replay", "/nonexistent/taps.ndjson"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Failed to open file"));
}

#[test]
fn timestamps_going_backwards_fail() {
    let path = fixture_arg("backwards.ndjson");
    let (stdout, stderr, exit_code) = replay(&["replay", &path]);

    assert_eq!(exit_code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Timestamp goes backwards"));
}
