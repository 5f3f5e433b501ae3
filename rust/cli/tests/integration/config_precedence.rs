use crate::helpers::cli_runner::CliRunner;
use serde_json::Value;
use serial_test::serial;
use std::fs;

const TABLE_TOML: &str = r#"
players = ["Ann", "Bob", "Cat", "Dan"]
dealer = 1
hand_counting = "latest"
"#;

fn write_config(dir: &tempfile::TempDir, contents: &str) -> String {
    let path = dir.path().join("pokertrack.toml");
    fs::write(&path, contents).expect("write config");
    path.to_string_lossy().into_owned()
}

#[test]
#[serial]
fn cfg_shows_defaults() {
    let res = CliRunner::new().run(&["cfg"]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    let json: Value = serde_json::from_str(&res.stdout).unwrap();

    assert_eq!(json["players"]["value"], serde_json::json!([]));
    assert_eq!(json["players"]["source"], "default");
    assert!(json["dealer"]["value"].is_null());
    assert_eq!(json["hand_counting"]["value"], "participated");
    assert_eq!(json["log_level"]["value"], "warn");
    assert_eq!(json["log_level"]["source"], "default");
}

#[test]
#[serial]
fn env_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, TABLE_TOML);
    let res = CliRunner::new().run_with_env(
        &["cfg"],
        &[
            ("POKERTRACK_CONFIG", path.as_str()),
            ("POKERTRACK_DEALER", "2"),
        ],
        "",
    );
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    let json: Value = serde_json::from_str(&res.stdout).unwrap();

    assert_eq!(json["players"]["value"][3], "Dan");
    assert_eq!(json["players"]["source"], "file");
    assert_eq!(json["dealer"]["value"], 2);
    assert_eq!(json["dealer"]["source"], "env");
    assert_eq!(json["hand_counting"]["value"], "latest");
    assert_eq!(json["hand_counting"]["source"], "file");
}

#[test]
#[serial]
fn play_seats_the_table_from_the_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, TABLE_TOML);
    let res = CliRunner::new().run_with_env(
        &["play", "--start"],
        &[("POKERTRACK_CONFIG", path.as_str())],
        "q\n",
    );
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.contains("play: players=4 hand_counting=latest"));
    // dealer 1 from the file: seat 0 is under the gun
    assert!(res.stdout.contains("Seat 0 Ann (UTG) to act"));
}

#[test]
#[serial]
fn cli_flags_override_env_and_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, TABLE_TOML);
    let res = CliRunner::new().run_with_env(
        &[
            "play",
            "--dealer",
            "0",
            "--hand-counting",
            "participated",
            "--start",
        ],
        &[
            ("POKERTRACK_CONFIG", path.as_str()),
            ("POKERTRACK_DEALER", "2"),
        ],
        "",
    );
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.contains("hand_counting=participated"));
    assert!(res.stdout.contains("Seat 3 Dan (UTG) to act"));
}

#[test]
#[serial]
fn players_from_env_keep_blank_seats() {
    let res = CliRunner::new().run_with_env(
        &["play", "--dealer", "0", "--start"],
        &[("POKERTRACK_PLAYERS", "Ann,,Cat")],
        "status\n",
    );
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.contains("play: players=2"));
    assert!(!res.stdout.contains("Seat 1"), "seat 1 should stay empty");
    assert!(res.stdout.contains("Seat 0 Ann (BTN) to act"));
}

#[test]
#[serial]
fn invalid_env_value_is_a_config_error() {
    let res = CliRunner::new().run_with_env(&["cfg"], &[("POKERTRACK_DEALER", "ten")], "");
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Invalid configuration"));

    let res = CliRunner::new().run_with_env(
        &["play"],
        &[("POKERTRACK_HAND_COUNTING", "sometimes")],
        "",
    );
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("unknown hand counting 'sometimes'"));
}

#[test]
#[serial]
fn unreadable_config_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "players = [1, 2");
    let res = CliRunner::new().run_with_env(&["cfg"], &[("POKERTRACK_CONFIG", path.as_str())], "");
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("cannot parse config file"));
}

#[test]
#[serial]
fn out_of_range_config_is_reported_once() {
    let res = CliRunner::new().run_with_env(
        &["play"],
        &[("POKERTRACK_PLAYERS", "A,B,C,D,E,F,G,H,I,J,K")],
        "",
    );
    assert_eq!(res.exit_code, 2);
    assert_eq!(res.stderr, "Error: Invalid configuration: at most 10 players\n");

    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "dealer = 12\n");
    let res = CliRunner::new().run_with_env(&["cfg"], &[("POKERTRACK_CONFIG", path.as_str())], "");
    assert_eq!(res.exit_code, 2);
    assert_eq!(res.stderr.matches("Invalid configuration").count(), 1);
    assert!(res.stderr.contains("Error: Invalid configuration: dealer must be < 10"));
}
