//! Integration tests for the `find-meeting` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the query and
//! busy subcommands through the actual binary, including stdin/stdout piping,
//! file I/O, request overrides, and error handling.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the team.json fixture.
fn team_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/team.json")
}

fn team_json() -> String {
    std::fs::read_to_string(team_json_path()).expect("team.json fixture must exist")
}

fn find_meeting() -> Command {
    Command::cargo_bin("find-meeting").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Query subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn query_stdin_to_stdout() {
    find_meeting()
        .arg("query")
        .write_stdin(team_json())
        .assert()
        .success()
        .stdout(
            "00:00-09:00 (540 min)\n\
             09:15-10:00 (45 min)\n\
             11:30-12:00 (30 min)\n\
             13:30-24:00 (630 min)\n",
        );
}

#[test]
fn query_from_file_with_longer_duration() {
    find_meeting()
        .args(["query", "-i", team_json_path(), "--duration", "60"])
        .assert()
        .success()
        .stdout("00:00-09:00 (540 min)\n13:30-24:00 (630 min)\n");
}

#[test]
fn query_with_optional_attendees() {
    find_meeting()
        .args(["query", "-i", team_json_path(), "--with-optional"])
        .assert()
        .success()
        .stdout(predicate::str::contains("13:30-14:00 (30 min)"))
        .stdout(predicate::str::contains("16:00-24:00 (480 min)"))
        .stdout(predicate::str::contains("13:30-24:00").not());
}

#[test]
fn query_attendee_override() {
    find_meeting()
        .args(["query", "-i", team_json_path(), "--attendee", "zed"])
        .assert()
        .success()
        .stdout("No available slots\n");
}

#[test]
fn query_unknown_attendee_gets_whole_day() {
    find_meeting()
        .args(["query", "-i", team_json_path(), "--attendee", "nobody"])
        .assert()
        .success()
        .stdout("00:00-24:00 (1440 min)\n");
}

#[test]
fn query_json_output() {
    let output = find_meeting()
        .args(["query", "-i", team_json_path(), "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let slots: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        slots,
        serde_json::json!([
            {"start": 0, "end": 540},
            {"start": 555, "end": 600},
            {"start": 690, "end": 720},
            {"start": 810, "end": 1440}
        ])
    );
}

#[test]
fn query_file_to_file() {
    let output_path = "/tmp/find-meeting-test-query-output.txt";
    let _ = std::fs::remove_file(output_path);

    find_meeting()
        .args(["query", "-i", team_json_path(), "-o", output_path])
        .assert()
        .success()
        .stdout("");

    let content = std::fs::read_to_string(output_path).expect("output file must exist");
    assert!(content.starts_with("00:00-09:00 (540 min)\n"));

    let _ = std::fs::remove_file(output_path);
}

#[test]
fn query_without_request_needs_duration() {
    let input = r#"{"events":[{"name":"Lunch","when":{"start":720,"end":780},"attendees":["alice"]}]}"#;

    find_meeting()
        .arg("query")
        .write_stdin(input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--duration"));

    find_meeting()
        .args(["query", "--attendee", "alice", "--duration", "30"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout("00:00-12:00 (720 min)\n13:00-24:00 (660 min)\n");
}

#[test]
fn verbose_logs_go_to_stderr() {
    find_meeting()
        .args(["query", "-i", team_json_path(), "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("00:00-09:00"))
        .stderr(predicate::str::contains("query finished"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Busy subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn busy_lists_merged_blocks() {
    find_meeting()
        .args(["busy", "-i", team_json_path()])
        .assert()
        .success()
        .stdout(
            "09:00-09:15 (15 min)\n\
             10:00-11:30 (90 min)\n\
             12:00-13:30 (90 min)\n",
        );
}

#[test]
fn busy_with_no_related_events() {
    find_meeting()
        .args(["busy", "-i", team_json_path(), "--attendee", "nobody"])
        .assert()
        .success()
        .stdout("No busy time\n");
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn missing_input_file_fails() {
    find_meeting()
        .args(["query", "-i", "/nonexistent/team.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn malformed_range_fails() {
    let input = r#"{"events":[{"name":"Bad","when":{"start":780,"end":720},"attendees":["alice"]}],
                   "request":{"attendees":["alice"],"duration":30}}"#;

    find_meeting()
        .arg("query")
        .write_stdin(input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse schedule JSON"));
}

#[test]
fn help_lists_subcommands() {
    find_meeting()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("query"))
        .stdout(predicate::str::contains("busy"));
}
