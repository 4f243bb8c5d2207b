// file: tests/integration_test.rs
// version: 1.0.0
// guid: c7f31a90-2e85-4d6b-b049-8a5d17e6c234

//! Integration tests for the procvol CLI

use assert_cmd::Command;
use predicates::prelude::*;

fn procvol() -> Command {
    Command::cargo_bin("procvol").unwrap()
}

#[test]
fn test_kill_without_flags_fails_validation() {
    procvol()
        .arg("kill")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid arguments"));
}

#[test]
fn test_kill_with_both_flags_fails_validation() {
    procvol()
        .args(["kill", "--id", "1", "--name", "nginx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid arguments"));
}

#[test]
fn test_kill_with_empty_name_fails_validation() {
    procvol()
        .args(["kill", "--name", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("name flag cannot be empty"));
}

#[test]
fn test_kill_rejects_positional_arguments() {
    procvol()
        .args(["kill", "1234"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn test_kill_unknown_pid_reports_lookup_failure() {
    // No supported OS allocates pids this large
    procvol()
        .args(["kill", "--id", "4294967294"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("process lookup failed"));
}

#[test]
fn test_kill_unknown_name_reports_process_not_found() {
    procvol()
        .args(["kill", "--name", "procvol-no-such-process-name"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("process not found"));
}

#[test]
fn test_volumes_emits_parseable_tab_indented_json() {
    // Act
    let assert = procvol().arg("volumes").assert().success();
    let output = assert.get_output();

    // Assert: stdout is a JSON array; every record carries the full field
    // set with consistent statistics
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let records = parsed.as_array().expect("top-level element is an array");

    for record in records {
        let total = record["total"].as_u64().unwrap();
        let used = record["used"].as_u64().unwrap();
        let available = record["available"].as_u64().unwrap();
        let use_percent = record["use_percent"].as_f64().unwrap();
        assert!(record["name"].is_string());
        assert!(record["mount"].is_string());
        assert!(used + available <= total);
        assert!((0.0..=100.0).contains(&use_percent));
    }

    if !records.is_empty() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.starts_with("[\n\t{"));
    }
}

#[test]
fn test_help_lists_both_subcommands() {
    procvol()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("kill"))
        .stdout(predicate::str::contains("volumes"));
}
