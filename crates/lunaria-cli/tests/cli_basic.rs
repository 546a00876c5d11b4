//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against a dev data directory
//! and verify outputs.

use std::process::Command;

/// Run a CLI command against the dev data directory and return output.
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "lunaria-cli", "--"])
        .args(args)
        .env("LUNARIA_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_user_list() {
    let (stdout, _, code) = run_cli(&["user", "list"]);
    assert_eq!(code, 0, "user list failed");
    assert!(stdout.contains("User 1"));
}

#[test]
fn test_cycle_add_and_list() {
    let (stdout, _, code) = run_cli(&[
        "cycle", "add", "2024-01-01", "--end", "2024-01-05", "--flow", "heavy",
    ]);
    assert_eq!(code, 0, "cycle add failed");
    assert!(stdout.contains("Cycle recorded:"));

    let (stdout, _, code) = run_cli(&["cycle", "list"]);
    assert_eq!(code, 0, "cycle list failed");
    assert!(stdout.contains("2024-01-01"));
}

#[test]
fn test_cycle_add_rejects_reversed_dates() {
    let (_, stderr, code) = run_cli(&["cycle", "add", "2024-01-05", "--end", "2024-01-01"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("end date"));
}

#[test]
fn test_symptom_add_rejects_out_of_range_severity() {
    let (_, stderr, code) = run_cli(&["symptom", "add", "2024-01-02", "cramps", "--severity", "9"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("severity"));
}

#[test]
fn test_status_with_explicit_date() {
    let _ = run_cli(&["cycle", "add", "2024-01-01"]);
    let (stdout, _, code) = run_cli(&["status", "--date", "2024-01-03", "--json"]);
    assert_eq!(code, 0, "status failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["status"], "period");
}

#[test]
fn test_export_csv_header() {
    let (stdout, _, code) = run_cli(&["export", "csv"]);
    assert_eq!(code, 0, "export csv failed");
    assert!(stdout.starts_with("user,date,kind,detail"));
}

#[test]
fn test_remind_plan_json() {
    let _ = run_cli(&["cycle", "add", "2024-01-01"]);
    let (stdout, _, code) = run_cli(&["remind", "plan", "--json"]);
    assert_eq!(code, 0, "remind plan failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(parsed.is_array());
}

#[test]
fn test_config_get_set() {
    let (_, _, code) = run_cli(&["config", "set", "ui.theme", "dark"]);
    assert_eq!(code, 0, "config set failed");
    let (stdout, _, code) = run_cli(&["config", "get", "ui.theme"]);
    assert_eq!(code, 0, "config get failed");
    assert_eq!(stdout.trim(), "dark");
}

#[test]
fn test_data_reset_recreates_defaults() {
    let (stdout, _, code) = run_cli(&["data", "reset"]);
    assert_eq!(code, 0, "data reset failed");
    assert!(stdout.contains("2 default users"));
}
