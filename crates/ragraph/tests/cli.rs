//! Binary-level tests: argument handling, stdin sessions, exit codes

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const DEADLOCK: &str = r#"{"op":"add_process","id":"P1"}
{"op":"add_process","id":"P2"}
{"op":"add_resource","id":"R1"}
{"op":"add_resource","id":"R2"}
{"op":"request_resource","process":"P1","resource":"R1"}
{"op":"allocate_resource","process":"P2","resource":"R1"}
{"op":"request_resource","process":"P2","resource":"R2"}
{"op":"allocate_resource","process":"P1","resource":"R2"}
"#;

fn ragraph() -> Command {
    let mut cmd = Command::cargo_bin("ragraph").unwrap();
    cmd.env_remove("RUST_LOG").arg("--color").arg("never");
    cmd
}

#[test]
fn version_prints_package_version() {
    ragraph()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn run_reads_stdin_by_default() {
    let output = ragraph()
        .write_stdin("{\"op\":\"add_process\",\"id\":\"P1\"}\n{\"op\":\"get_state\"}\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let lines: Vec<serde_json::Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["success"], true);
    assert_eq!(lines[1]["state"]["nodes"][0]["id"], "P1");
    assert_eq!(lines[1]["state"]["nodes"][0]["kind"], "process");
}

#[test]
fn check_exits_nonzero_on_deadlock() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("deadlock.jsonl");
    fs::write(&path, DEADLOCK).unwrap();

    ragraph()
        .arg("check")
        .arg(&path)
        .assert()
        .code(2)
        .stdout(predicate::str::starts_with("deadlock: "));
}

#[test]
fn check_succeeds_without_cycle() {
    ragraph()
        .arg("check")
        .write_stdin(format!("{DEADLOCK}{{\"op\":\"undo\"}}\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("no cycle found"));
}

#[test]
fn invalid_history_limit_is_rejected() {
    ragraph()
        .args(["--history-limit", "lots", "version"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("history-limit"));
}
