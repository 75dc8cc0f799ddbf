#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const SCHEDULE: &str = r#"{
  "users": ["alice", "bob"],
  "handover_start_at": "2025-11-07T17:00:00Z",
  "handover_interval_days": 7
}"#;

const OVERRIDES: &str = r#"[
  {"user": "charlie", "start_at": "2025-11-10T17:00:00Z", "end_at": "2025-11-10T22:00:00Z"}
]"#;

fn write(dir: &Path, name: &str, body: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    path.display().to_string()
}

fn releve() -> Command {
    Command::cargo_bin("releve").unwrap()
}

#[test]
fn render_writes_output_file_and_stdout() {
    let dir = tempdir().unwrap();
    let schedule = write(dir.path(), "schedule.json", SCHEDULE);
    let overrides = write(dir.path(), "overrides.json", OVERRIDES);
    let out = dir.path().join("output.json");

    releve()
        .args(["render", "--schedule", &schedule, "--overrides", &overrides])
        .args(["--from", "2025-11-07T17:00:00Z", "--until", "2025-11-21T17:00:00Z"])
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""user": "charlie""#))
        .stdout(predicate::str::contains(r#""end_at": "2025-11-21T17:00:00Z""#));

    let written: serde_json::Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
    let users: Vec<&str> = written
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["user"].as_str().unwrap())
        .collect();
    assert_eq!(users, vec!["alice", "charlie", "alice", "bob"]);
}

#[test]
fn render_exports_csv_with_colors() {
    let dir = tempdir().unwrap();
    let schedule = write(dir.path(), "schedule.json", SCHEDULE);
    let csv = dir.path().join("out.csv");

    releve()
        .current_dir(dir.path())
        .args(["render", "--schedule", &schedule])
        .args(["--from", "2025-11-07T17:00:00Z", "--until", "2025-11-21T17:00:00Z"])
        .arg("--csv")
        .arg(&csv)
        .assert()
        .success();

    let body = fs::read_to_string(&csv).unwrap();
    let mut lines = body.lines();
    assert_eq!(lines.next(), Some("user,start_at,end_at,duration_minutes,color"));
    let first = lines.next().unwrap();
    assert!(first.starts_with("alice,2025-11-07T17:00:00Z,2025-11-14T17:00:00Z,10080,#"));
    assert!(dir.path().join("output.json").exists());
}

#[test]
fn invalid_interval_fails_with_message() {
    let dir = tempdir().unwrap();
    let schedule = write(
        dir.path(),
        "schedule.json",
        r#"{"users": ["alice"], "handover_start_at": "2025-11-07T17:00:00Z", "handover_interval_days": 0}"#,
    );

    releve()
        .current_dir(dir.path())
        .args(["render", "--schedule", &schedule])
        .args(["--from", "2025-11-07T17:00:00Z", "--until", "2025-11-21T17:00:00Z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("handover_interval_days"));
}

#[test]
fn reversed_window_fails() {
    let dir = tempdir().unwrap();
    let schedule = write(dir.path(), "schedule.json", SCHEDULE);

    releve()
        .current_dir(dir.path())
        .args(["render", "--schedule", &schedule])
        .args(["--from", "2025-11-21T17:00:00Z", "--until", "2025-11-07T17:00:00Z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid window"));
}

#[test]
fn malformed_schedule_names_the_file() {
    let dir = tempdir().unwrap();
    let schedule = write(dir.path(), "schedule.json", r#"{"users": "alice"}"#);

    releve()
        .current_dir(dir.path())
        .args(["render", "--schedule", &schedule])
        .args(["--from", "2025-11-07T17:00:00Z", "--until", "2025-11-21T17:00:00Z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("parsing schedule"));
}

#[test]
fn check_flags_gaps_with_exit_code_two() {
    let dir = tempdir().unwrap();
    let entries = write(
        dir.path(),
        "entries.json",
        r#"[
          {"user": "alice", "start_at": "2025-11-07T17:00:00Z", "end_at": "2025-11-10T17:00:00Z"},
          {"user": "bob", "start_at": "2025-11-11T17:00:00Z", "end_at": "2025-11-21T17:00:00Z"}
        ]"#,
    );

    releve()
        .args(["check", "--entries", &entries])
        .args(["--from", "2025-11-07T17:00:00Z", "--until", "2025-11-21T17:00:00Z"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("gap at entry 1"));
}

#[test]
fn who_reports_the_override_user() {
    let dir = tempdir().unwrap();
    let schedule = write(dir.path(), "schedule.json", SCHEDULE);
    let overrides = write(dir.path(), "overrides.json", OVERRIDES);

    releve()
        .args(["who", "--schedule", &schedule, "--overrides", &overrides])
        .args(["--at", "2025-11-10T18:30:00Z"])
        .assert()
        .success()
        .stdout("charlie\n");
}
