use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn ringlog(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ringlog").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

fn messages(path: std::path::PathBuf) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|l| l.split_once("] ").unwrap().1.to_string())
        .collect()
}

#[test]
fn log_rotates_across_files() {
    let dir = TempDir::new().unwrap();

    ringlog(&dir)
        .args(["--max-files", "2", "--max-lines", "2", "--prefix", "t"])
        .args(["log", "a", "b", "c", "d", "e"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged 5 messages"));

    assert_eq!(messages(dir.path().join("t_0.txt")), vec!["e"]);
    assert_eq!(messages(dir.path().join("t_1.txt")), vec!["c", "d"]);
}

#[test]
fn trial_reports_json_state() {
    let dir = TempDir::new().unwrap();

    let output = ringlog(&dir)
        .args(["--json", "--max-files", "2", "--max-lines", "8", "--prefix", "trial"])
        .args(["trial", "20"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["messages"], 20);
    assert_eq!(json["state"]["cycle_count"], 1);
    assert_eq!(json["state"]["line_count"], 4);
    assert_eq!(json["state"]["file_index"], 0);
    assert!(!dir.path().join("trial_2.txt").exists());
}

#[test]
fn trial_rejects_zero_messages() {
    let dir = TempDir::new().unwrap();

    ringlog(&dir)
        .args(["--prefix", "t", "trial", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one message"));
    assert!(!dir.path().join("t_0.txt").exists());
}

#[test]
fn negative_capacity_is_rejected() {
    let dir = TempDir::new().unwrap();

    ringlog(&dir)
        .args(["--max-lines", "-1", "log", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("amount and capacity of files must be over 0"));
}

#[test]
fn config_file_is_discovered() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("ringlog.toml"), "max_files = 3\nfile_prefix = \"disk\"\n").unwrap();

    ringlog(&dir)
        .args(["--max-lines", "0", "show-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("max_files          3"))
        .stdout(predicate::str::contains("max_lines_per_file 512"))
        .stdout(predicate::str::contains("file_prefix        disk"));
}

#[test]
fn overflowing_ring_capacity_is_rejected() {
    let dir = TempDir::new().unwrap();

    ringlog(&dir)
        .args(["--max-files", "4611686018427387904", "--max-lines", "8", "log", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("too large"));
    assert!(!dir.path().join("log_output_0.txt").exists());
}

#[test]
fn config_errors_show_underlying_cause() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("broken.toml"), "max_files = \"many\"\n").unwrap();

    ringlog(&dir)
        .args(["--config", "broken.toml", "show-config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"))
        .stderr(predicate::str::contains("TOML parse error"));
}
