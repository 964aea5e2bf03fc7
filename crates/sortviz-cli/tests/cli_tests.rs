// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used)]
//! End-to-end tests for the `sortviz` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sortviz(config: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sortviz").unwrap();
    cmd.arg("--config-dir").arg(config.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn algorithms_lists_builtins() {
    let dir = TempDir::new().unwrap();
    sortviz(&dir)
        .arg("algorithms")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bubble Sort"))
        .stdout(predicate::str::contains("Insertion Sort"));
}

#[test]
fn quiet_run_prints_summary() {
    let dir = TempDir::new().unwrap();
    sortviz(&dir)
        .args(["run", "--quiet", "--values", "5,3,1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sorted: [1, 3, 5]"))
        .stdout(predicate::str::is_match(r"steps\W+3\b").unwrap());
}

#[test]
fn drawn_run_shows_highlights() {
    let dir = TempDir::new().unwrap();
    sortviz(&dir)
        .args([
            "run",
            "--values=3,-1,2",
            "--algorithm",
            "insertion",
            "--direction",
            "desc",
            "--tick-rate",
            "1000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Insertion Sort - Descending"))
        .stdout(predicate::str::contains("@"))
        .stdout(predicate::str::contains("sorted: [3, 2, -1]"));
}

#[test]
fn unknown_algorithm_fails() {
    let dir = TempDir::new().unwrap();
    sortviz(&dir)
        .args(["run", "--quiet", "--algorithm", "bogo", "--values", "2,1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown algorithm: bogo"));
}

#[test]
fn prefs_save_then_show() {
    let dir = TempDir::new().unwrap();
    sortviz(&dir)
        .args(["prefs", "save", "--len", "12", "--direction", "desc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("prefs.json"));
    assert!(dir.path().join("prefs.json").exists());

    sortviz(&dir)
        .args(["prefs", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"len\": 12"))
        .stdout(predicate::str::contains("\"descending\""));
}

#[test]
fn saved_prefs_drive_generated_runs() {
    let dir = TempDir::new().unwrap();
    sortviz(&dir)
        .args(["prefs", "save", "--len", "6", "--min", "-3", "--max", "3"])
        .assert()
        .success();
    sortviz(&dir)
        .args(["run", "--quiet", "--seed", "11"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"length\W+6\b").unwrap());
}

#[test]
fn corrupt_prefs_are_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("prefs.json"),
        r#"{ "array": { "len": 3, "min_value": 9, "max_value": 1 } }"#,
    )
    .unwrap();
    sortviz(&dir)
        .args(["run", "--quiet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("inverted"));
}

#[test]
fn play_quits_on_q() {
    let dir = TempDir::new().unwrap();
    sortviz(&dir)
        .args(["play", "--len", "5", "--seed", "2"])
        .write_stdin("i\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Insertion Sort - Ascending"));
}

#[test]
fn play_reports_unbound_keys_and_stops_at_eof() {
    let dir = TempDir::new().unwrap();
    sortviz(&dir)
        .args(["play", "--len", "5"])
        .write_stdin("x\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("unbound key: x"));
}

#[test]
fn play_pauses_a_running_sort() {
    let dir = TempDir::new().unwrap();
    sortviz(&dir)
        .args(["play", "--len", "40", "--seed", "4", "--tick-rate", "1"])
        .write_stdin("\np\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("paused"));
}
