// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `tl scan` command.
//!
//! These run without a reachable tracker: they cover the unconfigured
//! no-op path, argument validation, and failures before or at login.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tl() -> Command {
    cargo_bin_cmd!("tl")
}

/// Writes a config pointing at a closed local port.
fn write_unreachable_config(temp: &TempDir) {
    let dir = temp.path().join(".tracklink");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("config.toml"),
        r#"
[site]
url = "http://127.0.0.1:1"
username = "builder"
password = "secret"

[build]
commands_enabled = true
"#,
    )
    .unwrap();
}

fn git(temp: &TempDir, args: &[&str]) {
    let status = std::process::Command::new("git")
        .current_dir(temp.path())
        .args(args)
        .status()
        .unwrap();
    assert!(status.success());
}

#[test]
fn unconfigured_scan_is_a_successful_no_op() {
    let temp = TempDir::new().unwrap();
    tl().args(["scan", "HEAD"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("not configured"));
}

#[test]
fn unknown_output_format_is_rejected_before_any_work() {
    let temp = TempDir::new().unwrap();
    tl().args(["scan", "HEAD", "-o", "yaml"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn scan_outside_a_git_repository_reports_the_git_error() {
    let temp = TempDir::new().unwrap();
    write_unreachable_config(&temp);

    tl().args(["scan", "HEAD"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("git"));
}

#[test]
fn scan_with_an_unreachable_tracker_fails_after_reading_the_log() {
    let temp = TempDir::new().unwrap();
    write_unreachable_config(&temp);
    git(&temp, &["init", "-q"]);
    git(
        &temp,
        &[
            "-c",
            "user.name=Dev",
            "-c",
            "user.email=dev@example.com",
            "commit",
            "--allow-empty",
            "-q",
            "-m",
            "#ABC-1 fixed",
        ],
    );

    tl().args(["scan", "HEAD"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn unconfigured_execute_is_a_successful_no_op() {
    let temp = TempDir::new().unwrap();
    tl().args(["execute", "add tag sweep", "--search", "state: Open"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("not configured"));
}
