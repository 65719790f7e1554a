// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `tl record-build` command.

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

fn write_config(temp: &TempDir) {
    let dir = temp.path().join(".tracklink");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("config.toml"),
        r#"
[site]
url = "http://127.0.0.1:1"
username = "builder"
password = "secret"
"#,
    )
    .unwrap();
}

#[test]
fn invalid_issue_id_is_rejected_before_any_network_traffic() {
    let temp = TempDir::new().unwrap();
    write_config(&temp);

    tl().args(["record-build", "--bundle", "nightly", "--build", "42", "not-an-id"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid issue id"));
}

#[test]
fn invalid_build_result_is_rejected() {
    let temp = TempDir::new().unwrap();
    write_config(&temp);

    tl().args([
        "record-build",
        "--bundle",
        "nightly",
        "--build",
        "42",
        "--result",
        "aborted",
    ])
    .current_dir(temp.path())
    .assert()
    .failure()
    .stderr(predicate::str::contains("invalid build result"));
}

#[test]
fn only_if_fixed_without_issues_skips_the_tracker_entirely() {
    let temp = TempDir::new().unwrap();
    write_config(&temp);

    tl().args([
        "record-build",
        "--bundle",
        "nightly",
        "--build",
        "42",
        "--only-if-fixed",
    ])
    .current_dir(temp.path())
    .assert()
    .success();
}

#[test]
fn unconfigured_record_build_is_a_successful_no_op() {
    let temp = TempDir::new().unwrap();

    tl().args(["record-build", "--bundle", "nightly", "--build", "42", "ABC-1"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("not configured"));
}

#[test]
fn issue_ids_can_come_from_stdin() {
    let temp = TempDir::new().unwrap();
    write_config(&temp);

    // A bad id via stdin proves the ids are read and validated.
    tl().args(["record-build", "--bundle", "nightly", "--build", "42", "-"])
        .current_dir(temp.path())
        .write_stdin("bad-id\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid issue id"));
}
