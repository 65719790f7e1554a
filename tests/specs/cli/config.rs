// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for configuration discovery and error reporting.

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

#[test]
fn explicit_config_path_that_does_not_exist_fails() {
    let temp = TempDir::new().unwrap();

    tl().args(["--config", "/nonexistent/config.toml", "scan", "HEAD"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn malformed_config_is_reported_with_its_path() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join(".tracklink");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[site\nurl =").unwrap();

    tl().args(["scan", "HEAD"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn config_missing_required_site_keys_is_invalid() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join(".tracklink");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[site]\nurl = \"http://x\"\n").unwrap();

    tl().args(["scan", "HEAD"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn config_is_discovered_from_a_nested_working_directory() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join(".tracklink");
    std::fs::create_dir_all(&dir).unwrap();
    // Malformed on purpose: the discovery error proves the file was found.
    std::fs::write(dir.join("config.toml"), "nonsense [").unwrap();
    let nested = temp.path().join("src").join("deep");
    std::fs::create_dir_all(&nested).unwrap();

    tl().args(["scan", "HEAD"])
        .current_dir(&nested)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}
