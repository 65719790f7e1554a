// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `tl` help and version surface.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn tl() -> Command {
    cargo_bin_cmd!("tl")
}

#[test]
fn help_lists_every_subcommand() {
    tl().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scan"))
        .stdout(predicate::str::contains("execute"))
        .stdout(predicate::str::contains("record-build"))
        .stdout(predicate::str::contains("report-failure"))
        .stdout(predicate::str::contains("issue"));
}

#[test]
fn version_prints_the_package_version() {
    tl().arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_subcommand_fails_with_usage() {
    tl().assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn subcommand_help_shows_flags() {
    tl().args(["scan", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--build-ref"))
        .stdout(predicate::str::contains("--repo"));

    tl().args(["record-build", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--bundle"))
        .stdout(predicate::str::contains("--only-if-fixed"));
}
