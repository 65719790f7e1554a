// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tlrs - changelog to issue-tracker integration library.
//!
//! This crate provides the functionality behind the `tl` CLI tool: reading
//! a changelog from git, scanning commit messages for tracker issue
//! references, applying tracker commands, and recording builds against the
//! tracker.
//!
//! # Main Components
//!
//! - [`Cli`] / [`Command`] - the clap surface
//! - [`Config`] - site and per-build settings loaded from
//!   `.tracklink/config.toml`
//! - [`run`] - command dispatch, the testable entry point

mod changelog;
mod cli;
mod commands;
pub mod config;
pub mod error;

pub use cli::{Cli, Command};
pub use config::{find_config, load_config, Config};
pub use error::{Error, Result};

/// Initializes tracing with an env-filter, defaulting to warnings only.
///
/// Report lines for tracker operations go to stdout/stderr directly;
/// tracing carries the ambient diagnostics (`RUST_LOG=debug` shows every
/// round trip).
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    let config = cli.config.as_deref();
    match cli.command {
        Command::Scan {
            range,
            repo,
            build_ref,
            output,
        } => commands::scan::run(config, &repo, &range, build_ref.as_deref(), &output),
        Command::Execute {
            command,
            search,
            text,
            comment,
            silent,
        } => commands::execute::run(config, command, search, text, comment, silent),
        Command::RecordBuild {
            bundle,
            build,
            result,
            issues,
            mark_fixed_if_unstable,
            only_if_fixed,
            silent,
        } => commands::record_build::run(
            config,
            &bundle,
            &build,
            &result,
            &issues,
            mark_fixed_if_unstable,
            only_if_fixed,
            silent,
        ),
        Command::ReportFailure {
            project,
            result,
            build,
            build_ref,
            summary,
            description,
            command,
            threshold,
        } => commands::report_failure::run(
            config,
            project,
            &result,
            &build,
            build_ref.as_deref(),
            summary,
            description,
            command,
            &threshold,
        ),
        Command::Issue { id, output } => commands::issue::run(config, &id, &output),
    }
}
