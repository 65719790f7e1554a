// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The clap command surface for `tl`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tl", version, about = "Link a git changelog to a remote issue tracker")]
pub struct Cli {
    /// Configuration file (default: discover .tracklink/config.toml upward)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan commit messages for issue references and apply their commands
    Scan {
        /// Git revision range to scan (e.g. v1.2..HEAD)
        range: String,
        /// Repository to read the changelog from
        #[arg(long, default_value = ".")]
        repo: PathBuf,
        /// Build reference used in ping-back comments (e.g. a CI build URL)
        #[arg(long)]
        build_ref: Option<String>,
        /// Output format: text, json, or id
        #[arg(short, long, default_value = "text")]
        output: String,
    },
    /// Apply one tracker command to issues found by search and text scan
    Execute {
        /// Tracker command to apply (e.g. "assign to joe Fixed")
        command: String,
        /// Search query whose results receive the command
        #[arg(long)]
        search: Option<String>,
        /// Text scanned for bare issue references
        #[arg(long)]
        text: Option<String>,
        /// Comment attached to each application
        #[arg(long)]
        comment: Option<String>,
        /// Do not notify watchers
        #[arg(long)]
        silent: bool,
    },
    /// Record a build in the tracker's build bundle and mark fixed issues
    RecordBuild {
        /// Build bundle the build name is added to
        #[arg(long)]
        bundle: String,
        /// Build name as shown on issues
        #[arg(long)]
        build: String,
        /// Build result: success, unstable, or failure
        #[arg(long, default_value = "success")]
        result: String,
        /// Resolved issue ids; '-' reads them from stdin, one per line
        issues: Vec<String>,
        /// Mark issues fixed even when the build is unstable
        #[arg(long)]
        mark_fixed_if_unstable: bool,
        /// Skip the update entirely when no issue ids are given
        #[arg(long)]
        only_if_fixed: bool,
        /// Do not notify watchers
        #[arg(long)]
        silent: bool,
    },
    /// Create a tracker issue for a failed build
    ReportFailure {
        /// Project short code the issue is created in
        #[arg(long)]
        project: String,
        /// Build result: success, unstable, or failure
        #[arg(long)]
        result: String,
        /// Build name used in the fallback summary
        #[arg(long)]
        build: String,
        /// Build reference used in the fallback description
        #[arg(long)]
        build_ref: Option<String>,
        /// Issue summary
        #[arg(long)]
        summary: Option<String>,
        /// Issue description
        #[arg(long)]
        description: Option<String>,
        /// Command applied to the created issue
        #[arg(long)]
        command: Option<String>,
        /// Creation threshold: failure or failure-or-unstable
        #[arg(long, default_value = "failure")]
        threshold: String,
    },
    /// Fetch one issue and print it
    Issue {
        /// Issue id, e.g. ABC-12
        id: String,
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        output: String,
    },
}
