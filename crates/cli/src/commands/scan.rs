// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use tl_core::pipeline::Pipeline;
use tl_core::report::WriteSink;
use tl_core::Issue;

use crate::changelog::read_changelog;
use crate::config::resolve_config;
use crate::error::Result;

use super::{ensure_format, open_session, NOT_CONFIGURED};

#[derive(Serialize)]
struct ScanReport {
    scanned_at: DateTime<Utc>,
    entries: usize,
    resolved: Vec<Issue>,
}

pub(crate) fn run(
    config_path: Option<&Path>,
    repo: &Path,
    range: &str,
    build_ref: Option<&str>,
    format: &str,
) -> Result<()> {
    ensure_format(format, &["text", "json", "id"])?;

    let Some(config) = resolve_config(config_path)? else {
        println!("{}", NOT_CONFIGURED);
        return Ok(());
    };

    let entries = read_changelog(repo, range)?;
    let session = open_session(&config)?;

    // Report lines go to stderr so the resolved set stays pipeable.
    let mut sink = WriteSink::new(std::io::stderr());
    let pipeline = Pipeline::new(&session, &config.build, build_ref.unwrap_or(range));
    let resolved = pipeline.scan(&entries, &mut sink)?;

    match format {
        "json" => {
            let report = ScanReport {
                scanned_at: Utc::now(),
                entries: entries.len(),
                resolved: resolved.into_vec(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "id" => {
            for id in resolved.ids() {
                println!("{}", id);
            }
        }
        _ => {
            if resolved.is_empty() {
                println!("no issues became resolved");
            } else {
                println!("resolved {} issue(s):", resolved.len());
                for id in resolved.ids() {
                    println!("  {}", id);
                }
            }
        }
    }

    Ok(())
}
