// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use tl_core::bundle::BuildResult;
use tl_core::failure::{FailureReport, Threshold};
use tl_core::report::WriteSink;

use crate::config::resolve_config;
use crate::error::Result;

use super::{open_session, NOT_CONFIGURED};

#[allow(clippy::too_many_arguments)]
pub(crate) fn run(
    config_path: Option<&Path>,
    project: String,
    result: &str,
    build: &str,
    build_ref: Option<&str>,
    summary: Option<String>,
    description: Option<String>,
    command: Option<String>,
    threshold: &str,
) -> Result<()> {
    let result: BuildResult = result.parse()?;
    let threshold: Threshold = threshold.parse()?;

    let Some(config) = resolve_config(config_path)? else {
        println!("{}", NOT_CONFIGURED);
        return Ok(());
    };

    let report = FailureReport {
        project,
        summary,
        description,
        command,
        threshold,
    };
    if !report.should_report(result) {
        return Ok(());
    }

    let session = open_session(&config)?;
    let mut sink = WriteSink::new(std::io::stdout());
    if let Some(issue) = report.run(
        &session,
        result,
        build,
        build_ref.unwrap_or(build),
        &mut sink,
    )? {
        println!("{}", issue.id);
    }
    Ok(())
}
