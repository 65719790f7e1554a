// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Read;
use std::path::Path;

use tl_core::bundle::{BuildResult, BuildUpdate};
use tl_core::report::WriteSink;
use tl_core::Issue;

use crate::config::resolve_config;
use crate::error::Result;

use super::{open_session, NOT_CONFIGURED};

#[allow(clippy::too_many_arguments)]
pub(crate) fn run(
    config_path: Option<&Path>,
    bundle: &str,
    build: &str,
    result: &str,
    issues: &[String],
    mark_fixed_if_unstable: bool,
    only_if_fixed: bool,
    silent: bool,
) -> Result<()> {
    let result: BuildResult = result.parse()?;
    let ids = gather_ids(issues)?;
    for id in &ids {
        Issue::parse(id)?;
    }

    let Some(config) = resolve_config(config_path)? else {
        println!("{}", NOT_CONFIGURED);
        return Ok(());
    };

    // Nothing to record: skip before touching the tracker at all.
    if only_if_fixed && ids.is_empty() {
        return Ok(());
    }

    let session = open_session(&config)?;
    let update = BuildUpdate {
        bundle: bundle.to_string(),
        build_name: build.to_string(),
        mark_fixed_if_unstable,
        only_if_fixed,
        silent,
    };

    let mut sink = WriteSink::new(std::io::stdout());
    update.run(&session, result, &ids, &mut sink);
    Ok(())
}

/// Issue ids from the command line, or from stdin when given `-`.
fn gather_ids(args: &[String]) -> Result<Vec<String>> {
    if args == ["-"] {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text.split_whitespace().map(str::to_string).collect())
    } else {
        Ok(args.to_vec())
    }
}
