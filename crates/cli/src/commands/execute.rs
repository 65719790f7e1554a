// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use tl_core::batch::BatchCommand;
use tl_core::report::WriteSink;
use tl_core::transport::Tracker;
use tl_core::ProjectRegistry;

use crate::config::resolve_config;
use crate::error::Result;

use super::{open_session, NOT_CONFIGURED};

pub(crate) fn run(
    config_path: Option<&Path>,
    command: String,
    search: Option<String>,
    text: Option<String>,
    comment: Option<String>,
    silent: bool,
) -> Result<()> {
    let Some(config) = resolve_config(config_path)? else {
        println!("{}", NOT_CONFIGURED);
        return Ok(());
    };

    let session = open_session(&config)?;

    // The registry is only consulted for the text scan.
    let registry = if text.is_some() {
        ProjectRegistry::new(session.projects()?)
    } else {
        ProjectRegistry::default()
    };

    let batch = BatchCommand {
        command,
        search,
        text,
        comment,
        silent,
    };

    let mut sink = WriteSink::new(std::io::stdout());
    let outcomes = batch.run(&session, &registry, &mut sink)?;

    let failed = outcomes.iter().filter(|outcome| !outcome.success).count();
    if failed > 0 {
        tracing::warn!("{} of {} applications failed", failed, outcomes.len());
    }
    Ok(())
}
