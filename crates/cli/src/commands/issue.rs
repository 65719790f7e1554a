// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use tl_core::transport::Tracker;
use tl_core::Issue;

use crate::config::resolve_config;
use crate::error::{Error, Result};

use super::{ensure_format, open_session, NOT_CONFIGURED};

pub(crate) fn run(config_path: Option<&Path>, id: &str, format: &str) -> Result<()> {
    ensure_format(format, &["text", "json"])?;
    Issue::parse(id)?;

    let Some(config) = resolve_config(config_path)? else {
        println!("{}", NOT_CONFIGURED);
        return Ok(());
    };

    let session = open_session(&config)?;
    let issue = session
        .fetch_issue(id, &config.build.state_field)?
        .ok_or_else(|| Error::IssueNotFound(id.to_string()))?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&issue)?),
        _ => match &issue.state {
            Some(state) => println!("{} {}", issue.id, state),
            None => println!("{}", issue.id),
        },
    }
    Ok(())
}
