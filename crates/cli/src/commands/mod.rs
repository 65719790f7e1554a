// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One module per `tl` subcommand.

pub(crate) mod execute;
pub(crate) mod issue;
pub(crate) mod record_build;
pub(crate) mod report_failure;
pub(crate) mod scan;

use tl_client::{Client, Session};

use crate::config::Config;
use crate::error::{Error, Result};

/// Message printed when no configuration is discovered.
///
/// Integration is opt-in per checkout; running without configuration is a
/// successful no-op, not a failure.
pub(crate) const NOT_CONFIGURED: &str = "tracker integration not configured; nothing to do";

/// Opens the authenticated session for a loaded configuration.
pub(crate) fn open_session(config: &Config) -> Result<Session> {
    Ok(Client::new(config.site.clone())?.login()?)
}

/// Rejects unknown output formats before any work happens.
pub(crate) fn ensure_format(format: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&format) {
        Ok(())
    } else {
        Err(Error::UnknownFormat(format.to_string()))
    }
}
