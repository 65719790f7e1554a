// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration discovery and loading.
//!
//! Configuration is stored in `.tracklink/config.toml` and includes:
//! - `[site]`: tracker url and credentials
//! - `[build]`: per-build integration flags (comments, commands, run-as)
//!
//! The file is discovered by walking up from the working directory, so one
//! configuration serves a whole repository checkout. The tracker password
//! may come from the `TL_PASSWORD` environment variable instead of the
//! file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use tl_core::config::{BuildSettings, SiteConfig};

use crate::error::{Error, Result};

const CONFIG_DIR: &str = ".tracklink";
const CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding the configured password.
pub const PASSWORD_ENV: &str = "TL_PASSWORD";

/// Configuration stored in `.tracklink/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Tracker site connection settings.
    pub site: SiteConfig,
    /// Per-build integration settings.
    #[serde(default)]
    pub build: BuildSettings,
}

/// Finds the nearest configuration file at or above `start`.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut dir = Some(start);
    while let Some(d) = dir {
        let candidate = d.join(CONFIG_DIR).join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        dir = d.parent();
    }
    None
}

/// Loads a configuration file, applying the password override.
pub fn load_config(path: &Path) -> Result<Config> {
    let text =
        fs::read_to_string(path).map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;
    let mut config: Config = toml::from_str(&text).map_err(|source| Error::InvalidConfig {
        path: path.display().to_string(),
        source,
    })?;
    if let Ok(password) = std::env::var(PASSWORD_ENV) {
        config.site.password = password;
    }
    Ok(config)
}

/// Resolves configuration for a command: explicit path, or discovery.
///
/// Returns `Ok(None)` when no explicit path is given and discovery finds
/// nothing. Integration is opt-in, so absence is not an error; commands
/// treat it as an informational no-op.
pub fn resolve_config(explicit: Option<&Path>) -> Result<Option<Config>> {
    match explicit {
        Some(path) => load_config(path).map(Some),
        None => match find_config(&std::env::current_dir()?) {
            Some(path) => load_config(&path).map(Some),
            None => Ok(None),
        },
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
