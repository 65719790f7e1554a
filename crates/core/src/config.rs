// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Site and per-build configuration values.
//!
//! Configuration is an explicit value owned by the caller and passed into
//! the pipeline at construction; nothing here reads process-global state.

use serde::{Deserialize, Serialize};

use crate::payload::DEFAULT_STATE_FIELD;

/// Connection settings for one tracker site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Display name for the site.
    #[serde(default)]
    pub name: String,
    /// Base URL of the tracker service.
    pub url: String,
    /// Login user name.
    pub username: String,
    /// Login password.
    #[serde(default)]
    pub password: String,
}

/// Per-build integration settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSettings {
    /// Post a ping-back comment on every issue mentioned in a commit
    /// message.
    #[serde(default)]
    pub comments_enabled: bool,
    /// Execute commands found in commit messages.
    #[serde(default)]
    pub commands_enabled: bool,
    /// Attribute commands to the committing user, resolved by e-mail.
    #[serde(default)]
    pub run_as_enabled: bool,
    /// Apply commands without notifying watchers.
    #[serde(default)]
    pub silent_commands: bool,
    /// Post ping-back comments without notifying watchers.
    #[serde(default)]
    pub silent_links: bool,
    /// Group that ping-back comments are visible to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_visibility: Option<String>,
    /// Name of the state field the resolution detector reads.
    #[serde(default = "default_state_field")]
    pub state_field: String,
    /// State values counted as resolved.
    #[serde(default = "default_fixed_values")]
    pub fixed_values: Vec<String>,
}

fn default_state_field() -> String {
    DEFAULT_STATE_FIELD.to_string()
}

fn default_fixed_values() -> Vec<String> {
    vec!["Fixed".to_string()]
}

impl Default for BuildSettings {
    fn default() -> Self {
        BuildSettings {
            comments_enabled: false,
            commands_enabled: false,
            run_as_enabled: false,
            silent_commands: false,
            silent_links: false,
            link_visibility: None,
            state_field: default_state_field(),
            fixed_values: default_fixed_values(),
        }
    }
}

impl BuildSettings {
    /// Returns true when `state` is one of the configured resolved values.
    pub fn is_resolved_state(&self, state: &str) -> bool {
        self.fixed_values.iter().any(|value| value == state)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
