// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the tlrs library.

use thiserror::Error;

/// All possible errors that can occur in the tlrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("invalid config {path}: {source}")]
    InvalidConfig {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("git command failed: {0}")]
    Git(String),

    #[error("unknown format: '{0}'\n  hint: valid formats are: text, json, id")]
    UnknownFormat(String),

    #[error("issue not found: {0}")]
    IssueNotFound(String),

    #[error(transparent)]
    Core(#[from] tl_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for tlrs operations.
pub type Result<T> = std::result::Result<T, Error>;
