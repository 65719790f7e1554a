// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for tl-core operations.

use thiserror::Error;

/// All possible errors that can occur in tl-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("login failed for '{0}'\n  hint: check the site url, username and password")]
    Login(String),

    #[error("tracker request failed: {0}")]
    Transport(String),

    #[error("malformed response payload: {0}")]
    InvalidPayload(String),

    #[error("invalid issue id: '{0}'\n  hint: issue ids look like PROJ-123")]
    InvalidIssueId(String),

    #[error("invalid build result: '{0}'\n  hint: valid results are: success, unstable, failure")]
    InvalidBuildResult(String),

    #[error("invalid threshold: '{0}'\n  hint: valid thresholds are: failure, failure-or-unstable")]
    InvalidThreshold(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for tl-core operations.
pub type Result<T> = std::result::Result<T, Error>;
