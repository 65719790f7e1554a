// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Changelog entry types.

use serde::{Deserialize, Serialize};

/// One commit of the changelog: author identity plus message text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEntry {
    /// Author display name.
    pub author: String,
    /// Author e-mail, when the source control system records one. Used to
    /// attribute commands to the committing user when run-as is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Full commit message.
    pub message: String,
}

impl ChangeEntry {
    /// Creates an entry without an author e-mail.
    pub fn new(author: impl Into<String>, message: impl Into<String>) -> Self {
        ChangeEntry {
            author: author.into(),
            email: None,
            message: message.into(),
        }
    }

    /// Sets the author e-mail (builder pattern).
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}
