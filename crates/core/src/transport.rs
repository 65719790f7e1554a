// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The outbound boundary to the remote tracker.

use serde::{Deserialize, Serialize};

use crate::dispatch::CommandRequest;
use crate::error::Result;
use crate::issue::{Issue, Project};

/// A tracker user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Tracker login name.
    pub login: String,
}

impl User {
    /// Creates a user from a login name.
    pub fn new(login: impl Into<String>) -> Self {
        User {
            login: login.into(),
        }
    }
}

/// Operations the core needs from the remote tracker.
///
/// Implementations own the authenticated session; the core never logs in,
/// retries or pools connections. Every call is one synchronous round trip.
pub trait Tracker {
    /// Lists the projects visible to the session, in tracker order.
    fn projects(&self) -> Result<Vec<Project>>;

    /// Fetches one issue, reading the named state field from the response.
    ///
    /// Returns `None` when the issue does not exist or the response carries
    /// no issue record.
    fn fetch_issue(&self, id: &str, state_field: &str) -> Result<Option<Issue>>;

    /// Applies a free-form tracker command to an issue.
    fn apply_command(&self, request: &CommandRequest) -> Result<()>;

    /// Posts a comment on an issue, optionally restricted to a visibility
    /// group, optionally without notifying watchers.
    fn post_comment(
        &self,
        issue_id: &str,
        text: &str,
        visibility: Option<&str>,
        silent: bool,
    ) -> Result<()>;

    /// Resolves a tracker user by e-mail address.
    fn user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Runs a search query, returning matching issues.
    fn search(&self, query: &str) -> Result<Vec<Issue>>;

    /// Creates an issue, optionally applying a command to it right away.
    fn create_issue(
        &self,
        project: &str,
        summary: &str,
        description: &str,
        command: Option<&str>,
    ) -> Result<Issue>;

    /// Adds a build name to a build bundle.
    fn add_build_to_bundle(&self, bundle: &str, build: &str) -> Result<()>;
}
