// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-issue command dispatch.

use serde::Serialize;

use crate::report::{status_line, ReportSink};
use crate::transport::{Tracker, User};

/// One command to apply to one issue.
///
/// Constructed per match and consumed immediately; never retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    /// Target issue id.
    pub issue_id: String,
    /// Free-form tracker command syntax.
    pub command: String,
    /// Comment attached to the command application.
    pub comment: Option<String>,
    /// Acting user the command is attributed to; the session user applies
    /// when absent.
    pub run_as: Option<User>,
    /// Suppress tracker notifications to watchers.
    pub silent: bool,
}

impl CommandRequest {
    /// Creates a request with no comment, no acting user, notifications on.
    pub fn new(issue_id: impl Into<String>, command: impl Into<String>) -> Self {
        CommandRequest {
            issue_id: issue_id.into(),
            command: command.into(),
            comment: None,
            run_as: None,
            silent: false,
        }
    }
}

/// Result of one dispatch attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandOutcome {
    /// Issue the command was attempted on.
    pub issue_id: String,
    /// Whether the tracker accepted the command.
    pub success: bool,
    /// Diagnostic from the tracker when the attempt failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Applies commands against the tracker, one issue at a time.
///
/// Remote failure never propagates: each attempt is reported through the
/// sink and summarized in a [`CommandOutcome`], and the batch moves on to
/// the next issue.
pub struct Dispatcher<'a> {
    tracker: &'a dyn Tracker,
}

impl<'a> Dispatcher<'a> {
    /// Creates a dispatcher over a tracker session.
    pub fn new(tracker: &'a dyn Tracker) -> Self {
        Dispatcher { tracker }
    }

    /// Applies one command, reporting the attempt.
    pub fn apply(&self, request: &CommandRequest, sink: &mut dyn ReportSink) -> CommandOutcome {
        let action = format!("command '{}'", request.command);
        match self.tracker.apply_command(request) {
            Ok(()) => {
                sink.line(&status_line(true, &action, &request.issue_id));
                CommandOutcome {
                    issue_id: request.issue_id.clone(),
                    success: true,
                    message: None,
                }
            }
            Err(error) => {
                sink.line(&status_line(false, &action, &request.issue_id));
                CommandOutcome {
                    issue_id: request.issue_id.clone(),
                    success: false,
                    message: Some(error.to_string()),
                }
            }
        }
    }

    /// Resolves the acting user for a commit author e-mail.
    ///
    /// A missing address or failed lookup degrades to the session user: a
    /// diagnostic line is emitted and the command still applies.
    pub fn resolve_run_as(
        &self,
        email: Option<&str>,
        sink: &mut dyn ReportSink,
    ) -> Option<User> {
        let address = email?;
        match self.tracker.user_by_email(address) {
            Ok(Some(user)) => Some(user),
            Ok(None) | Err(_) => {
                sink.line(&format!("Failed to find user with e-mail: {}", address));
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
