// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resolution detection around command dispatch.

use crate::config::BuildSettings;
use crate::dispatch::{CommandOutcome, CommandRequest, Dispatcher};
use crate::issue::Issue;
use crate::report::ReportSink;
use crate::transport::Tracker;

/// Outcome of one detector pass: the dispatch result plus whether the issue
/// newly entered a resolved state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// The underlying dispatch outcome.
    pub outcome: CommandOutcome,
    /// True when the state changed from a non-resolved to a resolved value
    /// across the command application.
    pub became_resolved: bool,
    /// The issue as fetched after the command, when that fetch succeeded.
    pub after: Option<Issue>,
}

/// Classifies command applications by comparing issue state before and
/// after.
///
/// The command text is free-form tracker syntax, so the effect is inferred
/// empirically rather than by interpreting the command. Someone else can
/// change the state between the two fetches; the comparison reflects
/// whatever the tracker reports.
pub struct ResolutionDetector<'a> {
    tracker: &'a dyn Tracker,
    settings: &'a BuildSettings,
}

impl<'a> ResolutionDetector<'a> {
    /// Creates a detector over a tracker session and build settings.
    pub fn new(tracker: &'a dyn Tracker, settings: &'a BuildSettings) -> Self {
        ResolutionDetector { tracker, settings }
    }

    /// Applies one command and classifies the transition.
    ///
    /// `became_resolved` requires both fetches to report a state: an issue
    /// whose state cannot be read before or after is never classified as
    /// newly resolved.
    pub fn apply_and_classify(
        &self,
        request: &CommandRequest,
        sink: &mut dyn ReportSink,
    ) -> Classification {
        let before = self.fetch(&request.issue_id).and_then(|issue| issue.state);
        let outcome = Dispatcher::new(self.tracker).apply(request, sink);
        let after_issue = self.fetch(&request.issue_id);
        let after = after_issue.as_ref().and_then(|issue| issue.state.clone());

        let became_resolved = match (&before, &after) {
            (Some(s0), Some(s1)) => {
                !self.settings.is_resolved_state(s0) && self.settings.is_resolved_state(s1)
            }
            _ => false,
        };

        Classification {
            outcome,
            became_resolved,
            after: after_issue,
        }
    }

    /// Fetches the issue, treating transport errors as an absent snapshot.
    fn fetch(&self, id: &str) -> Option<Issue> {
        self.tracker
            .fetch_issue(id, &self.settings.state_field)
            .ok()
            .flatten()
    }
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
