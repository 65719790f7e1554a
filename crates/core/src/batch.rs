// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Batch command execution over issues discovered by independent means.

use crate::dispatch::{CommandOutcome, CommandRequest, Dispatcher};
use crate::error::Result;
use crate::issue::{Issue, ProjectRegistry};
use crate::report::ReportSink;
use crate::scan::bare_references;
use crate::transport::Tracker;

/// A command applied to every issue discovered by the configured means.
///
/// The issue set is the union of an explicit search query's results and the
/// bare references found in a piece of text, deduplicated by id in
/// first-seen order (search results first).
#[derive(Debug, Clone, Default)]
pub struct BatchCommand {
    /// Free-form tracker command to apply.
    pub command: String,
    /// Search query whose results join the issue set.
    pub search: Option<String>,
    /// Arbitrary text scanned for bare issue references.
    pub text: Option<String>,
    /// Comment attached to each application.
    pub comment: Option<String>,
    /// Apply without notifying watchers.
    pub silent: bool,
}

impl BatchCommand {
    /// Creates a batch for one command with no discovery means configured.
    pub fn new(command: impl Into<String>) -> Self {
        BatchCommand {
            command: command.into(),
            ..BatchCommand::default()
        }
    }

    /// Collects the issue set and applies the command to each member.
    ///
    /// Every member receives an attempt; one failure never prevents the
    /// rest. An empty set reports a single informational line.
    pub fn run(
        &self,
        tracker: &dyn Tracker,
        registry: &ProjectRegistry,
        sink: &mut dyn ReportSink,
    ) -> Result<Vec<CommandOutcome>> {
        let issues = self.collect(tracker, registry)?;
        if issues.is_empty() {
            sink.line("No issues to apply command for");
            return Ok(Vec::new());
        }

        let dispatcher = Dispatcher::new(tracker);
        let mut outcomes = Vec::with_capacity(issues.len());
        for issue in &issues {
            let mut request = CommandRequest::new(issue.id.as_str(), self.command.as_str());
            request.comment = self.comment.clone();
            request.silent = self.silent;
            outcomes.push(dispatcher.apply(&request, sink));
        }
        Ok(outcomes)
    }

    /// Discovers the issue set from the configured means.
    fn collect(&self, tracker: &dyn Tracker, registry: &ProjectRegistry) -> Result<Vec<Issue>> {
        let mut issues: Vec<Issue> = Vec::new();

        if let Some(query) = self.search.as_deref().filter(|q| !q.trim().is_empty()) {
            for issue in tracker.search(query)? {
                if !issues.contains(&issue) {
                    issues.push(issue);
                }
            }
        }

        if let Some(text) = self.text.as_deref().filter(|t| !t.trim().is_empty()) {
            for issue in bare_references(text, registry) {
                if !issues.contains(&issue) {
                    issues.push(issue);
                }
            }
        }

        Ok(issues)
    }
}

#[cfg(test)]
#[path = "batch_tests.rs"]
mod tests;
