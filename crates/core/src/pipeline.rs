// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One changelog scan per build.
//!
//! The pipeline composes reference extraction, command dispatch and
//! resolution detection over an ordered changelog. Entries are processed
//! strictly in order, lines in order within an entry, because the
//! following-line comment rule depends on adjacency and because a later
//! match must not run against state mutated by an earlier match mid-flight.

use crate::changelog::ChangeEntry;
use crate::config::BuildSettings;
use crate::dispatch::{CommandRequest, Dispatcher};
use crate::error::Result;
use crate::issue::{Issue, ProjectRegistry};
use crate::report::{status_line, ReportSink};
use crate::resolve::ResolutionDetector;
use crate::scan::{bare_references, command_references};
use crate::transport::Tracker;

/// Ordered, id-deduplicated set of issues that became resolved in one scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedIssueSet {
    issues: Vec<Issue>,
}

impl ResolvedIssueSet {
    /// Appends an issue unless one with the same id is already present.
    fn push(&mut self, issue: Issue) {
        if !self.issues.contains(&issue) {
            self.issues.push(issue);
        }
    }

    /// Returns true when no issue became resolved.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Number of resolved issues.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Iterates the issues in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter()
    }

    /// Iterates the issue ids in first-seen order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.issues.iter().map(|issue| issue.id.as_str())
    }

    /// Consumes the set, yielding the issues in first-seen order.
    pub fn into_vec(self) -> Vec<Issue> {
        self.issues
    }
}

/// Composes extraction, dispatch and resolution detection over a changelog.
pub struct Pipeline<'a> {
    tracker: &'a dyn Tracker,
    settings: &'a BuildSettings,
    /// Reference to the running build, used in ping-back comments.
    build_ref: String,
}

impl<'a> Pipeline<'a> {
    /// Creates a pipeline for one build.
    pub fn new(
        tracker: &'a dyn Tracker,
        settings: &'a BuildSettings,
        build_ref: impl Into<String>,
    ) -> Self {
        Pipeline {
            tracker,
            settings,
            build_ref: build_ref.into(),
        }
    }

    /// Scans a changelog, returning the issues that became resolved.
    ///
    /// The project registry is captured once and reused for every entry.
    /// No entry's failure halts the scan; the set reflects every entry.
    pub fn scan(
        &self,
        entries: &[ChangeEntry],
        sink: &mut dyn ReportSink,
    ) -> Result<ResolvedIssueSet> {
        let registry = ProjectRegistry::new(self.tracker.projects()?);
        Ok(self.scan_with_registry(entries, &registry, sink))
    }

    /// Scans a changelog against an already-captured project registry.
    pub fn scan_with_registry(
        &self,
        entries: &[ChangeEntry],
        registry: &ProjectRegistry,
        sink: &mut dyn ReportSink,
    ) -> ResolvedIssueSet {
        let mut resolved = ResolvedIssueSet::default();
        for entry in entries {
            self.comment_scan(entry, registry, sink);
            self.command_scan(entry, registry, sink, &mut resolved);
        }
        resolved
    }

    /// Posts the ping-back comment on every issue mentioned in the message.
    fn comment_scan(
        &self,
        entry: &ChangeEntry,
        registry: &ProjectRegistry,
        sink: &mut dyn ReportSink,
    ) {
        if !self.settings.comments_enabled {
            return;
        }
        let text = format!("Related build: {}", self.build_ref);
        for issue in bare_references(&entry.message, registry) {
            let posted = self
                .tracker
                .post_comment(
                    &issue.id,
                    &text,
                    self.settings.link_visibility.as_deref(),
                    self.settings.silent_links,
                )
                .is_ok();
            sink.line(&status_line(posted, "comment", &issue.id));
        }
    }

    /// Applies every command reference in the message, accumulating issues
    /// that newly entered a resolved state.
    fn command_scan(
        &self,
        entry: &ChangeEntry,
        registry: &ProjectRegistry,
        sink: &mut dyn ReportSink,
        resolved: &mut ResolvedIssueSet,
    ) {
        if !self.settings.commands_enabled {
            return;
        }
        let detector = ResolutionDetector::new(self.tracker, self.settings);
        let dispatcher = Dispatcher::new(self.tracker);

        for reference in command_references(&entry.message, registry) {
            let run_as = if self.settings.run_as_enabled {
                dispatcher.resolve_run_as(entry.email.as_deref(), sink)
            } else {
                None
            };

            let mut request =
                CommandRequest::new(reference.issue_id.as_str(), reference.command.as_str());
            request.comment = reference.comment.clone();
            request.run_as = run_as;
            request.silent = self.settings.silent_commands;

            let classification = detector.apply_and_classify(&request, sink);
            if classification.became_resolved {
                if let Some(issue) = classification.after {
                    resolved.push(issue);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
