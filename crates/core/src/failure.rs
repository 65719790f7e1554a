// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue creation for failed builds.

use std::fmt;
use std::str::FromStr;

use crate::bundle::BuildResult;
use crate::error::{Error, Result};
use crate::issue::Issue;
use crate::report::ReportSink;
use crate::transport::Tracker;

/// How bad the build result must be before an issue is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Threshold {
    /// Only failed builds create an issue.
    #[default]
    Failure,
    /// Failed and unstable builds create an issue.
    FailureOrUnstable,
}

impl Threshold {
    /// Returns the string representation used in configuration and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Threshold::Failure => "failure",
            Threshold::FailureOrUnstable => "failure-or-unstable",
        }
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Threshold {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "failure" => Ok(Threshold::Failure),
            "failure-or-unstable" => Ok(Threshold::FailureOrUnstable),
            _ => Err(Error::InvalidThreshold(s.to_string())),
        }
    }
}

/// Creates a tracker issue describing a failed build.
#[derive(Debug, Clone)]
pub struct FailureReport {
    /// Project short code the issue is created in.
    pub project: String,
    /// Issue summary; falls back to `Build failure in build <name>`.
    pub summary: Option<String>,
    /// Issue description; falls back to the build reference.
    pub description: Option<String>,
    /// Command applied to the created issue.
    pub command: Option<String>,
    /// Result threshold that triggers creation.
    pub threshold: Threshold,
}

impl FailureReport {
    /// True when `result` crosses the configured threshold.
    pub fn should_report(&self, result: BuildResult) -> bool {
        match self.threshold {
            Threshold::Failure => result == BuildResult::Failure,
            Threshold::FailureOrUnstable => {
                result == BuildResult::Failure || result == BuildResult::Unstable
            }
        }
    }

    /// Creates the issue when the result crosses the threshold.
    ///
    /// `build_name` feeds the summary fallback and `build_ref` the
    /// description fallback. Returns the created issue, or `None` when the
    /// result did not cross the threshold.
    pub fn run(
        &self,
        tracker: &dyn Tracker,
        result: BuildResult,
        build_name: &str,
        build_ref: &str,
        sink: &mut dyn ReportSink,
    ) -> Result<Option<Issue>> {
        if !self.should_report(result) {
            return Ok(None);
        }

        let summary = match self.summary.as_deref().filter(|s| !s.is_empty()) {
            Some(summary) => summary.to_string(),
            None => format!("Build failure in build {}", build_name),
        };
        let description = match self.description.as_deref().filter(|d| !d.is_empty()) {
            Some(description) => description.to_string(),
            None => build_ref.to_string(),
        };

        let issue =
            tracker.create_issue(&self.project, &summary, &description, self.command.as_deref())?;
        sink.line(&format!(
            "Created issue {} for failed build {}",
            issue.id, build_name
        ));
        Ok(Some(issue))
    }
}

#[cfg(test)]
#[path = "failure_tests.rs"]
mod tests;
