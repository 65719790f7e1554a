// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build recording: build-bundle update and fixed-in-build marking.

use std::fmt;
use std::str::FromStr;

use crate::dispatch::{CommandRequest, Dispatcher};
use crate::error::{Error, Result};
use crate::report::ReportSink;
use crate::transport::Tracker;

/// Overall result of the recorded build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildResult {
    /// The build passed.
    Success,
    /// The build passed with test failures or similar degradation.
    Unstable,
    /// The build failed.
    Failure,
}

impl BuildResult {
    /// Returns the string representation used in configuration and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildResult::Success => "success",
            BuildResult::Unstable => "unstable",
            BuildResult::Failure => "failure",
        }
    }
}

impl fmt::Display for BuildResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BuildResult {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "success" => Ok(BuildResult::Success),
            "unstable" => Ok(BuildResult::Unstable),
            "failure" => Ok(BuildResult::Failure),
            _ => Err(Error::InvalidBuildResult(s.to_string())),
        }
    }
}

/// Records a build against the tracker's build bundle and marks resolved
/// issues as fixed in it.
#[derive(Debug, Clone)]
pub struct BuildUpdate {
    /// Build bundle the build name is added to.
    pub bundle: String,
    /// Build name as shown on the issues.
    pub build_name: String,
    /// Also mark issues fixed when the build is unstable.
    pub mark_fixed_if_unstable: bool,
    /// Skip the update entirely when no issues were resolved.
    pub only_if_fixed: bool,
    /// Apply the marking commands without notifying watchers.
    pub silent: bool,
}

impl BuildUpdate {
    /// Runs the update.
    ///
    /// A failed bundle update aborts the marking step and returns false;
    /// individual marking failures are reported and skipped.
    pub fn run(
        &self,
        tracker: &dyn Tracker,
        result: BuildResult,
        fixed_ids: &[String],
        sink: &mut dyn ReportSink,
    ) -> bool {
        if self.only_if_fixed && fixed_ids.is_empty() {
            return true;
        }

        match tracker.add_build_to_bundle(&self.bundle, &self.build_name) {
            Ok(()) => sink.line(&format!(
                "Added build {} to bundle: {}",
                self.build_name, self.bundle
            )),
            Err(_) => {
                sink.line(&format!(
                    "FAILED: adding build {} to bundle: {}",
                    self.build_name, self.bundle
                ));
                return false;
            }
        }

        let mark = result == BuildResult::Success
            || (self.mark_fixed_if_unstable && result == BuildResult::Unstable);
        if mark {
            let dispatcher = Dispatcher::new(tracker);
            let command = format!("Fixed in build {}", self.build_name);
            for id in fixed_ids {
                let mut request = CommandRequest::new(id.as_str(), command.as_str());
                request.silent = self.silent;
                dispatcher.apply(&request, sink);
            }
        }

        true
    }
}

#[cfg(test)]
#[path = "bundle_tests.rs"]
mod tests;
