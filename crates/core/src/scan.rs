// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue reference extraction from free text and commit messages.
//!
//! Two matching modes share one primitive: a pattern anchored on a registry
//! short code followed by `-` and digits. Bare-reference mode scans whole
//! text for mentions; command-reference mode works line by line and carries
//! the command text after the id.

use regex::Regex;

use crate::issue::{Issue, ProjectRegistry};

/// Character marking a command reference in a commit message line.
const COMMAND_TRIGGER: char = '#';

/// A command reference extracted from one changelog line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandReference {
    /// Referenced issue id, e.g. `"ABC-12"`.
    pub issue_id: String,
    /// Free-form tracker command text following the id.
    pub command: String,
    /// Comment taken from the immediately following line, when that line
    /// carries no trigger character of its own.
    pub comment: Option<String>,
}

/// Scans free text for bare issue references (`CODE-123`).
///
/// Each registry code is matched in turn; every hit yields a placeholder
/// issue whose id is rebuilt from the registry code plus the captured
/// digits. Codes not in the registry never match. Re-running over the same
/// text and registry yields the same sequence.
pub fn bare_references(text: &str, registry: &ProjectRegistry) -> Vec<Issue> {
    let mut issues = Vec::new();
    for code in registry.codes() {
        let Ok(pattern) = Regex::new(&format!(r"({}-(\d+))", regex::escape(code))) else {
            continue;
        };
        for captures in pattern.captures_iter(text) {
            if let Some(digits) = captures.get(2) {
                issues.push(Issue::new(format!("{}-{}", code, digits.as_str())));
            }
        }
    }
    issues
}

/// Scans a commit message for command references, line by line.
///
/// A line is a candidate only when it contains the `#` trigger. The text
/// after the first trigger must start with a registry code followed by `-`;
/// the longest matching code wins. The pattern `<code>-<digits> <rest>`
/// then splits the reference into id and command text. The immediately
/// following line becomes the comment unless it contains a trigger itself.
/// Lines matching no known project yield nothing.
pub fn command_references(message: &str, registry: &ProjectRegistry) -> Vec<CommandReference> {
    let lines: Vec<&str> = message.lines().collect();
    let mut references = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        let Some(trigger) = line.find(COMMAND_TRIGGER) else {
            continue;
        };
        let issue_start = &line[trigger + 1..];

        let Some(project) = registry.match_prefix(issue_start) else {
            continue;
        };

        let comment = lines
            .get(index + 1)
            .filter(|next| !next.contains(COMMAND_TRIGGER))
            .map(|next| next.to_string());

        let Ok(pattern) = Regex::new(&format!(
            r"({}-(\d+)) (.*)",
            regex::escape(&project.short_name)
        )) else {
            continue;
        };
        if let Some(captures) = pattern.captures(issue_start) {
            if let (Some(digits), Some(command)) = (captures.get(2), captures.get(3)) {
                references.push(CommandReference {
                    issue_id: format!("{}-{}", project.short_name, digits.as_str()),
                    command: command.as_str().to_string(),
                    comment,
                });
            }
        }
    }

    references
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
