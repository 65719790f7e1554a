// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core issue and project types.
//!
//! This module contains the fundamental data types: Issue, Project, and
//! ProjectRegistry.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// A single trackable work item, identified by `<ProjectCode>-<Number>`.
///
/// Identity is the id alone: two issues with the same id compare equal no
/// matter which state snapshot each one carries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// Tracker identifier, e.g. `"ABC-12"`.
    pub id: String,
    /// Value of the state field, absent until fetched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl Issue {
    /// Creates a placeholder issue for an id whose state is not yet known.
    pub fn new(id: impl Into<String>) -> Self {
        Issue {
            id: id.into(),
            state: None,
        }
    }

    /// Creates an issue with a known state value.
    pub fn with_state(id: impl Into<String>, state: impl Into<String>) -> Self {
        Issue {
            id: id.into(),
            state: Some(state.into()),
        }
    }

    /// Validates a user-supplied issue id.
    ///
    /// Ids are `<ProjectCode>-<Number>`: an uppercase alphanumeric code
    /// starting with a letter, a dash, and a decimal number. Lowercase
    /// codes and embedded whitespace are rejected.
    pub fn parse(id: &str) -> Result<Issue> {
        let Some((code, number)) = id.split_once('-') else {
            return Err(Error::InvalidIssueId(id.to_string()));
        };
        let code_ok = code.chars().next().is_some_and(|c| c.is_ascii_uppercase())
            && code
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit());
        let number_ok = !number.is_empty() && number.chars().all(|c| c.is_ascii_digit());
        if !code_ok || !number_ok {
            return Err(Error::InvalidIssueId(id.to_string()));
        }
        Ok(Issue::new(id))
    }
}

impl PartialEq for Issue {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Issue {}

impl std::hash::Hash for Issue {
    fn hash<H: std::hash::Hasher>(&self, hasher: &mut H) {
        self.id.hash(hasher);
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// A tracker project, used only as a matching prefix for issue ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Short code uniquely identifying the project, e.g. `"ABC"`.
    pub short_name: String,
}

impl Project {
    /// Creates a project from its short code.
    pub fn new(short_name: impl Into<String>) -> Self {
        Project {
            short_name: short_name.into(),
        }
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name)
    }
}

/// The ordered set of project short codes valid for one scan.
///
/// Captured once per scan and reused across every commit message. An empty
/// registry matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectRegistry {
    projects: Vec<Project>,
}

impl ProjectRegistry {
    /// Creates a registry from projects in tracker order.
    pub fn new(projects: Vec<Project>) -> Self {
        ProjectRegistry { projects }
    }

    /// Creates a registry from short codes.
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ProjectRegistry {
            projects: codes.into_iter().map(Project::new).collect(),
        }
    }

    /// Returns true when the registry holds no projects.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Iterates the short codes in registry order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.projects.iter().map(|p| p.short_name.as_str())
    }

    /// Finds the project whose `<code>-` prefixes `text`.
    ///
    /// When one code is a prefix of another, the longest matching code
    /// wins.
    pub fn match_prefix(&self, text: &str) -> Option<&Project> {
        self.projects
            .iter()
            .filter(|p| {
                text.len() > p.short_name.len()
                    && text.starts_with(p.short_name.as_str())
                    && text.as_bytes()[p.short_name.len()] == b'-'
            })
            .max_by_key(|p| p.short_name.len())
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
