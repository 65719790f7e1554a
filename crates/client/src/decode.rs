// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Decoding of list-shaped tracker responses.
//!
//! Single-issue payloads go through `tl_core::payload`; the list responses
//! here only need one attribute per entry element.

use tl_core::issue::{Issue, Project};
use tl_core::payload::{events_from_xml, PayloadEvent};
use tl_core::transport::User;
use tl_core::Result;

/// Reads `<project shortName="..">` entries from a project list payload.
pub(crate) fn projects(body: &str) -> Result<Vec<Project>> {
    Ok(attribute_values(body, "project", "shortName")?
        .into_iter()
        .map(Project::new)
        .collect())
}

/// Reads `<issue id="..">` entries from a search result payload.
pub(crate) fn issues(body: &str) -> Result<Vec<Issue>> {
    Ok(attribute_values(body, "issue", "id")?
        .into_iter()
        .map(Issue::new)
        .collect())
}

/// Reads `<user login="..">` entries from a user search payload.
pub(crate) fn users(body: &str) -> Result<Vec<User>> {
    Ok(attribute_values(body, "user", "login")?
        .into_iter()
        .map(User::new)
        .collect())
}

/// Collects one attribute from every element with the given tag.
fn attribute_values(body: &str, tag: &str, attr: &str) -> Result<Vec<String>> {
    let mut values = Vec::new();
    for event in events_from_xml(body)? {
        if let PayloadEvent::Open { tag: open_tag, .. } = &event {
            if open_tag == tag {
                if let Some(value) = event.attr(attr) {
                    values.push(value.to_string());
                }
            }
        }
    }
    Ok(values)
}

#[cfg(test)]
#[path = "decode_tests.rs"]
mod tests;
