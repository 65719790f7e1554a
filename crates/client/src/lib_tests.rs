// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    bare_host = { "https://youtrack.example.com", "https://youtrack.example.com/rest/user/login" },
    trailing_slash = { "https://youtrack.example.com/", "https://youtrack.example.com/rest/user/login" },
    context_path = { "https://example.com/youtrack", "https://example.com/youtrack/rest/user/login" },
)]
fn join_handles_base_url_shapes(base: &str, expected: &str) {
    assert_eq!(join(base, "rest/user/login"), expected);
}

#[test]
fn bundle_url_encodes_segment_names() {
    let url = bundle_url("https://example.com", "Nightly Builds", "42 (tagged)").unwrap();
    assert_eq!(
        url.as_str(),
        "https://example.com/rest/admin/customfield/buildBundle/Nightly%20Builds/42%20(tagged)"
    );
}

#[test]
fn bundle_url_respects_a_context_path() {
    let url = bundle_url("https://example.com/youtrack/", "b", "1").unwrap();
    assert_eq!(
        url.as_str(),
        "https://example.com/youtrack/rest/admin/customfield/buildBundle/b/1"
    );
}
