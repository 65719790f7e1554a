// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn settings_default_to_everything_disabled() {
    let settings = BuildSettings::default();
    assert!(!settings.comments_enabled);
    assert!(!settings.commands_enabled);
    assert!(!settings.run_as_enabled);
    assert!(!settings.silent_commands);
    assert!(!settings.silent_links);
    assert_eq!(settings.link_visibility, None);
    assert_eq!(settings.state_field, "State");
    assert_eq!(settings.fixed_values, vec!["Fixed".to_string()]);
}

#[test]
fn deserializing_an_empty_document_yields_the_defaults() {
    let settings: BuildSettings = serde_json::from_str("{}").unwrap();
    assert_eq!(settings, BuildSettings::default());
}

#[test]
fn is_resolved_state_checks_the_configured_values() {
    let mut settings = BuildSettings::default();
    assert!(settings.is_resolved_state("Fixed"));
    assert!(!settings.is_resolved_state("fixed"));
    assert!(!settings.is_resolved_state("Open"));

    settings.fixed_values = vec!["Done".to_string(), "Verified".to_string()];
    assert!(settings.is_resolved_state("Verified"));
    assert!(!settings.is_resolved_state("Fixed"));
}
