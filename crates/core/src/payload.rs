// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Streaming decode of tracker response payloads.
//!
//! The tracker answers with XML. [`events_from_xml`] tokenizes a payload
//! into structural events; [`parse_issue_payload`] folds an event stream
//! describing one issue record into an [`Issue`].

use crate::error::{Error, Result};
use crate::issue::Issue;

/// Field name used when the configured state field is unset or empty.
pub const DEFAULT_STATE_FIELD: &str = "State";

/// One structural event of a response payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadEvent {
    /// Element open with its attributes in document order.
    Open {
        tag: String,
        attrs: Vec<(String, String)>,
    },
    /// Character data between elements.
    Text(String),
    /// Element close.
    Close { tag: String },
}

impl PayloadEvent {
    /// Builds an element-open event.
    pub fn open(tag: &str, attrs: &[(&str, &str)]) -> Self {
        PayloadEvent::Open {
            tag: tag.to_string(),
            attrs: attrs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Builds a character-data event.
    pub fn text(text: &str) -> Self {
        PayloadEvent::Text(text.to_string())
    }

    /// Builds an element-close event.
    pub fn close(tag: &str) -> Self {
        PayloadEvent::Close {
            tag: tag.to_string(),
        }
    }

    /// Attribute value of an element-open event.
    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            PayloadEvent::Open { attrs, .. } => attrs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str()),
            _ => None,
        }
    }
}

/// Decodes one issue record from a payload event stream.
///
/// The issue id comes from the `id` attribute of the `issue` element. The
/// state is the accumulated text of the `value` element belonging to the
/// field named `state_field` (`"State"` when empty). The scratch text
/// buffer resets at the start of every element; when the same field carries
/// several values, the last one wins. A field that never appears leaves the
/// state absent, which is not an error.
///
/// Returns `None` when the stream carries no issue record at all.
pub fn parse_issue_payload<I>(events: I, state_field: &str) -> Option<Issue>
where
    I: IntoIterator<Item = PayloadEvent>,
{
    let target = if state_field.is_empty() {
        DEFAULT_STATE_FIELD
    } else {
        state_field
    };

    let mut issue: Option<Issue> = None;
    let mut current_field: Option<String> = None;
    let mut scratch = String::new();

    for event in events {
        match &event {
            PayloadEvent::Open { tag, .. } => {
                scratch.clear();
                if tag == "issue" {
                    if let Some(id) = event.attr("id") {
                        issue = Some(Issue::new(id));
                    }
                } else if tag == "field" {
                    current_field = event.attr("name").map(str::to_string);
                }
            }
            PayloadEvent::Text(text) => scratch.push_str(text),
            PayloadEvent::Close { tag } => {
                if tag == "value" && current_field.as_deref() == Some(target) {
                    if let Some(issue) = issue.as_mut() {
                        issue.state = Some(scratch.clone());
                    }
                }
            }
        }
    }

    issue
}

/// Tokenizes an XML payload into structural events.
///
/// Covers the subset the tracker emits: elements with quoted attributes,
/// character data with the five predefined entities, self-closing elements,
/// and skippable prolog, doctype and comment sections.
pub fn events_from_xml(text: &str) -> Result<Vec<PayloadEvent>> {
    let mut events = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix("<!--") {
            let end = after
                .find("-->")
                .ok_or_else(|| Error::InvalidPayload("unterminated comment".to_string()))?;
            rest = &after[end + 3..];
        } else if let Some(after) = rest.strip_prefix("<?") {
            let end = after
                .find("?>")
                .ok_or_else(|| Error::InvalidPayload("unterminated prolog".to_string()))?;
            rest = &after[end + 2..];
        } else if let Some(after) = rest.strip_prefix("<!") {
            let end = after
                .find('>')
                .ok_or_else(|| Error::InvalidPayload("unterminated doctype".to_string()))?;
            rest = &after[end + 1..];
        } else if let Some(after) = rest.strip_prefix('<') {
            let end = after
                .find('>')
                .ok_or_else(|| Error::InvalidPayload("unterminated element".to_string()))?;
            push_element_events(after[..end].trim(), &mut events)?;
            rest = &after[end + 1..];
        } else {
            let end = rest.find('<').unwrap_or(rest.len());
            let chunk = &rest[..end];
            if !chunk.trim().is_empty() {
                events.push(PayloadEvent::Text(decode_entities(chunk)));
            }
            rest = &rest[end..];
        }
    }

    Ok(events)
}

/// Turns the inside of one `<...>` bracket into open/close events.
fn push_element_events(inner: &str, events: &mut Vec<PayloadEvent>) -> Result<()> {
    if inner.is_empty() {
        return Err(Error::InvalidPayload("empty element".to_string()));
    }

    if let Some(tag) = inner.strip_prefix('/') {
        events.push(PayloadEvent::Close {
            tag: tag.trim().to_string(),
        });
        return Ok(());
    }

    let self_closing = inner.ends_with('/');
    let inner = inner.strip_suffix('/').unwrap_or(inner).trim_end();
    let (tag, attr_text) = match inner.find(char::is_whitespace) {
        Some(split) => (&inner[..split], &inner[split..]),
        None => (inner, ""),
    };
    if tag.is_empty() {
        return Err(Error::InvalidPayload("element without a tag".to_string()));
    }

    events.push(PayloadEvent::Open {
        tag: tag.to_string(),
        attrs: parse_attrs(attr_text)?,
    });
    if self_closing {
        events.push(PayloadEvent::Close {
            tag: tag.to_string(),
        });
    }
    Ok(())
}

/// Parses `name="value"` pairs, in document order.
fn parse_attrs(text: &str) -> Result<Vec<(String, String)>> {
    let mut attrs = Vec::new();
    let mut rest = text.trim_start();

    while !rest.is_empty() {
        let eq = rest
            .find('=')
            .ok_or_else(|| Error::InvalidPayload(format!("attribute without value: '{}'", rest)))?;
        let name = rest[..eq].trim_end();
        rest = rest[eq + 1..].trim_start();

        let quote = rest
            .chars()
            .next()
            .filter(|c| *c == '"' || *c == '\'')
            .ok_or_else(|| Error::InvalidPayload(format!("unquoted attribute: '{}'", name)))?;
        let value_end = rest[1..]
            .find(quote)
            .ok_or_else(|| Error::InvalidPayload(format!("unterminated attribute: '{}'", name)))?;
        attrs.push((name.to_string(), decode_entities(&rest[1..value_end + 1])));
        rest = rest[value_end + 2..].trim_start();
    }

    Ok(attrs)
}

/// Replaces the five predefined entities. Unknown entities pass through.
fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
#[path = "payload_tests.rs"]
mod tests;
