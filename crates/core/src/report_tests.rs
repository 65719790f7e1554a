// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn status_line_formats_applied_and_failed() {
    assert_eq!(
        status_line(true, "command 'fixed'", "ABC-1"),
        "Applied: command 'fixed' for ABC-1"
    );
    assert_eq!(
        status_line(false, "comment", "ABC-2"),
        "FAILED: comment for ABC-2"
    );
}

#[test]
fn write_sink_appends_newlines() {
    let mut buffer: Vec<u8> = Vec::new();
    {
        let mut sink = WriteSink::new(&mut buffer);
        sink.line("first");
        sink.line("second");
    }
    assert_eq!(String::from_utf8(buffer).unwrap(), "first\nsecond\n");
}

#[test]
fn vec_sink_collects_lines() {
    let mut lines: Vec<String> = Vec::new();
    lines.line("only");
    assert_eq!(lines, vec!["only"]);
}
