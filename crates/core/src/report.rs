// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-operation report lines.
//!
//! Every attempted tracker operation produces one user-visible line of the
//! form `<status>: <action> for <issue id>`, handed to a sink owned by the
//! caller. The core itself never writes to a terminal or file.

use std::io::Write;

/// Receives one report line per attempted operation.
pub trait ReportSink {
    /// Records a single report line.
    fn line(&mut self, text: &str);
}

impl ReportSink for Vec<String> {
    fn line(&mut self, text: &str) {
        self.push(text.to_string());
    }
}

/// Sink that writes each line to an [`std::io::Write`] target.
pub struct WriteSink<W: Write> {
    writer: W,
}

impl<W: Write> WriteSink<W> {
    /// Wraps a writer.
    pub fn new(writer: W) -> Self {
        WriteSink { writer }
    }
}

impl<W: Write> ReportSink for WriteSink<W> {
    fn line(&mut self, text: &str) {
        // A report line that cannot be written has nowhere else to go.
        let _ = writeln!(self.writer, "{}", text);
    }
}

/// Formats the standard applied/failed line for an action on an issue.
pub fn status_line(success: bool, action: &str, issue_id: &str) -> String {
    let status = if success { "Applied" } else { "FAILED" };
    format!("{}: {} for {}", status, action, issue_id)
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
