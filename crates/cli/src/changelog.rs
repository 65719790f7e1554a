// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Changelog extraction from git.
//!
//! Shells out to `git log` with unit-separator delimited fields so commit
//! messages can carry any text, including blank lines.

use std::path::Path;
use std::process::Command;

use tl_core::ChangeEntry;

use crate::error::{Error, Result};

/// Field separator within one formatted entry (ASCII unit separator).
const FIELD_SEP: char = '\u{1f}';
/// Separator between formatted entries (ASCII record separator).
const ENTRY_SEP: char = '\u{1e}';

/// Reads the changelog for a revision range from a git repository.
///
/// Entries come back oldest first so commands apply in commit order.
pub fn read_changelog(repo: &Path, range: &str) -> Result<Vec<ChangeEntry>> {
    let output = Command::new("git")
        .current_dir(repo)
        .args(["log", "--reverse", "--format=%an%x1f%ae%x1f%B%x1e", range])
        .output()
        .map_err(|e| Error::Git(format!("failed to run git: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::Git(stderr.trim().to_string()));
    }

    Ok(parse_log(&String::from_utf8_lossy(&output.stdout)))
}

/// Splits formatted `git log` output into entries.
fn parse_log(text: &str) -> Vec<ChangeEntry> {
    text.split(ENTRY_SEP)
        .filter_map(|chunk| {
            let chunk = chunk.trim_start_matches('\n');
            let mut fields = chunk.splitn(3, FIELD_SEP);
            let author = fields.next()?.trim();
            let email = fields.next()?.trim();
            let message = fields.next()?.trim_end();
            if author.is_empty() && message.is_empty() {
                return None;
            }
            let mut entry = ChangeEntry::new(author, message);
            if !email.is_empty() {
                entry.email = Some(email.to_string());
            }
            Some(entry)
        })
        .collect()
}

#[cfg(test)]
#[path = "changelog_tests.rs"]
mod tests;
