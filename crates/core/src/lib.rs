// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tl-core: changelog to issue-tracker integration pipeline.
//!
//! This crate provides the core behind the `tl` CLI: scanning commit
//! messages for issue references, applying tracker commands through a
//! transport collaborator, and detecting which issues transitioned into a
//! resolved state while doing so.
//!
//! # Main Components
//!
//! - [`Pipeline`] - one changelog scan per build
//! - [`scan`] - issue reference extraction from free text and messages
//! - [`payload`] - streaming decode of tracker response payloads
//! - [`Dispatcher`] / [`resolve::ResolutionDetector`] - per-issue command
//!   dispatch and before/after resolution classification
//! - [`Tracker`] - the outbound transport boundary
//! - [`Error`] - error types for all operations

pub mod batch;
pub mod bundle;
pub mod changelog;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod failure;
pub mod issue;
pub mod payload;
pub mod pipeline;
pub mod report;
pub mod resolve;
pub mod scan;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use changelog::ChangeEntry;
pub use config::{BuildSettings, SiteConfig};
pub use dispatch::{CommandOutcome, CommandRequest, Dispatcher};
pub use error::{Error, Result};
pub use issue::{Issue, Project, ProjectRegistry};
pub use pipeline::{Pipeline, ResolvedIssueSet};
pub use report::{ReportSink, WriteSink};
pub use transport::{Tracker, User};
