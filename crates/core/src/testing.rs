// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scripted tracker double shared by the core tests.

#![allow(clippy::unwrap_used)]

use std::cell::RefCell;
use std::collections::HashMap;

use crate::dispatch::CommandRequest;
use crate::error::{Error, Result};
use crate::issue::{Issue, Project};
use crate::transport::{Tracker, User};

/// In-memory tracker whose responses are scripted per test.
///
/// Fetches consume state snapshots front to back per issue id, so a test
/// scripts exactly the before/after sequence it expects; an exhausted or
/// missing queue reads as "issue not found". `None` entries script a
/// failed fetch.
#[derive(Default)]
pub(crate) struct ScriptedTracker {
    projects: Vec<Project>,
    states: RefCell<HashMap<String, Vec<Option<String>>>>,
    users: HashMap<String, String>,
    search_results: Vec<Issue>,
    fail_commands_for: Vec<String>,
    fail_comments: bool,
    fail_bundle: bool,
    fail_user_lookup: bool,
    pub applied: RefCell<Vec<CommandRequest>>,
    pub comments: RefCell<Vec<(String, String, Option<String>, bool)>>,
    pub created: RefCell<Vec<(String, String, String, Option<String>)>>,
    pub bundle_adds: RefCell<Vec<(String, String)>>,
    pub searches: RefCell<Vec<String>>,
    pub fetched_fields: RefCell<Vec<String>>,
}

impl ScriptedTracker {
    pub fn new() -> Self {
        ScriptedTracker::default()
    }

    pub fn with_project(mut self, code: &str) -> Self {
        self.projects.push(Project::new(code));
        self
    }

    pub fn with_states(self, id: &str, states: &[Option<&str>]) -> Self {
        self.states.borrow_mut().insert(
            id.to_string(),
            states.iter().map(|s| s.map(str::to_string)).collect(),
        );
        self
    }

    pub fn with_user(mut self, email: &str, login: &str) -> Self {
        self.users.insert(email.to_string(), login.to_string());
        self
    }

    pub fn with_search_results(mut self, ids: &[&str]) -> Self {
        self.search_results = ids.iter().map(|id| Issue::new(*id)).collect();
        self
    }

    pub fn failing_command(mut self, id: &str) -> Self {
        self.fail_commands_for.push(id.to_string());
        self
    }

    pub fn failing_comments(mut self) -> Self {
        self.fail_comments = true;
        self
    }

    pub fn failing_bundle(mut self) -> Self {
        self.fail_bundle = true;
        self
    }

    pub fn failing_user_lookup(mut self) -> Self {
        self.fail_user_lookup = true;
        self
    }
}

impl Tracker for ScriptedTracker {
    fn projects(&self) -> Result<Vec<Project>> {
        Ok(self.projects.clone())
    }

    fn fetch_issue(&self, id: &str, state_field: &str) -> Result<Option<Issue>> {
        self.fetched_fields
            .borrow_mut()
            .push(state_field.to_string());
        let mut states = self.states.borrow_mut();
        let Some(queue) = states.get_mut(id) else {
            return Ok(None);
        };
        if queue.is_empty() {
            return Ok(None);
        }
        Ok(queue.remove(0).map(|state| Issue::with_state(id, state)))
    }

    fn apply_command(&self, request: &CommandRequest) -> Result<()> {
        self.applied.borrow_mut().push(request.clone());
        if self.fail_commands_for.contains(&request.issue_id) {
            return Err(Error::Transport("scripted command failure".to_string()));
        }
        Ok(())
    }

    fn post_comment(
        &self,
        issue_id: &str,
        text: &str,
        visibility: Option<&str>,
        silent: bool,
    ) -> Result<()> {
        self.comments.borrow_mut().push((
            issue_id.to_string(),
            text.to_string(),
            visibility.map(str::to_string),
            silent,
        ));
        if self.fail_comments {
            return Err(Error::Transport("scripted comment failure".to_string()));
        }
        Ok(())
    }

    fn user_by_email(&self, email: &str) -> Result<Option<User>> {
        if self.fail_user_lookup {
            return Err(Error::Transport("scripted lookup failure".to_string()));
        }
        Ok(self.users.get(email).map(|login| User::new(login.as_str())))
    }

    fn search(&self, query: &str) -> Result<Vec<Issue>> {
        self.searches.borrow_mut().push(query.to_string());
        Ok(self.search_results.clone())
    }

    fn create_issue(
        &self,
        project: &str,
        summary: &str,
        description: &str,
        command: Option<&str>,
    ) -> Result<Issue> {
        self.created.borrow_mut().push((
            project.to_string(),
            summary.to_string(),
            description.to_string(),
            command.map(str::to_string),
        ));
        Ok(Issue::new(format!("{}-1", project)))
    }

    fn add_build_to_bundle(&self, bundle: &str, build: &str) -> Result<()> {
        self.bundle_adds
            .borrow_mut()
            .push((bundle.to_string(), build.to_string()));
        if self.fail_bundle {
            return Err(Error::Transport("scripted bundle failure".to_string()));
        }
        Ok(())
    }
}
