// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tl-client: blocking HTTP transport to the tracker's REST interface.
//!
//! One session per invocation: [`Client::new`] followed by
//! [`Client::login`] yields a [`Session`] that implements
//! [`tl_core::Tracker`] and is passed by reference into the core
//! operations. The session cookie is captured by the cookie store at login
//! and rides along on every later request.

mod decode;

use reqwest::blocking::{Client as HttpClient, Response};
use reqwest::StatusCode;

use tl_core::config::SiteConfig;
use tl_core::dispatch::CommandRequest;
use tl_core::issue::{Issue, Project};
use tl_core::payload::{events_from_xml, parse_issue_payload};
use tl_core::transport::{Tracker, User};
use tl_core::{Error, Result};

/// Connection to one tracker site, not yet authenticated.
pub struct Client {
    site: SiteConfig,
    http: HttpClient,
}

impl Client {
    /// Builds a client for the site.
    pub fn new(site: SiteConfig) -> Result<Client> {
        let http = HttpClient::builder()
            .cookie_store(true)
            .build()
            .map_err(transport_error)?;
        Ok(Client { site, http })
    }

    /// Logs in with the site credentials, yielding an authenticated
    /// session.
    pub fn login(self) -> Result<Session> {
        let url = join(&self.site.url, "rest/user/login");
        tracing::debug!(url = %url, user = %self.site.username, "logging in");
        let response = self
            .http
            .post(&url)
            .form(&[
                ("login", self.site.username.as_str()),
                ("password", self.site.password.as_str()),
            ])
            .send()
            .map_err(transport_error)?;
        if !response.status().is_success() {
            return Err(Error::Login(self.site.username.clone()));
        }
        Ok(Session {
            site: self.site,
            http: self.http,
        })
    }
}

/// An authenticated tracker session.
pub struct Session {
    site: SiteConfig,
    http: HttpClient,
}

impl Session {
    fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<String> {
        let url = join(&self.site.url, path);
        tracing::debug!(url = %url, "GET");
        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .map_err(transport_error)?;
        read_body(response)
    }

    fn execute(&self, issue_id: &str, form: &[(&str, String)]) -> Result<()> {
        let url = join(&self.site.url, &format!("rest/issue/{}/execute", issue_id));
        tracing::debug!(url = %url, "POST");
        let response = self
            .http
            .post(&url)
            .form(form)
            .send()
            .map_err(transport_error)?;
        read_body(response).map(|_| ())
    }
}

impl Tracker for Session {
    fn projects(&self) -> Result<Vec<Project>> {
        let body = self.get("rest/project/all", &[])?;
        decode::projects(&body)
    }

    fn fetch_issue(&self, id: &str, state_field: &str) -> Result<Option<Issue>> {
        let url = join(&self.site.url, &format!("rest/issue/{}", id));
        tracing::debug!(url = %url, "GET");
        let response = self.http.get(&url).send().map_err(transport_error)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let body = read_body(response)?;
        Ok(parse_issue_payload(events_from_xml(&body)?, state_field))
    }

    fn apply_command(&self, request: &CommandRequest) -> Result<()> {
        let mut form: Vec<(&str, String)> = vec![("command", request.command.clone())];
        if let Some(comment) = &request.comment {
            form.push(("comment", comment.clone()));
        }
        if let Some(user) = &request.run_as {
            form.push(("runAs", user.login.clone()));
        }
        if request.silent {
            form.push(("disableNotifications", "true".to_string()));
        }
        self.execute(&request.issue_id, &form)
    }

    fn post_comment(
        &self,
        issue_id: &str,
        text: &str,
        visibility: Option<&str>,
        silent: bool,
    ) -> Result<()> {
        let mut form: Vec<(&str, String)> = vec![("comment", text.to_string())];
        if let Some(group) = visibility {
            form.push(("group", group.to_string()));
        }
        if silent {
            form.push(("disableNotifications", "true".to_string()));
        }
        self.execute(issue_id, &form)
    }

    fn user_by_email(&self, email: &str) -> Result<Option<User>> {
        let body = self.get("rest/admin/user", &[("q", email)])?;
        Ok(decode::users(&body)?.into_iter().next())
    }

    fn search(&self, query: &str) -> Result<Vec<Issue>> {
        let body = self.get("rest/issue", &[("filter", query)])?;
        decode::issues(&body)
    }

    fn create_issue(
        &self,
        project: &str,
        summary: &str,
        description: &str,
        command: Option<&str>,
    ) -> Result<Issue> {
        let url = join(&self.site.url, "rest/issue");
        tracing::debug!(url = %url, project = %project, "PUT");
        let response = self
            .http
            .put(&url)
            .query(&[
                ("project", project),
                ("summary", summary),
                ("description", description),
            ])
            .send()
            .map_err(transport_error)?;
        let status = response.status();
        // The created issue's id only appears in the Location header.
        let id = response
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|location| location.rsplit('/').next())
            .map(str::to_string);
        if !status.is_success() {
            return Err(Error::Transport(format!("create issue failed: {}", status)));
        }
        let id = id.ok_or_else(|| {
            Error::InvalidPayload("create issue response carried no location".to_string())
        })?;

        let issue = Issue::new(id);
        if let Some(command) = command {
            self.apply_command(&CommandRequest::new(issue.id.as_str(), command))?;
        }
        Ok(issue)
    }

    fn add_build_to_bundle(&self, bundle: &str, build: &str) -> Result<()> {
        let url = bundle_url(&self.site.url, bundle, build)?;
        tracing::debug!(url = %url, "PUT");
        let response = self.http.put(url).send().map_err(transport_error)?;
        read_body(response).map(|_| ())
    }
}

/// Joins the site base URL with a relative REST path.
fn join(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path)
}

/// Builds the build-bundle URL, percent-encoding bundle and build names.
fn bundle_url(base: &str, bundle: &str, build: &str) -> Result<reqwest::Url> {
    let mut url = reqwest::Url::parse(base).map_err(|e| Error::Transport(e.to_string()))?;
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| Error::Transport(format!("site url is not a valid base: {}", base)))?;
        segments.pop_if_empty();
        segments.extend(["rest", "admin", "customfield", "buildBundle", bundle, build]);
    }
    Ok(url)
}

fn transport_error(error: reqwest::Error) -> Error {
    Error::Transport(error.to_string())
}

/// Reads a response body, mapping non-success statuses to transport errors.
fn read_body(response: Response) -> Result<String> {
    let status = response.status();
    let body = response.text().map_err(transport_error)?;
    if status.is_success() {
        Ok(body)
    } else {
        let detail: String = body.trim().chars().take(200).collect();
        Err(Error::Transport(format!("{}: {}", status, detail)))
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
