// SPDX-License-Identifier: Apache-2.0

//! Octocrab-backed [`IssueSource`].
//!
//! Each listing fetches the first page and then follows `next` links with
//! [`Octocrab::all_pages`], so pages for a single repository are requested
//! sequentially.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use octocrab::{Octocrab, params};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument};

use super::{IssueSource, SourceAuthor, SourceIssue, SourceRepository};
use crate::config::GitHubConfig;

/// Creates an authenticated Octocrab client using a provided token.
///
/// # Arguments
///
/// * `token` - GitHub API token as a `SecretString`
/// * `timeout` - Connect and read timeout applied to every request
///
/// # Errors
///
/// Returns an error if the Octocrab client cannot be built.
#[instrument(skip(token))]
pub fn create_client_with_token(token: &SecretString, timeout: Duration) -> Result<Octocrab> {
    let client = Octocrab::builder()
        .personal_token(token.expose_secret().to_string())
        .set_connect_timeout(Some(timeout))
        .set_read_timeout(Some(timeout))
        .build()
        .context("Failed to build GitHub client")?;

    debug!("Created authenticated GitHub client");
    Ok(client)
}

/// Issue source reading from the GitHub REST API.
pub struct OctocrabSource {
    client: Octocrab,
    per_page: u8,
}

impl OctocrabSource {
    /// Wraps an authenticated client.
    #[must_use]
    pub fn new(client: Octocrab, per_page: u8) -> Self {
        Self { client, per_page }
    }
}

#[async_trait]
impl IssueSource for OctocrabSource {
    #[instrument(skip(self))]
    async fn list_organization_repositories(&self, org: &str) -> Result<Vec<SourceRepository>> {
        let first_page = self
            .client
            .orgs(org)
            .list_repos()
            .per_page(self.per_page)
            .send()
            .await
            .with_context(|| format!("Failed to list repositories for {org}"))?;

        let repos = self
            .client
            .all_pages(first_page)
            .await
            .with_context(|| format!("Failed to page through repositories for {org}"))?;

        debug!(count = repos.len(), "Listed organization repositories");

        Ok(repos
            .into_iter()
            .map(|repo| SourceRepository {
                name: repo.name,
                archived: repo.archived.unwrap_or(false),
            })
            .collect())
    }

    #[instrument(skip(self))]
    async fn list_open_issues(&self, owner: &str, repo: &str) -> Result<Vec<SourceIssue>> {
        let first_page = self
            .client
            .issues(owner, repo)
            .list()
            .state(params::State::Open)
            .per_page(self.per_page)
            .send()
            .await
            .with_context(|| format!("Failed to list issues for {owner}/{repo}"))?;

        let issues = self
            .client
            .all_pages(first_page)
            .await
            .with_context(|| format!("Failed to page through issues for {owner}/{repo}"))?;

        debug!(count = issues.len(), "Listed open issues");

        Ok(issues.into_iter().map(to_source_issue).collect())
    }
}

fn to_source_issue(issue: octocrab::models::issues::Issue) -> SourceIssue {
    // Deleted accounts come back with an empty login.
    let author = (!issue.user.login.is_empty()).then(|| SourceAuthor {
        login: issue.user.login.clone(),
        avatar_url: issue.user.avatar_url.to_string(),
    });

    SourceIssue {
        id: issue.id.0,
        title: issue.title,
        body: issue.body,
        html_url: issue.html_url.to_string(),
        created_at: issue.created_at,
        author,
        assignees: issue.assignees.into_iter().map(|a| a.login).collect(),
        is_pull_request: issue.pull_request.is_some(),
        labels: issue.labels.into_iter().map(|l| l.name).collect(),
    }
}

/// Builds an [`IssueSource`] once a token has been validated.
pub trait Connector: Send + Sync {
    /// Connects to the issue tracker with `token`.
    fn connect(&self, token: &SecretString, config: &GitHubConfig) -> Result<Box<dyn IssueSource>>;
}

/// Connects to the GitHub REST API through octocrab.
#[derive(Debug, Clone, Copy, Default)]
pub struct OctocrabConnector;

impl Connector for OctocrabConnector {
    fn connect(&self, token: &SecretString, config: &GitHubConfig) -> Result<Box<dyn IssueSource>> {
        let client =
            create_client_with_token(token, Duration::from_secs(config.api_timeout_seconds))?;
        Ok(Box::new(OctocrabSource::new(client, config.page_size())))
    }
}
