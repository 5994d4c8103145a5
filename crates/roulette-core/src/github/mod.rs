// SPDX-License-Identifier: Apache-2.0

//! GitHub integration module.
//!
//! Defines the upstream records and the [`IssueSource`] seam the aggregator
//! reads through. [`client::OctocrabSource`] is the production implementation.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod client;

/// A repository reference in `owner/name` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoRef {
    /// Repository owner (user or organization).
    pub owner: String,
    /// Repository name.
    pub name: String,
}

impl RepoRef {
    /// Returns the full repository name in "owner/name" format.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl std::fmt::Display for RepoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Parses an owner/repo string into a [`RepoRef`].
///
/// Validates format: exactly one `/`, non-empty parts.
///
/// # Errors
///
/// Returns an error if the format is invalid.
pub fn parse_owner_repo(s: &str) -> Result<RepoRef> {
    let parts: Vec<&str> = s.trim().split('/').collect();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        anyhow::bail!(
            "Invalid owner/repo format.\n\
             Expected: owner/repo\n\
             Got: {s}"
        );
    }
    Ok(RepoRef {
        owner: parts[0].to_string(),
        name: parts[1].to_string(),
    })
}

/// A repository as listed for an organization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRepository {
    /// Repository name.
    pub name: String,
    /// Whether the repository is archived.
    pub archived: bool,
}

/// Author data attached to an upstream issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceAuthor {
    /// GitHub login.
    pub login: String,
    /// Avatar URL.
    pub avatar_url: String,
}

/// An open issue (or pull request) exactly as the tracker reports it.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceIssue {
    /// Upstream id.
    pub id: u64,
    /// Issue title.
    pub title: String,
    /// Markdown body, if any.
    pub body: Option<String>,
    /// Link to the issue page.
    pub html_url: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Author, if the tracker reported one.
    pub author: Option<SourceAuthor>,
    /// Logins of the assignees.
    pub assignees: Vec<String>,
    /// True when the entry is a pull request.
    pub is_pull_request: bool,
    /// Label names.
    pub labels: Vec<String>,
}

/// Read-only access to an issue tracker.
///
/// Both listings must follow pagination until exhausted.
#[async_trait]
pub trait IssueSource: Send + Sync {
    /// Lists every repository in an organization.
    async fn list_organization_repositories(&self, org: &str) -> Result<Vec<SourceRepository>>;

    /// Lists every open issue (pull requests included) of a repository.
    async fn list_open_issues(&self, owner: &str, repo: &str) -> Result<Vec<SourceIssue>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_owner_repo_valid() {
        let repo = parse_owner_repo("tscircuit/core").unwrap();
        assert_eq!(repo.owner, "tscircuit");
        assert_eq!(repo.name, "core");
        assert_eq!(repo.full_name(), "tscircuit/core");
    }

    #[test]
    fn test_parse_owner_repo_trims_whitespace() {
        let repo = parse_owner_repo("  tscircuit/cli ").unwrap();
        assert_eq!(repo.to_string(), "tscircuit/cli");
    }

    #[test]
    fn test_parse_owner_repo_invalid_no_slash() {
        assert!(parse_owner_repo("tscircuit").is_err());
    }

    #[test]
    fn test_parse_owner_repo_invalid_empty_owner() {
        assert!(parse_owner_repo("/repo").is_err());
    }

    #[test]
    fn test_parse_owner_repo_invalid_empty_repo() {
        assert!(parse_owner_repo("owner/").is_err());
    }

    #[test]
    fn test_parse_owner_repo_invalid_extra_segment() {
        assert!(parse_owner_repo("a/b/c").is_err());
    }
}
