// SPDX-License-Identifier: Apache-2.0

//! Issue aggregation across repositories.
//!
//! Resolves the repository scope, fans out one open-issue listing per
//! repository, and turns the raw upstream entries into eligible [`Issue`]s:
//! pull requests and assigned issues are dropped, bounty amounts are parsed,
//! and missing author data is defaulted.

use std::collections::HashSet;
use std::sync::LazyLock;

use futures::future::try_join_all;
use regex::Regex;
use tracing::{debug, info, instrument, warn};

use crate::error::RouletteError;
use crate::github::{IssueSource, RepoRef, SourceIssue};
use crate::model::{Author, Issue, RepositoryInfo};

/// Matches `/bounty $<amount>` anywhere in an issue body, case-insensitive.
static BOUNTY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)/bounty\s*\$(\d+)").expect("bounty pattern is a valid regex")
});

/// Which repositories to aggregate over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// Every non-archived repository of an organization.
    Organization(String),
    /// A fixed list of repositories.
    Repositories(Vec<RepoRef>),
}

/// Fetches every eligible open issue in `scope`.
///
/// Per-repository listings run concurrently; the first failure aborts the
/// whole batch and no partial result is returned. Issues are de-duplicated
/// on `(repository, id)`, keeping the first occurrence.
///
/// # Errors
///
/// Returns `RouletteError::GitHub` if any upstream request fails.
#[instrument(skip(source))]
pub async fn fetch_issues(
    source: &dyn IssueSource,
    scope: &Scope,
    bounty_label: &str,
) -> crate::Result<Vec<Issue>> {
    let repos = resolve_repositories(source, scope).await?;
    debug!(repos = repos.len(), "Resolved repository scope");

    let per_repo = try_join_all(repos.iter().map(|repo| async move {
        let issues = source.list_open_issues(&repo.owner, &repo.name).await?;
        Ok::<_, anyhow::Error>((repo, issues))
    }))
    .await
    .map_err(upstream_error)?;

    let mut seen = HashSet::new();
    let mut eligible = Vec::new();
    let mut fetched = 0usize;

    for (repo, issues) in per_repo {
        let info = RepositoryInfo::new(&repo.owner, &repo.name);
        fetched += issues.len();

        for raw in issues.into_iter().filter(is_eligible) {
            let issue = normalize(raw, &info, bounty_label);
            if !seen.insert(issue.key()) {
                warn!(
                    repo = %info.full_name,
                    id = issue.id,
                    "Dropping duplicate issue"
                );
                continue;
            }
            eligible.push(issue);
        }
    }

    info!(
        repos = repos.len(),
        fetched,
        eligible = eligible.len(),
        "Aggregated open issues"
    );

    Ok(eligible)
}

async fn resolve_repositories(
    source: &dyn IssueSource,
    scope: &Scope,
) -> crate::Result<Vec<RepoRef>> {
    match scope {
        Scope::Repositories(repos) => Ok(repos.clone()),
        Scope::Organization(org) => {
            let listed = source
                .list_organization_repositories(org)
                .await
                .map_err(upstream_error)?;

            Ok(listed
                .into_iter()
                .filter(|repo| !repo.archived)
                .map(|repo| RepoRef {
                    owner: org.clone(),
                    name: repo.name,
                })
                .collect())
        }
    }
}

fn upstream_error(err: anyhow::Error) -> RouletteError {
    RouletteError::GitHub {
        message: format!("{err:#}"),
    }
}

/// Returns true for open issues that are neither pull requests nor assigned.
#[must_use]
pub fn is_eligible(issue: &SourceIssue) -> bool {
    !issue.is_pull_request && issue.assignees.is_empty()
}

/// Extracts the dollar amount from the first `/bounty $N` marker in `body`
/// whose amount fits a `u64`.
///
/// Returns `None` when no marker carries a usable amount.
#[must_use]
pub fn parse_bounty_amount(body: &str) -> Option<u64> {
    BOUNTY_PATTERN
        .captures_iter(body)
        .filter_map(|caps| caps.get(1))
        .find_map(|amount| amount.as_str().parse().ok())
}

/// Computes the bounty for an issue.
///
/// Needs both an exact `bounty_label` match and a parseable amount in the
/// body; anything less yields 0.
#[must_use]
pub fn classify_bounty(labels: &[String], body: Option<&str>, bounty_label: &str) -> u64 {
    if !labels.iter().any(|label| label == bounty_label) {
        return 0;
    }
    body.and_then(parse_bounty_amount).unwrap_or(0)
}

/// Converts an upstream entry into the canonical [`Issue`].
#[must_use]
pub fn normalize(raw: SourceIssue, repository: &RepositoryInfo, bounty_label: &str) -> Issue {
    let bounty_amount = classify_bounty(&raw.labels, raw.body.as_deref(), bounty_label);

    let author = raw
        .author
        .map(|a| Author {
            login: a.login,
            avatar_url: a.avatar_url,
        })
        .unwrap_or_default();

    Issue::builder()
        .id(raw.id)
        .title(raw.title)
        .body(raw.body.unwrap_or_default())
        .url(raw.html_url)
        .created_at(raw.created_at)
        .author(author)
        .repository(repository.clone())
        .bounty_amount(bounty_amount)
        .build()
}
