// SPDX-License-Identifier: Apache-2.0

//! Canonical issue records produced by the aggregator.
//!
//! Serialized with camelCase keys (`createdAt`, `bountyAmount`, ...) so the
//! JSON endpoint and the CLI share one shape.

use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Login used when the upstream issue has no author data.
pub const UNKNOWN_AUTHOR: &str = "unknown";

/// Issue author as displayed to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// GitHub login.
    pub login: String,
    /// Avatar image URL, empty when unknown.
    pub avatar_url: String,
}

impl Default for Author {
    fn default() -> Self {
        Self {
            login: UNKNOWN_AUTHOR.to_string(),
            avatar_url: String::new(),
        }
    }
}

/// Repository an issue belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryInfo {
    /// Short repository name (e.g., "core").
    pub name: String,
    /// Owner-qualified name (e.g., "tscircuit/core").
    pub full_name: String,
}

impl RepositoryInfo {
    /// Builds repository info from owner and name.
    #[must_use]
    pub fn new(owner: &str, name: &str) -> Self {
        Self {
            name: name.to_string(),
            full_name: format!("{owner}/{name}"),
        }
    }
}

/// An eligible open issue: not a pull request, unassigned.
///
/// Immutable once built by the aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Upstream issue id.
    pub id: u64,
    /// Issue title.
    pub title: String,
    /// Raw markdown body, empty when the issue has none.
    #[builder(default)]
    pub body: String,
    /// Link to the issue on GitHub.
    pub url: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Issue author.
    #[builder(default)]
    pub author: Author,
    /// Owning repository.
    pub repository: RepositoryInfo,
    /// Bounty in dollars, 0 when the issue carries no bounty.
    #[builder(default)]
    pub bounty_amount: u64,
}

impl Issue {
    /// Returns the key used for duplicate detection and shown-issue tracking.
    #[must_use]
    pub fn key(&self) -> IssueKey {
        IssueKey {
            repository: self.repository.full_name.clone(),
            id: self.id,
        }
    }

    /// Returns true if the issue carries a parsed bounty.
    #[must_use]
    pub fn has_bounty(&self) -> bool {
        self.bounty_amount > 0
    }
}

/// Composite identity of an issue: `(repository full name, id)`.
///
/// Upstream ids are not trusted to be unique across repositories.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IssueKey {
    /// Owner-qualified repository name.
    pub repository: String,
    /// Upstream issue id.
    pub id: u64,
}
