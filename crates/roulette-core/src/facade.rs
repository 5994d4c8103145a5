// SPDX-License-Identifier: Apache-2.0

//! Platform-agnostic facade functions for CLI and server integration.
//!
//! Each entry point validates the credential first, so a missing or
//! placeholder token fails before any request is sent.

use std::time::Instant;

use chrono::Utc;
use tracing::{info, instrument};

use crate::aggregate;
use crate::auth::{TokenProvider, validate_token};
use crate::config::RouletteConfig;
use crate::error::RouletteError;
use crate::github::client::{Connector, OctocrabConnector};
use crate::model::Issue;
use crate::ranking::RankedSets;

/// Fetches every eligible open issue for the configured scope.
///
/// # Errors
///
/// Returns an error if:
/// - the token is missing or a placeholder (`NotAuthenticated`)
/// - a configured repository is malformed
/// - any GitHub request fails
pub async fn fetch_issues(
    provider: &dyn TokenProvider,
    config: &RouletteConfig,
) -> crate::Result<Vec<Issue>> {
    fetch_issues_with(provider, &OctocrabConnector, config).await
}

/// Like [`fetch_issues`], with a caller-supplied connector.
#[instrument(skip_all, fields(org = %config.github.org, repos = config.github.repos.len()))]
pub async fn fetch_issues_with(
    provider: &dyn TokenProvider,
    connector: &dyn Connector,
    config: &RouletteConfig,
) -> crate::Result<Vec<Issue>> {
    let token = validate_token(provider.github_token())?;
    let scope = config.scope()?;

    let source = connector
        .connect(&token, &config.github)
        .map_err(|e| RouletteError::GitHub {
            message: format!("{e:#}"),
        })?;

    let start = Instant::now();
    let issues = aggregate::fetch_issues(source.as_ref(), &scope, &config.github.bounty_label).await?;

    info!(
        eligible = issues.len(),
        duration_ms = start.elapsed().as_millis(),
        "Fetched issues"
    );

    Ok(issues)
}

/// Fetches eligible issues and computes every ranked set.
///
/// # Errors
///
/// Same as [`fetch_issues`].
pub async fn fetch_ranked(
    provider: &dyn TokenProvider,
    config: &RouletteConfig,
) -> crate::Result<RankedSets> {
    fetch_ranked_with(provider, &OctocrabConnector, config).await
}

/// Like [`fetch_ranked`], with a caller-supplied connector.
pub async fn fetch_ranked_with(
    provider: &dyn TokenProvider,
    connector: &dyn Connector,
    config: &RouletteConfig,
) -> crate::Result<RankedSets> {
    let issues = fetch_issues_with(provider, connector, config).await?;
    let mut rng = fastrand::Rng::new();
    Ok(RankedSets::build(&issues, Utc::now(), &mut rng))
}
