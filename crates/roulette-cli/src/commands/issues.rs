// SPDX-License-Identifier: Apache-2.0

//! List a ranked set of issues.

use anyhow::Result;
use roulette_core::{FilterMode, RankedSets, RouletteConfig, fetch_ranked};
use tracing::debug;

use super::types::IssuesResult;
use crate::provider::CliTokenProvider;

/// Fetches and ranks issues for the configured scope.
pub async fn fetch_sets(config: &RouletteConfig) -> Result<RankedSets> {
    let sets = fetch_ranked(&CliTokenProvider, config).await?;
    Ok(sets)
}

/// Fetches issues and returns the ranked set for `filter`.
pub async fn run(config: &RouletteConfig, filter: FilterMode) -> Result<IssuesResult> {
    let sets = fetch_sets(config).await?;
    let issues = sets.get(filter).to_vec();
    debug!(%filter, count = issues.len(), "Listing ranked issues");

    Ok(IssuesResult { filter, issues })
}
