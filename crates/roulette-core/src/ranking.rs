// SPDX-License-Identifier: Apache-2.0

//! Ranking strategies over the eligible issue set.
//!
//! Three independent views, each capped at [`MAX_RANKED`] entries:
//!
//! - **Weighted recency**: every issue draws `uniform(0, 1) * weight`, where
//!   the weight comes from its age band, and the draws are sorted descending.
//!   Newer issues tend to land first but the order is probabilistic. This is
//!   not exact weighted sampling without replacement and is kept that way.
//! - **Bounty sorted**: issues with a bounty, highest amount first, ties in
//!   input order.
//! - **Unbountied**: issues without a bounty, in input order.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::Issue;

/// Maximum number of issues in any ranked set.
pub const MAX_RANKED: usize = 20;

/// Weight for issues younger than a week.
pub const WEEK_WEIGHT: f64 = 0.7;
/// Weight for issues between a week and 30 days old.
pub const MONTH_WEIGHT: f64 = 0.25;
/// Weight for issues 30 days or older.
pub const STALE_WEIGHT: f64 = 0.05;

/// Which ranked set a client is spinning over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Weighted-recency order over every eligible issue.
    #[default]
    All,
    /// Bountied issues, highest bounty first.
    Bounty,
    /// Issues without a bounty.
    Unbountied,
}

impl FilterMode {
    /// All modes, in display order.
    pub const ALL: [FilterMode; 3] = [FilterMode::All, FilterMode::Bounty, FilterMode::Unbountied];

    /// Returns the wire name of the mode.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Bounty => "bounty",
            FilterMode::Unbountied => "unbountied",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(FilterMode::All),
            "bounty" => Ok(FilterMode::Bounty),
            "unbountied" => Ok(FilterMode::Unbountied),
            other => Err(format!(
                "Unknown filter '{other}'. Expected one of: all, bounty, unbountied"
            )),
        }
    }
}

/// Returns the selection weight for an issue created at `created_at`.
///
/// Issues dated in the future count as new.
#[must_use]
pub fn recency_weight(created_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let age = now.signed_duration_since(created_at);
    if age < Duration::days(7) {
        WEEK_WEIGHT
    } else if age < Duration::days(30) {
        MONTH_WEIGHT
    } else {
        STALE_WEIGHT
    }
}

/// Orders issues by a fresh weighted random draw and keeps the top [`MAX_RANKED`].
///
/// Draws come from `rng` on every call and are never cached.
#[must_use]
pub fn weighted_recency(issues: &[Issue], now: DateTime<Utc>, rng: &mut fastrand::Rng) -> Vec<Issue> {
    let mut scored: Vec<(f64, &Issue)> = issues
        .iter()
        .map(|issue| (rng.f64() * recency_weight(issue.created_at, now), issue))
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    scored
        .into_iter()
        .take(MAX_RANKED)
        .map(|(_, issue)| issue.clone())
        .collect()
}

/// Bountied issues sorted by amount, highest first. Stable for equal amounts.
#[must_use]
pub fn bounty_sorted(issues: &[Issue]) -> Vec<Issue> {
    let mut bountied: Vec<&Issue> = issues.iter().filter(|i| i.has_bounty()).collect();
    bountied.sort_by(|a, b| b.bounty_amount.cmp(&a.bounty_amount));
    bountied.into_iter().take(MAX_RANKED).cloned().collect()
}

/// Issues without a bounty, in input order.
#[must_use]
pub fn unbountied(issues: &[Issue]) -> Vec<Issue> {
    issues
        .iter()
        .filter(|i| !i.has_bounty())
        .take(MAX_RANKED)
        .cloned()
        .collect()
}

/// The three ranked views computed from one aggregation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankedSets {
    /// Weighted-recency order.
    pub all: Vec<Issue>,
    /// Bounty-sorted order.
    pub bounty: Vec<Issue>,
    /// Unbountied issues.
    pub unbountied: Vec<Issue>,
}

impl RankedSets {
    /// Computes every ranked view from the same eligible issues.
    #[must_use]
    pub fn build(issues: &[Issue], now: DateTime<Utc>, rng: &mut fastrand::Rng) -> Self {
        let sets = Self {
            all: weighted_recency(issues, now, rng),
            bounty: bounty_sorted(issues),
            unbountied: unbountied(issues),
        };

        debug!(
            eligible = issues.len(),
            all = sets.all.len(),
            bounty = sets.bounty.len(),
            unbountied = sets.unbountied.len(),
            "Built ranked sets"
        );

        sets
    }

    /// Returns the ranked set for a filter mode.
    #[must_use]
    pub fn get(&self, mode: FilterMode) -> &[Issue] {
        match mode {
            FilterMode::All => &self.all,
            FilterMode::Bounty => &self.bounty,
            FilterMode::Unbountied => &self.unbountied,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::model::RepositoryInfo;

    fn issue(id: u64, age_days: i64, bounty: u64, now: DateTime<Utc>) -> Issue {
        Issue::builder()
            .id(id)
            .title(format!("Issue {id}"))
            .url(format!("https://github.com/tscircuit/core/issues/{id}"))
            .created_at(now - Duration::days(age_days))
            .repository(RepositoryInfo::new("tscircuit", "core"))
            .bounty_amount(bounty)
            .build()
    }

    #[test]
    fn test_recency_weight_bands() {
        let now = Utc::now();
        assert_eq!(recency_weight(now, now), WEEK_WEIGHT);
        assert_eq!(recency_weight(now - Duration::days(6), now), WEEK_WEIGHT);
        assert_eq!(recency_weight(now - Duration::days(7), now), MONTH_WEIGHT);
        assert_eq!(recency_weight(now - Duration::days(29), now), MONTH_WEIGHT);
        assert_eq!(recency_weight(now - Duration::days(30), now), STALE_WEIGHT);
        assert_eq!(recency_weight(now - Duration::days(400), now), STALE_WEIGHT);
    }

    #[test]
    fn test_recency_weight_future_counts_as_new() {
        let now = Utc::now();
        assert_eq!(recency_weight(now + Duration::days(2), now), WEEK_WEIGHT);
    }

    #[test]
    fn test_weighted_recency_caps_at_twenty() {
        let now = Utc::now();
        let issues: Vec<Issue> = (0..25).map(|id| issue(id, 1, 0, now)).collect();
        let mut rng = fastrand::Rng::with_seed(11);

        let ranked = weighted_recency(&issues, now, &mut rng);

        assert_eq!(ranked.len(), 20);
        let input_ids: HashSet<u64> = issues.iter().map(|i| i.id).collect();
        let ranked_ids: HashSet<u64> = ranked.iter().map(|i| i.id).collect();
        assert_eq!(ranked_ids.len(), 20, "no issue should appear twice");
        assert!(ranked_ids.is_subset(&input_ids));
    }

    #[test]
    fn test_weighted_recency_short_input_keeps_everything() {
        let now = Utc::now();
        let issues: Vec<Issue> = (0..3).map(|id| issue(id, 40, 0, now)).collect();
        let mut rng = fastrand::Rng::with_seed(3);

        let ranked = weighted_recency(&issues, now, &mut rng);
        assert_eq!(ranked.len(), 3);
    }

    #[test]
    fn test_weighted_recency_favors_new_issues() {
        let now = Utc::now();
        let mut issues: Vec<Issue> = (0..20).map(|id| issue(id, 1, 0, now)).collect();
        issues.extend((100..120).map(|id| issue(id, 90, 0, now)));
        let mut rng = fastrand::Rng::with_seed(42);

        let ranked = weighted_recency(&issues, now, &mut rng);
        let new_count = ranked.iter().filter(|i| i.id < 100).count();

        assert!(new_count >= 10, "expected mostly new issues, got {new_count}");
    }

    #[test]
    fn test_weighted_recency_reproducible_by_seed() {
        let now = Utc::now();
        let issues: Vec<Issue> = (0..30).map(|id| issue(id, id as i64, 0, now)).collect();

        let first = weighted_recency(&issues, now, &mut fastrand::Rng::with_seed(5));
        let second = weighted_recency(&issues, now, &mut fastrand::Rng::with_seed(5));
        assert_eq!(first, second);
    }

    #[test]
    fn test_bounty_sorted_descending_and_stable() {
        let now = Utc::now();
        let issues = vec![
            issue(1, 1, 50, now),
            issue(2, 1, 0, now),
            issue(3, 1, 250, now),
            issue(4, 1, 50, now),
            issue(5, 1, 10, now),
        ];

        let ranked = bounty_sorted(&issues);
        let ids: Vec<u64> = ranked.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 1, 4, 5]);
        assert!(ranked.iter().all(Issue::has_bounty));
        assert!(ranked.windows(2).all(|w| w[0].bounty_amount >= w[1].bounty_amount));
    }

    #[test]
    fn test_bounty_sorted_caps_at_twenty() {
        let now = Utc::now();
        let issues: Vec<Issue> = (1..=30).map(|id| issue(id, 1, id, now)).collect();

        let ranked = bounty_sorted(&issues);
        assert_eq!(ranked.len(), 20);
        assert_eq!(ranked[0].bounty_amount, 30);
        assert_eq!(ranked[19].bounty_amount, 11);
    }

    #[test]
    fn test_unbountied_keeps_input_order() {
        let now = Utc::now();
        let issues = vec![
            issue(9, 100, 0, now),
            issue(2, 1, 25, now),
            issue(4, 3, 0, now),
            issue(1, 50, 0, now),
        ];

        let ids: Vec<u64> = unbountied(&issues).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![9, 4, 1]);
    }

    #[test]
    fn test_unbountied_caps_at_twenty() {
        let now = Utc::now();
        let issues: Vec<Issue> = (0..25).map(|id| issue(id, 1, 0, now)).collect();
        let ranked = unbountied(&issues);
        assert_eq!(ranked.len(), 20);
        assert_eq!(ranked[0].id, 0);
        assert_eq!(ranked[19].id, 19);
    }

    #[test]
    fn test_ranked_sets_get() {
        let now = Utc::now();
        let issues = vec![issue(1, 1, 100, now), issue(2, 1, 0, now)];
        let sets = RankedSets::build(&issues, now, &mut fastrand::Rng::with_seed(1));

        assert_eq!(sets.get(FilterMode::All).len(), 2);
        assert_eq!(sets.get(FilterMode::Bounty)[0].id, 1);
        assert_eq!(sets.get(FilterMode::Unbountied)[0].id, 2);
    }

    #[test]
    fn test_filter_mode_from_str() {
        assert_eq!("all".parse::<FilterMode>().unwrap(), FilterMode::All);
        assert_eq!("Bounty".parse::<FilterMode>().unwrap(), FilterMode::Bounty);
        assert_eq!(
            " unbountied ".parse::<FilterMode>().unwrap(),
            FilterMode::Unbountied
        );
        assert!("bountied".parse::<FilterMode>().is_err());
    }

    #[test]
    fn test_filter_mode_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&FilterMode::Unbountied).unwrap(),
            "\"unbountied\""
        );
        assert_eq!(FilterMode::Bounty.to_string(), "bounty");
    }
}
