// SPDX-License-Identifier: Apache-2.0

//! Spin sessions over a loaded set of ranked issues.
//!
//! The issues are fetched once per session; spins and filter changes never
//! refetch.

use std::io;

use anyhow::{Context, Result};
use console::style;
use dialoguer::Select;
use roulette_core::{FilterMode, RankedSets, SelectionSession, SpinOutcome};

use super::types::SpinResult;
use crate::cli::OutputContext;
use crate::output::{self, Renderable};

/// Menu entries of the interactive session.
const ACTION_SPIN: usize = 0;
const ACTION_FILTER: usize = 1;

/// Spins once and converts the outcome to a renderable result.
pub fn spin_result(
    session: &mut SelectionSession,
    sets: &RankedSets,
    rng: &mut fastrand::Rng,
) -> SpinResult {
    let issue = match session.spin(Some(sets), rng) {
        SpinOutcome::Selected(issue) => Some(issue),
        SpinOutcome::Exhausted | SpinOutcome::Failed(_) => None,
    };

    SpinResult {
        filter: session.mode(),
        issue,
        notice: session.notice().map(str::to_string),
        shown: session.shown_count(),
        total: sets.get(session.mode()).len(),
    }
}

/// Performs a single spin, for scripted use.
pub fn run_once(sets: &RankedSets, filter: FilterMode) -> SpinResult {
    let mut session = SelectionSession::new(filter);
    let mut rng = fastrand::Rng::new();
    spin_result(&mut session, sets, &mut rng)
}

/// Runs the interactive menu loop until the user quits.
pub fn run_interactive(sets: &RankedSets, filter: FilterMode, ctx: &OutputContext) -> Result<()> {
    let mut session = SelectionSession::new(filter);
    let mut rng = fastrand::Rng::new();

    println!(
        "{} {} issues loaded ({} bounty, {} unbountied)",
        style("*").cyan().bold(),
        sets.all.len(),
        sets.bounty.len(),
        sets.unbountied.len()
    );

    loop {
        let items = [
            "Spin".to_string(),
            format!("Change filter (current: {})", session.mode()),
            "Quit".to_string(),
        ];
        let action = Select::new()
            .with_prompt("What next?")
            .items(&items[..])
            .default(ACTION_SPIN)
            .interact_opt()
            .context("Failed to read menu selection")?;

        match action {
            Some(ACTION_SPIN) => {
                let result = spin_result(&mut session, sets, &mut rng);
                result
                    .render_text(&mut io::stdout(), ctx)
                    .context("Failed to render spin result")?;
            }
            Some(ACTION_FILTER) => {
                let mode = select_filter(session.mode())?;
                session.set_mode(mode);
            }
            _ => return Ok(()),
        }
    }
}

fn select_filter(current: FilterMode) -> Result<FilterMode> {
    let labels: Vec<String> = FilterMode::ALL
        .iter()
        .map(|mode| output::filter_label(*mode).to_string())
        .collect();
    let default = FilterMode::ALL
        .iter()
        .position(|mode| *mode == current)
        .unwrap_or(0);

    let picked = Select::new()
        .with_prompt("Filter")
        .items(&labels[..])
        .default(default)
        .interact_opt()
        .context("Failed to read filter selection")?;

    Ok(picked.map_or(current, |index| FilterMode::ALL[index]))
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use roulette_core::{EXHAUSTED_NOTICE, Issue, RepositoryInfo};

    use super::*;

    fn issue(id: u64, bounty: u64) -> Issue {
        Issue::builder()
            .id(id)
            .title(format!("Issue {id}"))
            .url(format!("https://github.com/tscircuit/core/issues/{id}"))
            .created_at(Utc::now())
            .repository(RepositoryInfo::new("tscircuit", "core"))
            .bounty_amount(bounty)
            .build()
    }

    fn sets() -> RankedSets {
        let issues = vec![issue(1, 100), issue(2, 0)];
        RankedSets::build(&issues, Utc::now(), &mut fastrand::Rng::with_seed(1))
    }

    #[test]
    fn test_run_once_selects_from_filter() {
        let result = run_once(&sets(), FilterMode::Bounty);

        assert_eq!(result.filter, FilterMode::Bounty);
        assert_eq!(result.issue.map(|i| i.id), Some(1));
        assert_eq!(result.shown, 1);
        assert_eq!(result.total, 1);
        assert!(result.notice.is_none());
    }

    #[test]
    fn test_spin_result_reports_exhaustion() {
        let sets = sets();
        let mut session = SelectionSession::new(FilterMode::Unbountied);
        let mut rng = fastrand::Rng::with_seed(3);

        let first = spin_result(&mut session, &sets, &mut rng);
        assert_eq!(first.issue.map(|i| i.id), Some(2));

        let second = spin_result(&mut session, &sets, &mut rng);
        assert!(second.issue.is_none());
        assert_eq!(second.notice.as_deref(), Some(EXHAUSTED_NOTICE));
        assert_eq!(second.shown, 0);
    }

    #[test]
    fn test_run_once_on_empty_set() {
        let result = run_once(&RankedSets::default(), FilterMode::All);

        assert!(result.issue.is_none());
        assert_eq!(result.notice.as_deref(), Some(EXHAUSTED_NOTICE));
        assert_eq!(result.total, 0);
    }
}
