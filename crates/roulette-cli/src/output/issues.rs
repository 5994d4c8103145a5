// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};

use chrono::Utc;
use console::style;
use roulette_core::utils::{format_bounty, format_relative_time, truncate};
use roulette_core::{FilterMode, Issue};

use crate::cli::OutputContext;
use crate::commands::types::{IssuesResult, SpinResult};

use super::Renderable;

/// Longest title shown in list rows.
const LIST_TITLE_WIDTH: usize = 72;

/// Longest body excerpt shown on a spin card.
const CARD_BODY_WIDTH: usize = 280;

/// Human-readable name of a ranked set.
pub fn filter_label(mode: FilterMode) -> &'static str {
    match mode {
        FilterMode::All => "All issues (recent first, weighted)",
        FilterMode::Bounty => "Bounties (highest first)",
        FilterMode::Unbountied => "Without bounty",
    }
}

fn write_bounty_tag(w: &mut dyn Write, issue: &Issue) -> io::Result<()> {
    if issue.has_bounty() {
        write!(
            w,
            " {}",
            style(format_bounty(issue.bounty_amount)).green().bold()
        )?;
    }
    Ok(())
}

/// Collapses the body onto one line and shortens it for the card.
///
/// Markdown is shown as-is.
fn body_excerpt(body: &str) -> Option<String> {
    let flat = body.split_whitespace().collect::<Vec<_>>().join(" ");
    (!flat.is_empty()).then(|| truncate(&flat, CARD_BODY_WIDTH))
}

/// Writes the full card for a selected issue.
fn write_issue_card(w: &mut dyn Write, issue: &Issue) -> io::Result<()> {
    writeln!(w)?;
    write!(w, "  {}", style(&issue.title).bold())?;
    write_bounty_tag(w, issue)?;
    writeln!(w)?;
    writeln!(
        w,
        "  {} by {}, opened {}",
        style(&issue.repository.full_name).cyan(),
        issue.author.login,
        format_relative_time(&issue.created_at, Utc::now())
    )?;
    if let Some(excerpt) = body_excerpt(&issue.body) {
        writeln!(w)?;
        writeln!(w, "  {excerpt}")?;
        writeln!(w)?;
    }
    writeln!(w, "  {}", style(&issue.url).dim())?;
    writeln!(w)?;
    Ok(())
}

impl Renderable for IssuesResult {
    fn render_text(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        writeln!(w)?;
        writeln!(
            w,
            "{} ({})",
            style(filter_label(self.filter)).bold(),
            self.issues.len()
        )?;
        writeln!(w)?;

        if self.issues.is_empty() {
            writeln!(w, "  {}", style("No open issues in this set.").dim())?;
            writeln!(w)?;
            return Ok(());
        }

        let now = Utc::now();
        for (index, issue) in self.issues.iter().enumerate() {
            write!(
                w,
                "{:>3}. {}",
                index + 1,
                truncate(&issue.title, LIST_TITLE_WIDTH)
            )?;
            write_bounty_tag(w, issue)?;
            writeln!(w)?;
            writeln!(
                w,
                "     {} {}",
                style(&issue.repository.full_name).cyan(),
                style(format_relative_time(&issue.created_at, now)).dim()
            )?;
        }
        writeln!(w)?;
        Ok(())
    }
}

impl Renderable for SpinResult {
    fn render_text(&self, w: &mut dyn Write, ctx: &OutputContext) -> io::Result<()> {
        if let Some(notice) = &self.notice {
            writeln!(w, "{} {}", style("!").yellow().bold(), notice)?;
        }

        match &self.issue {
            Some(issue) => write_issue_card(w, issue)?,
            None if self.total == 0 => {
                writeln!(w, "  {}", style("No open issues in this set.").dim())?;
            }
            None => {}
        }

        if ctx.verbose {
            writeln!(
                w,
                "  {}",
                style(format!(
                    "{} of {} shown in {}",
                    self.shown, self.total, self.filter
                ))
                .dim()
            )?;
        }
        Ok(())
    }
}
