// SPDX-License-Identifier: Apache-2.0

//! Command handlers for the roulette CLI.

pub mod auth;
pub mod issues;
pub mod spin;
pub mod types;

use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use roulette_core::{FilterMode, RouletteConfig};

use crate::cli::{AuthCommand, Commands, OutputContext};
use crate::output;

/// Creates a styled spinner (only if interactive and enabled in config).
fn maybe_spinner(ctx: &OutputContext, config: &RouletteConfig, message: &str) -> Option<ProgressBar> {
    if !ctx.is_interactive() || !config.ui.progress_bars {
        return None;
    }

    let s = ProgressBar::new_spinner();
    s.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    s.set_message(message.to_string());
    s.enable_steady_tick(Duration::from_millis(100));
    Some(s)
}

/// Dispatch to the appropriate command handler.
pub async fn run(command: Commands, ctx: OutputContext, config: &RouletteConfig) -> Result<()> {
    match command {
        Commands::Issues { filter } => {
            let spinner = maybe_spinner(&ctx, config, "Fetching issues...");
            let result = issues::run(config, FilterMode::from(filter)).await;
            if let Some(s) = spinner {
                s.finish_and_clear();
            }
            output::render(&result?, &ctx)
        }

        Commands::Spin { filter } => {
            let spinner = maybe_spinner(&ctx, config, "Fetching issues...");
            let sets = issues::fetch_sets(config).await;
            if let Some(s) = spinner {
                s.finish_and_clear();
            }
            let sets = sets?;

            if ctx.is_interactive() {
                spin::run_interactive(&sets, FilterMode::from(filter), &ctx)
            } else {
                let result = spin::run_once(&sets, FilterMode::from(filter));
                output::render(&result, &ctx)
            }
        }

        Commands::Auth(AuthCommand::Status) => {
            let result = auth::run_status();
            output::render(&result, &ctx)
        }
    }
}
