// SPDX-License-Identifier: Apache-2.0

//! Issue Roulette - spin for a random open GitHub issue to work on.
//!
//! Lists ranked issue sets and runs interactive spin sessions over the open
//! issues of an organization or a fixed set of repositories.

mod cli;
mod commands;
mod errors;
mod logging;
mod output;
mod provider;

use anyhow::{Context, Result};
use clap::Parser;
use roulette_core::load_config;
use tracing::debug;

use crate::cli::{Cli, OutputContext};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let config = load_config().context("Failed to load configuration")?;
    debug!("Configuration loaded successfully");

    if !config.ui.color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let output_ctx = OutputContext::from_cli(cli.output, cli.quiet, cli.verbose);

    match commands::run(cli.command, output_ctx, &config).await {
        Ok(()) => Ok(()),
        Err(e) => {
            let formatted = errors::format_error(&e);
            eprintln!("Error: {formatted}");
            std::process::exit(1);
        }
    }
}
