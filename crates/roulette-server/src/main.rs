// SPDX-License-Identifier: Apache-2.0

//! Binary entry point for the roulette HTTP server.

use anyhow::Context;
use clap::Parser;
use roulette_server::{AppState, run_http};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Serve ranked GitHub issues over HTTP.
#[derive(Parser)]
#[command(name = "roulette-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Bind address (overrides `server.host` in the config file)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides `server.port` in the config file)
    #[arg(long, short = 'p')]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("roulette=info,octocrab=error"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = roulette_core::load_config().context("Failed to load configuration")?;
    let host = args.host.unwrap_or_else(|| config.server.host.clone());
    let port = args.port.unwrap_or(config.server.port);

    run_http(AppState::new(config), &host, port).await
}
