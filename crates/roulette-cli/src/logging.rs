// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the roulette CLI.
//!
//! Uses `tracing` with `tracing-subscriber`. `RUST_LOG` always wins; without it
//! only warnings are shown, or debug output for roulette crates with `-v`.
//!
//! # Examples
//!
//! ```bash
//! # Per-repository fetch timings
//! RUST_LOG=roulette=info roulette issues
//!
//! # Everything, including octocrab requests
//! RUST_LOG=debug roulette spin
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "roulette=warn,octocrab=error";

/// Filter used with `--verbose` when `RUST_LOG` is unset.
const VERBOSE_FILTER: &str = "roulette=debug,octocrab=warn";

/// Initialize the logging subsystem. Logs go to stderr so JSON/YAML on stdout
/// stays parseable.
pub fn init_logging(verbose: bool) {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let default_filter = if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    };
    let filter_layer = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
