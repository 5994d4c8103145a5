// SPDX-License-Identifier: Apache-2.0

//! CLI-specific error formatting with user-friendly hints.
//!
//! Downcasts `anyhow::Error` to `RouletteError` and appends a hint suited to
//! a terminal user. The server formats the same errors as JSON instead.

use anyhow::Error;
use roulette_core::{RouletteError, config_file_path};

/// Formats an error for CLI display with helpful hints.
///
/// If the error is not a `RouletteError`, returns the original error chain.
pub fn format_error(error: &Error) -> String {
    let Some(err) = error.downcast_ref::<RouletteError>() else {
        return format!("{error:#}");
    };

    match err {
        RouletteError::NotAuthenticated => format!(
            "{err}\n\nTip: Export GITHUB_TOKEN (or GH_TOKEN), or run `gh auth login`. \
             Check with `roulette auth status`."
        ),
        RouletteError::GitHub { .. } => format!(
            "{err}\n\nTip: Check your network connection and token scopes with `roulette auth status`."
        ),
        RouletteError::Config { .. } | RouletteError::InvalidRepository { .. } => format!(
            "{err}\n\nTip: Check your config file at {}",
            config_file_path().display()
        ),
    }
}
