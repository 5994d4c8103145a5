// SPDX-License-Identifier: Apache-2.0

//! Error types for Issue Roulette.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Application code should use `anyhow::Result` for top-level error handling.

use thiserror::Error;

/// Errors that can occur while fetching and ranking issues.
#[derive(Error, Debug)]
pub enum RouletteError {
    /// No usable GitHub credential (missing, empty, or a placeholder value).
    #[error("Authentication required - set the GITHUB_TOKEN environment variable to a real token")]
    NotAuthenticated,

    /// GitHub API error from octocrab. Aborts the whole aggregation.
    #[error("GitHub API error: {message}")]
    GitHub {
        /// Error message.
        message: String,
    },

    /// Configuration file error.
    #[error("Configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },

    /// A configured repository is not in `owner/name` form.
    #[error("Invalid repository '{value}' - expected owner/name")]
    InvalidRepository {
        /// The offending value.
        value: String,
    },
}

impl From<octocrab::Error> for RouletteError {
    fn from(err: octocrab::Error) -> Self {
        RouletteError::GitHub {
            message: err.to_string(),
        }
    }
}

impl From<config::ConfigError> for RouletteError {
    fn from(err: config::ConfigError) -> Self {
        RouletteError::Config {
            message: err.to_string(),
        }
    }
}

/// Failure while picking the next issue in a selection session.
///
/// Recovered by the session itself; never ends it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// Spin was requested before any issues were loaded.
    #[error("No issues loaded yet - fetch issues before spinning")]
    NotLoaded,
}
