// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # Roulette Core
//!
//! Core library for Issue Roulette - random picks over open GitHub issues,
//! biased toward recent and bountied work.
//!
//! This crate provides:
//! - Issue aggregation across an organization or an explicit repository list
//! - Bounty classification from labels and `/bounty $N` markers
//! - Ranked views (weighted recency, bounty sorted, unbountied)
//! - Spin sessions that avoid repeats until every issue was shown
//! - Configuration and credential handling
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use roulette_core::{EnvTokenProvider, FilterMode, SelectionSession, fetch_ranked, load_config};
//! use anyhow::Result;
//!
//! # async fn example() -> Result<()> {
//! let config = load_config()?;
//! let sets = fetch_ranked(&EnvTokenProvider, &config).await?;
//!
//! let mut session = SelectionSession::new(FilterMode::Bounty);
//! let mut rng = fastrand::Rng::new();
//! let outcome = session.spin(Some(&sets), &mut rng);
//! println!("{outcome:?}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`aggregate`] - Issue retrieval, filtering and bounty classification
//! - [`ranking`] - Ranked sets and filter modes
//! - [`session`] - Spin sessions
//! - [`github`] - Upstream records and the octocrab client
//! - [`config`] - Configuration loading and paths
//! - [`error`] - Error types

// ============================================================================
// Authentication
// ============================================================================

pub use auth::{EnvTokenProvider, StaticTokenProvider, TokenProvider, validate_token};

// ============================================================================
// Error Handling
// ============================================================================

pub use error::{RouletteError, SelectionError};

/// Convenience Result type for roulette operations.
///
/// This is equivalent to `std::result::Result<T, RouletteError>`.
pub type Result<T> = std::result::Result<T, RouletteError>;

// ============================================================================
// Configuration
// ============================================================================

pub use config::{
    GitHubConfig, RouletteConfig, ServerConfig, UiConfig, config_dir, config_file_path,
    load_config, load_config_from,
};

// ============================================================================
// Data Model
// ============================================================================

pub use model::{Author, Issue, IssueKey, RepositoryInfo};

// ============================================================================
// Aggregation, Ranking and Selection
// ============================================================================

pub use aggregate::Scope;
pub use github::client::{Connector, OctocrabConnector};
pub use github::{IssueSource, RepoRef};
pub use ranking::{FilterMode, MAX_RANKED, RankedSets};
pub use session::{EXHAUSTED_NOTICE, SelectionSession, SpinOutcome};

// ============================================================================
// Platform-Agnostic Facade
// ============================================================================

pub use facade::{fetch_issues, fetch_issues_with, fetch_ranked, fetch_ranked_with};

// ============================================================================
// Modules
// ============================================================================

pub mod aggregate;
pub mod auth;
pub mod config;
pub mod error;
pub mod facade;
pub mod github;
pub mod model;
pub mod ranking;
pub mod session;
pub mod utils;
