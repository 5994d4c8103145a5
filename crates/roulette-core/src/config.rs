// SPDX-License-Identifier: Apache-2.0

//! Configuration management for Issue Roulette.
//!
//! Provides layered configuration from files and environment variables.
//! Uses XDG-compliant paths with environment variable support.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables (prefix: `ROULETTE_`)
//! 2. Config file: `~/.config/issue-roulette/config.toml`
//! 3. Built-in defaults
//!
//! # Examples
//!
//! ```bash
//! # Point the roulette at another organization
//! ROULETTE_GITHUB__ORG=rust-lang cargo run -p roulette-cli -- issues
//! ```

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::aggregate::Scope;
use crate::error::RouletteError;
use crate::github::parse_owner_repo;

/// Application directory name under the XDG base directories.
const APP_DIR: &str = "issue-roulette";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RouletteConfig {
    /// GitHub scope and API settings.
    pub github: GitHubConfig,
    /// HTTP server settings.
    pub server: ServerConfig,
    /// UI preferences.
    pub ui: UiConfig,
}

/// GitHub scope and API settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// Organization whose non-archived repositories are scanned.
    pub org: String,
    /// Explicit `owner/name` repositories. When non-empty, `org` is ignored.
    pub repos: Vec<String>,
    /// Label that marks an issue as carrying a bounty (exact match).
    pub bounty_label: String,
    /// API request timeout in seconds.
    pub api_timeout_seconds: u64,
    /// Page size for list requests (GitHub caps it at 100).
    pub per_page: u8,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            org: "tscircuit".to_string(),
            repos: Vec::new(),
            bounty_label: "💎 Bounty".to_string(),
            api_timeout_seconds: 10,
            per_page: 100,
        }
    }
}

impl GitHubConfig {
    /// Page size clamped to the range GitHub accepts.
    #[must_use]
    pub fn page_size(&self) -> u8 {
        self.per_page.clamp(1, 100)
    }
}

/// HTTP server settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// UI preferences.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable colored output.
    pub color: bool,
    /// Show progress spinners.
    pub progress_bars: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: true,
            progress_bars: true,
        }
    }
}

impl RouletteConfig {
    /// Resolves the repository scope to aggregate over.
    ///
    /// # Errors
    ///
    /// Returns `RouletteError::InvalidRepository` if an explicit entry is not `owner/name`.
    pub fn scope(&self) -> Result<Scope, RouletteError> {
        if self.github.repos.is_empty() {
            return Ok(Scope::Organization(self.github.org.clone()));
        }

        let repos = self
            .github
            .repos
            .iter()
            .map(|entry| {
                parse_owner_repo(entry).map_err(|_| RouletteError::InvalidRepository {
                    value: entry.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Scope::Repositories(repos))
    }
}

/// Returns the configuration directory.
///
/// Respects the `XDG_CONFIG_HOME` environment variable if set,
/// otherwise defaults to `~/.config/issue-roulette`.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        return PathBuf::from(xdg_config).join(APP_DIR);
    }
    dirs::home_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(".config")
        .join(APP_DIR)
}

/// Returns the path to the configuration file.
#[must_use]
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Load application configuration from the default config file path.
///
/// Environment variables use the prefix `ROULETTE_` and double underscore
/// for nested keys (e.g., `ROULETTE_GITHUB__BOUNTY_LABEL`).
///
/// # Errors
///
/// Returns `RouletteError::Config` if the config file exists but is invalid.
pub fn load_config() -> Result<RouletteConfig, RouletteError> {
    load_config_from(&config_file_path())
}

/// Load application configuration from an explicit file path.
///
/// The file is optional; environment overrides still apply.
///
/// # Errors
///
/// Returns `RouletteError::Config` if the file exists but is invalid.
pub fn load_config_from(path: &Path) -> Result<RouletteConfig, RouletteError> {
    let config = Config::builder()
        .add_source(File::from(path.to_path_buf()).required(false))
        .add_source(
            Environment::with_prefix("ROULETTE")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("github.repos")
                .try_parsing(true),
        )
        .build()?;

    let roulette_config: RouletteConfig = config.try_deserialize()?;

    Ok(roulette_config)
}
