// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition for the roulette CLI.
//!
//! Uses clap's derive API for declarative CLI parsing.

use std::io::IsTerminal;

use clap::{Parser, Subcommand, ValueEnum};
use roulette_core::FilterMode;

/// Output format for CLI results.
#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with colors (default)
    #[default]
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// YAML output for programmatic consumption
    Yaml,
}

/// Global output configuration passed to commands.
#[derive(Clone)]
pub struct OutputContext {
    /// Output format (text, json, yaml)
    pub format: OutputFormat,
    /// Suppress non-essential output (spinners, progress)
    pub quiet: bool,
    /// Enable verbose output
    pub verbose: bool,
    /// Whether stdout is a terminal (TTY)
    pub is_tty: bool,
}

impl OutputContext {
    /// Creates an `OutputContext` from CLI arguments.
    pub fn from_cli(format: OutputFormat, quiet: bool, verbose: bool) -> Self {
        Self {
            format,
            quiet,
            verbose,
            is_tty: std::io::stdout().is_terminal(),
        }
    }

    /// Returns true if interactive elements (spinners, prompts) should be shown.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && !self.quiet && matches!(self.format, OutputFormat::Text)
    }
}

/// Which ranked set to draw from.
#[derive(Clone, Copy, Default, ValueEnum)]
pub enum FilterArg {
    /// Recency-weighted mix of every eligible issue
    #[default]
    All,
    /// Bountied issues, highest bounty first
    Bounty,
    /// Issues without a bounty
    Unbountied,
}

impl From<FilterArg> for FilterMode {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => FilterMode::All,
            FilterArg::Bounty => FilterMode::Bounty,
            FilterArg::Unbountied => FilterMode::Unbountied,
        }
    }
}

/// Issue Roulette - spin for a random open GitHub issue to work on.
///
/// Fetches the open, unassigned issues of a GitHub organization, ranks them
/// by recency and bounty, and picks one at random.
#[derive(Parser)]
#[command(name = "roulette")]
#[command(version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Output format (text, json, yaml)
    #[arg(long, short = 'o', global = true, default_value = "text", value_enum)]
    pub output: OutputFormat,

    /// Suppress non-essential output (spinners, progress)
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output (debug-level logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// List a ranked set of open issues
    Issues {
        /// Ranked set to show
        #[arg(long, short = 'f', default_value = "all", value_enum)]
        filter: FilterArg,
    },

    /// Spin for a random issue (interactive on a terminal)
    Spin {
        /// Ranked set to draw from
        #[arg(long, short = 'f', default_value = "all", value_enum)]
        filter: FilterArg,
    },

    /// Inspect GitHub authentication
    #[command(subcommand)]
    Auth(AuthCommand),
}

/// Authentication subcommands
#[derive(Subcommand)]
pub enum AuthCommand {
    /// Show where the GitHub token comes from and whether it is usable
    Status,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_filter_arg_maps_to_mode() {
        assert_eq!(FilterMode::from(FilterArg::All), FilterMode::All);
        assert_eq!(FilterMode::from(FilterArg::Bounty), FilterMode::Bounty);
        assert_eq!(
            FilterMode::from(FilterArg::Unbountied),
            FilterMode::Unbountied
        );
    }

    #[test]
    fn test_parse_spin_with_filter() {
        let cli = Cli::try_parse_from(["roulette", "spin", "--filter", "bounty"]).unwrap();
        match cli.command {
            Commands::Spin { filter } => {
                assert_eq!(FilterMode::from(filter), FilterMode::Bounty);
            }
            _ => panic!("expected spin command"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_filter() {
        assert!(Cli::try_parse_from(["roulette", "issues", "--filter", "newest"]).is_err());
    }
}
