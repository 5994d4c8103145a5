// SPDX-License-Identifier: Apache-2.0

//! Result types returned by command handlers.
//!
//! Handlers return data instead of printing, so the same result can be
//! rendered as text, JSON, or YAML.

use roulette_core::{FilterMode, Issue};
use serde::Serialize;

use crate::provider::TokenSource;

/// Result from the auth status command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AuthStatusResult {
    /// Whether a usable token was found.
    pub authenticated: bool,
    /// Where the token came from (if any was found).
    pub method: Option<TokenSource>,
    /// True when the token found is a known placeholder value.
    pub placeholder: bool,
}

/// Result from the issues command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct IssuesResult {
    /// Ranked set that was listed.
    pub filter: FilterMode,
    /// Issues in ranked order.
    pub issues: Vec<Issue>,
}

/// Result of one spin.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SpinResult {
    /// Ranked set the spin drew from.
    pub filter: FilterMode,
    /// The selected issue, absent when the set was exhausted or empty.
    pub issue: Option<Issue>,
    /// Notice shown alongside the result.
    pub notice: Option<String>,
    /// Issues shown so far in this session.
    pub shown: usize,
    /// Size of the ranked set.
    pub total: usize,
}
