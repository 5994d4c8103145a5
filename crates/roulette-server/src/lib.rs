// SPDX-License-Identifier: Apache-2.0

//! HTTP API for Issue Roulette.
//!
//! Serves the ranked issue sets as JSON. Every request runs a fresh
//! aggregation; nothing is cached between requests.
//!
//! Routes:
//! - `GET /health` - liveness probe, answers `ok`
//! - `GET /api/issues?filter=all|bounty|unbountied` - one ranked set
//! - `GET /api/issues/ranked` - all three ranked sets

mod error;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use roulette_core::{
    Connector, EnvTokenProvider, FilterMode, Issue, OctocrabConnector, RankedSets, RouletteConfig,
    TokenProvider, fetch_ranked_with,
};
use serde::Deserialize;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

pub use error::{ApiError, ErrorBody};

/// Shared state for request handlers.
pub struct AppState {
    /// Loaded configuration.
    pub config: RouletteConfig,
    /// Source of the GitHub token, consulted on every request.
    pub tokens: Arc<dyn TokenProvider>,
    /// Builds the upstream client once the token is validated.
    pub connector: Arc<dyn Connector>,
}

impl AppState {
    /// State reading the token from the environment and talking to GitHub.
    #[must_use]
    pub fn new(config: RouletteConfig) -> Self {
        Self {
            config,
            tokens: Arc::new(EnvTokenProvider),
            connector: Arc::new(OctocrabConnector),
        }
    }

    async fn ranked(&self) -> Result<RankedSets, ApiError> {
        let sets =
            fetch_ranked_with(self.tokens.as_ref(), self.connector.as_ref(), &self.config).await?;
        Ok(sets)
    }
}

/// Query parameters of `GET /api/issues`.
#[derive(Debug, Deserialize)]
pub struct IssuesQuery {
    /// Ranked set name. Defaults to `all`.
    pub filter: Option<String>,
}

/// Builds the router with all routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/issues", get(list_issues))
        .route("/api/issues/ranked", get(ranked_issues))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn list_issues(
    State(state): State<Arc<AppState>>,
    Query(params): Query<IssuesQuery>,
) -> Result<Json<Vec<Issue>>, ApiError> {
    let filter = match params.filter.as_deref() {
        None | Some("") => FilterMode::All,
        Some(value) => value.parse::<FilterMode>().map_err(ApiError::BadRequest)?,
    };

    let sets = state.ranked().await?;
    let issues = sets.get(filter).to_vec();
    debug!(%filter, count = issues.len(), "Serving ranked issues");

    Ok(Json(issues))
}

async fn ranked_issues(State(state): State<Arc<AppState>>) -> Result<Json<RankedSets>, ApiError> {
    Ok(Json(state.ranked().await?))
}

/// Parses a bind address, bracketing bare IPv6 hosts.
///
/// # Errors
///
/// Returns an error if `host` is not an IP address.
pub fn bind_addr(host: &str, port: u16) -> anyhow::Result<SocketAddr> {
    let addr = if host.contains(':') {
        format!("[{host}]:{port}")
    } else {
        format!("{host}:{port}")
    }
    .parse()?;
    Ok(addr)
}

/// Serves the API until Ctrl+C.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn run_http(state: AppState, host: &str, port: u16) -> anyhow::Result<()> {
    let addr = bind_addr(host, port)?;
    let listener = TcpListener::bind(addr).await?;

    info!(%addr, org = %state.config.github.org, "HTTP server listening");

    axum::serve(listener, router(Arc::new(state)))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
            info!("Received Ctrl+C, shutting down gracefully");
        })
        .await?;

    Ok(())
}
