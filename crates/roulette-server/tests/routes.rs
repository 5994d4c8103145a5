// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the HTTP routes against an in-memory tracker.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::bail;
use async_trait::async_trait;
use axum::body::Body;
use chrono::{Duration, Utc};
use http::{Request, StatusCode};
use roulette_core::github::{SourceIssue, SourceRepository};
use roulette_core::{
    Connector, GitHubConfig, IssueSource, RouletteConfig, StaticTokenProvider, TokenProvider,
};
use roulette_server::{AppState, router};
use secrecy::SecretString;
use serde_json::Value;
use tower::ServiceExt;

#[derive(Clone)]
struct Tracker {
    issues: HashMap<String, Vec<SourceIssue>>,
    broken: bool,
}

#[async_trait]
impl IssueSource for Tracker {
    async fn list_organization_repositories(
        &self,
        _org: &str,
    ) -> anyhow::Result<Vec<SourceRepository>> {
        Ok(vec![SourceRepository {
            name: "core".to_string(),
            archived: false,
        }])
    }

    async fn list_open_issues(&self, owner: &str, repo: &str) -> anyhow::Result<Vec<SourceIssue>> {
        if self.broken {
            bail!("Failed to list issues for {owner}/{repo}");
        }
        Ok(self
            .issues
            .get(&format!("{owner}/{repo}"))
            .cloned()
            .unwrap_or_default())
    }
}

struct TrackerConnector {
    tracker: Tracker,
    connects: Arc<AtomicUsize>,
}

impl Connector for TrackerConnector {
    fn connect(
        &self,
        _token: &SecretString,
        _config: &GitHubConfig,
    ) -> anyhow::Result<Box<dyn IssueSource>> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(self.tracker.clone()))
    }
}

fn raw(id: u64, days_old: i64, bounty: Option<u64>) -> SourceIssue {
    SourceIssue {
        id,
        title: format!("Issue {id}"),
        body: bounty.map(|amount| format!("/bounty ${amount}")),
        html_url: format!("https://github.com/tscircuit/core/issues/{id}"),
        created_at: Utc::now() - Duration::days(days_old),
        author: None,
        assignees: Vec::new(),
        is_pull_request: false,
        labels: bounty
            .map(|_| vec!["💎 Bounty".to_string()])
            .unwrap_or_default(),
    }
}

fn tracker(broken: bool) -> Tracker {
    let mut issues = HashMap::new();
    issues.insert(
        "tscircuit/core".to_string(),
        vec![
            raw(1, 1, Some(50)),
            raw(2, 3, Some(300)),
            raw(3, 20, None),
            raw(4, 90, None),
        ],
    );
    Tracker { issues, broken }
}

fn token(value: Option<&str>) -> Arc<dyn TokenProvider> {
    Arc::new(StaticTokenProvider(
        value.map(|v| SecretString::from(v.to_string())),
    ))
}

fn app(tokens: Arc<dyn TokenProvider>, broken: bool) -> (axum::Router, Arc<AtomicUsize>) {
    let connects = Arc::new(AtomicUsize::new(0));
    let state = AppState {
        config: RouletteConfig::default(),
        tokens,
        connector: Arc::new(TrackerConnector {
            tracker: tracker(broken),
            connects: Arc::clone(&connects),
        }),
    };
    (router(Arc::new(state)), connects)
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

fn ids(value: &Value) -> Vec<u64> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|issue| issue["id"].as_u64().unwrap())
        .collect()
}

#[tokio::test]
async fn health_returns_ok() {
    let (app, connects) = app(token(None), false);
    let (status, body) = get(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");
    assert_eq!(connects.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn issues_default_to_all() {
    let (app, _) = app(token(Some("ghp_routeTestToken")), false);
    let (status, json) = get_json(app, "/api/issues").await;

    assert_eq!(status, StatusCode::OK);
    let mut ids = ids(&json);
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn issues_use_camel_case_fields() {
    let (app, _) = app(token(Some("ghp_routeTestToken")), false);
    let (_, json) = get_json(app, "/api/issues?filter=bounty").await;

    let first = &json[0];
    assert_eq!(first["bountyAmount"], 300);
    assert!(first["createdAt"].is_string());
    assert_eq!(first["repository"]["fullName"], "tscircuit/core");
    assert_eq!(first["author"]["login"], "unknown");
}

#[tokio::test]
async fn bounty_filter_sorts_by_amount() {
    let (app, _) = app(token(Some("ghp_routeTestToken")), false);
    let (status, json) = get_json(app, "/api/issues?filter=bounty").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json), vec![2, 1]);
}

#[tokio::test]
async fn unbountied_filter_excludes_bounties() {
    let (app, _) = app(token(Some("ghp_routeTestToken")), false);
    let (status, json) = get_json(app, "/api/issues?filter=unbountied").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json), vec![3, 4]);
}

#[tokio::test]
async fn unknown_filter_is_bad_request() {
    let (app, connects) = app(token(Some("ghp_routeTestToken")), false);
    let (status, json) = get_json(app, "/api/issues?filter=newest").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("newest"));
    assert_eq!(connects.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn ranked_returns_every_set() {
    let (app, _) = app(token(Some("ghp_routeTestToken")), false);
    let (status, json) = get_json(app, "/api/issues/ranked").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["all"].as_array().unwrap().len(), 4);
    assert_eq!(ids(&json["bounty"]), vec![2, 1]);
    assert_eq!(ids(&json["unbountied"]), vec![3, 4]);
}

#[tokio::test]
async fn missing_token_is_unauthorized() {
    let (app, connects) = app(token(None), false);
    let (status, json) = get_json(app, "/api/issues").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(json["error"].as_str().unwrap().contains("GITHUB_TOKEN"));
    assert_eq!(connects.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn placeholder_token_is_unauthorized() {
    let (app, connects) = app(token(Some("your_github_token_here")), false);
    let (status, _) = get_json(app, "/api/issues/ranked").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(connects.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn upstream_failure_is_internal_error() {
    let (app, _) = app(token(Some("ghp_routeTestToken")), true);
    let (status, json) = get_json(app, "/api/issues").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["error"].as_str().unwrap().contains("tscircuit/core"));
}

#[tokio::test]
async fn every_request_refetches() {
    let (app, connects) = app(token(Some("ghp_routeTestToken")), false);
    get(app.clone(), "/api/issues").await;
    get(app, "/api/issues/ranked").await;

    assert_eq!(connects.load(Ordering::SeqCst), 2);
}
