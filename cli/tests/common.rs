//! # Codepal Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests: the `codepal` binary under
//! test, and routers with deterministic reply selection for one-shot HTTP
//! requests.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use codepal::server::config::{ServerConfig, Variant};
use codepal::server::routes::create_app;
use serde_json::Value;
use tower::ServiceExt;

/// # Get Codepal Command (`codepal_cmd`)
///
/// ## Panics
/// Panics if the `codepal` binary cannot be found via `Command::cargo_bin`.
pub fn codepal_cmd() -> Command {
    Command::cargo_bin("codepal").expect("Failed to find codepal binary for testing")
}

pub fn full_app() -> Router {
    create_app(&ServerConfig {
        seed: Some(7),
        ..ServerConfig::default()
    })
}

pub fn simple_app() -> Router {
    create_app(&ServerConfig {
        seed: Some(7),
        variant: Variant::Simple,
        ..ServerConfig::default()
    })
}

/// Sends one request and decodes the JSON response body.
pub async fn send(app: &Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request");
    let response = app.clone().oneshot(request).await.expect("infallible router");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    let json = serde_json::from_slice(&bytes).expect("JSON body");
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, "").await
}

pub async fn post(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    send(app, Method::POST, uri, body).await
}
