//! Tests for the assembled application router.
//!
//! These tests drive the full middleware and routing stack with `tower::ServiceExt::oneshot`,
//! covering path matching, request body extraction, and the CORS layer that direct handler calls
//! bypass.

mod cors;

use axum::{
    body::Body,
    http::{header, Method, Request},
    Router,
};
use marvel_characters::server::router::app;
use marvel_test_utils::prelude::*;

use crate::util::{response_json, TestContextExt};

/// Build the application over a seeded backing file
fn seeded_app(test: &TestContext) -> Router {
    app(test.into_app_state())
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request")
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}
