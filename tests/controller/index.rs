//! Tests for the API index endpoint.

use axum::{http::StatusCode, response::IntoResponse};
use marvel_characters::{model::api::ApiIndexDto, server::controller::index::index};

use super::*;

/// Tests the index lists every character endpoint.
///
/// Expected: 200 OK with a message and the five character endpoints
#[tokio::test]
async fn lists_character_endpoints() {
    let resp = index().await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: ApiIndexDto = response_json(resp).await;
    assert!(!body.message.is_empty());
    assert_eq!(
        body.endpoints,
        vec![
            "GET /characters",
            "POST /characters",
            "GET /characters/:id",
            "PUT /characters/:id",
            "DELETE /characters/:id",
        ]
    );
}
