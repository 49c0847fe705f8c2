//! Tests for the CORS middleware.

use axum::http::{header, Method, StatusCode};
use marvel_characters::server::cors::{ALLOWED_HEADERS, ALLOWED_METHODS};
use tower::ServiceExt;

use super::*;

/// Tests a preflight request is answered before routing.
///
/// Expected: 200 OK with the CORS headers, even on a path with no OPTIONS route
#[tokio::test]
async fn preflight_answered_with_ok() -> Result<(), TestError> {
    let test = TestBuilder::new().with_seed_data().build()?;
    let app = seeded_app(&test);

    let resp = app
        .oneshot(empty_request(Method::OPTIONS, "/characters/1"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let headers = resp.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], ALLOWED_METHODS);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], ALLOWED_HEADERS);

    Ok(())
}

/// Tests regular responses carry the CORS headers, including errors.
///
/// Expected: Access-Control-Allow-Origin `*` on both a 200 and a 404
#[tokio::test]
async fn headers_on_every_response() -> Result<(), TestError> {
    let test = TestBuilder::new().with_seed_data().build()?;
    let app = seeded_app(&test);

    let ok = app
        .clone()
        .oneshot(empty_request(Method::GET, "/characters"))
        .await
        .unwrap();
    assert_eq!(ok.status(), StatusCode::OK);
    assert_eq!(ok.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");

    let missing = app
        .oneshot(empty_request(Method::GET, "/characters/99"))
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert_eq!(missing.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");

    Ok(())
}
