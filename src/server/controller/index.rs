use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::ApiIndexDto;

pub static INDEX_TAG: &str = "index";

/// Endpoints advertised by the index route
pub static ENDPOINTS: [&str; 5] = [
    "GET /characters",
    "POST /characters",
    "GET /characters/:id",
    "PUT /characters/:id",
    "DELETE /characters/:id",
];

/// Confirms the API is running and lists its endpoints
#[utoipa::path(
    get,
    path = "/",
    tag = INDEX_TAG,
    responses(
        (status = 200, description = "API is running", body = ApiIndexDto)
    ),
)]
pub async fn index() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ApiIndexDto {
            message: "Marvel Characters API is running!".to_string(),
            endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
        }),
    )
}
