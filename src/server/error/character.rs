use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum CharacterError {
    /// Holds the id exactly as it appeared in the request path
    #[error("Character ID {0:?} not found")]
    NotFound(String),
}

impl IntoResponse for CharacterError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(ref id) => {
                tracing::debug!(id = %id, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "Character not found".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
