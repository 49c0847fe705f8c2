//! Error types for the character API server.
//!
//! This module provides the error handling system for the server, with specialized error types
//! for each domain (characters, the backing store, configuration). All errors implement
//! `IntoResponse` for Axum HTTP responses and use `thiserror` for ergonomic error definitions
//! with automatic `Display` and `Error` trait implementations.

pub mod character;
pub mod config;
pub mod store;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{character::CharacterError, config::ConfigError, store::StoreError},
};

/// Main error type for the character API server.
///
/// This enum aggregates all domain-specific error types into a single unified error type. It
/// uses `thiserror`'s `#[from]` attribute to enable automatic conversion from underlying error
/// types via the `?` operator. The `IntoResponse` implementation maps errors to appropriate HTTP
/// responses for API consumers.
///
/// # Error Categories
/// - Configuration errors (invalid environment variables)
/// - Character errors (no record with the requested id)
/// - Store errors (backing file unreadable, unwritable, or corrupt)
/// - Request body errors (not JSON, or a field of the wrong JSON type)
/// - I/O errors outside of the store (binding the listener)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Character error (record lookup by id failed).
    #[error(transparent)]
    CharacterError(#[from] CharacterError),
    /// Backing store error (read, parse, serialize, or write failure).
    #[error(transparent)]
    StoreError(#[from] StoreError),
    /// Request body could not be read as a character.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),
    /// I/O error not tied to the backing store, such as binding the listen address.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For character ids matching no record
/// - 400, 415, or 422 - For request bodies rejected by the JSON extractor
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::CharacterError(err) => err.into_response(),
            Self::StoreError(err) => err.into_response(),
            Self::JsonRejection(rejection) => {
                tracing::debug!("Rejected request body: {}", rejection.body_text());

                (
                    rejection.status(),
                    Json(ErrorDto {
                        error: rejection.body_text(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details such as file paths.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
