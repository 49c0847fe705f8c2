use std::path::PathBuf;

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read character store {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Character store {path:?} does not contain a valid document: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Failed to serialize character store document: {0}")]
    Serialize(serde_json::Error),
    #[error("Failed to write character store {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The highest stored id leaves no room for another one
    #[error("No character id left after {0}")]
    IdsExhausted(i64),
    #[error("Character store task failed: {0}")]
    Blocking(#[from] tokio::task::JoinError),
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
