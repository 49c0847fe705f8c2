//! HTTP controller endpoints for the character API.
//!
//! This module contains Axum handlers for the API index and the character CRUD routes.
//! Controllers parse path parameters and request bodies, call into the character repository,
//! and return appropriate HTTP responses. They use utoipa for OpenAPI documentation.

pub mod character;
pub mod index;
