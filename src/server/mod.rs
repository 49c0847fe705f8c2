//! Server application core modules.
//!
//! This module contains all server-side functionality for the character API: configuration,
//! HTTP routing and controllers, the CORS policy, the JSON file backed store, and error
//! handling.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod cors;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod startup;
