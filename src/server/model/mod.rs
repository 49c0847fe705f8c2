//! Server application models.
//!
//! This module contains the application state shared with every HTTP handler.

pub mod app;
