//! Data access layer.
//!
//! This module contains the JSON file backed store and the repository implementing the
//! character operations on top of it.

pub mod character;
pub mod store;
