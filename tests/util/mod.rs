//! Shared helpers for integration tests.


pub use test_utils::{response_json, TestContextExt};
