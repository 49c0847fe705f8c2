//! Tests for the get_characters endpoint.
//!
//! This module verifies listing returns every stored character in stored order, and that an
//! unreadable backing file is reported as an internal server error.

use std::fs;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use marvel_characters::{model::character::CharacterDto, server::controller::character::get_characters};

use super::*;

/// Tests listing the seeded store.
///
/// Expected: Ok with 200 OK response containing the three seed characters
#[tokio::test]
async fn success_with_seed_characters() -> Result<(), TestError> {
    let test = TestBuilder::new().with_seed_data().build()?;

    let result = get_characters(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let characters: Vec<CharacterDto> = response_json(resp).await;
    let names: Vec<Option<&str>> = characters.iter().map(|c| c.name.as_deref()).collect();
    assert_eq!(
        names,
        vec![Some("Spider-Man"), Some("Iron Man"), Some("Batman")]
    );

    Ok(())
}

/// Tests listing a store whose file did not exist before startup.
///
/// Expected: Ok with 200 OK response containing the seed characters written at startup
#[tokio::test]
async fn success_seeds_missing_store() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;

    let result = get_characters(State(test.into_app_state())).await;

    let resp = result.unwrap().into_response();
    let characters: Vec<CharacterDto> = response_json(resp).await;
    assert_eq!(characters.len(), 3);
    assert_eq!(test.stored_ids()?, vec![1, 2, 3]);

    Ok(())
}

/// Tests listing returns stored records in stored order, not sorted by id.
///
/// Expected: Ok with 200 OK response preserving insertion order
#[tokio::test]
async fn success_preserves_stored_order() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_character(factory::character(9, "Storm", "Ororo Munroe", "Marvel"))
        .with_character(factory::character(4, "Flash", "Barry Allen", "DC"))
        .build()?;

    let result = get_characters(State(test.into_app_state())).await;

    let characters: Vec<CharacterDto> = response_json(result.unwrap().into_response()).await;
    let ids: Vec<i64> = characters.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![9, 4]);

    Ok(())
}

/// Tests listing when the backing file is corrupted after startup.
///
/// Expected: Err with 500 INTERNAL_SERVER_ERROR response
#[tokio::test]
async fn error_when_store_corrupted() -> Result<(), TestError> {
    let test = TestBuilder::new().with_seed_data().build()?;
    let state = test.into_app_state();

    fs::write(&test.store_path, "{\"characters\": [")?;

    let result = get_characters(State(state)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
