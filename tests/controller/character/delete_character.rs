//! Tests for the delete_character endpoint.
//!
//! This module verifies deletes remove exactly one record and return it in the confirmation
//! payload, and that deleting an unknown id is reported as not found.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use marvel_characters::{
    model::character::DeletedCharacterDto,
    server::controller::character::{delete_character, get_character},
};

use super::*;

/// Tests deleting an existing character.
///
/// Expected: Ok with 200 OK response containing the deleted character
#[tokio::test]
async fn success_returns_deleted_character() -> Result<(), TestError> {
    let test = TestBuilder::new().with_seed_data().build()?;
    let state = test.into_app_state();

    let result = delete_character(State(state.clone()), Path("2".to_string())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: DeletedCharacterDto = response_json(resp).await;
    assert_eq!(body.message, "Character deleted");
    assert_eq!(body.deleted_character.id, 2);
    assert_eq!(body.deleted_character.name.as_deref(), Some("Iron Man"));
    assert_eq!(test.stored_ids()?, vec![1, 3]);

    // Ensure character has actually been deleted
    let lookup = get_character(State(state), Path("2".to_string())).await;
    assert!(lookup.is_err());
    let resp = lookup.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests deleting an id that matches no character.
///
/// Expected: Err with 404 NOT_FOUND response and no record removed
#[tokio::test]
async fn not_found_for_unknown_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_seed_data().build()?;

    let result = delete_character(State(test.into_app_state()), Path("7".to_string())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(test.stored_ids()?, vec![1, 2, 3]);

    Ok(())
}
