//! Tests for the create_character endpoint.
//!
//! This module verifies id assignment, the 201 response, persistence of the new record, and
//! that absent fields are stored without server-side validation.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use marvel_characters::{
    model::{
        api::ErrorDto,
        character::{CharacterDto, NewCharacterDto},
    },
    server::controller::character::{create_character, get_characters},
};

use marvel_test_utils::fixtures::character::CharacterFixture;

use super::*;

fn hulk() -> NewCharacterDto {
    NewCharacterDto {
        name: Some("Hulk".to_string()),
        real_name: Some("Bruce Banner".to_string()),
        universe: Some("Marvel".to_string()),
    }
}

/// Tests creating after the seed characters.
///
/// Expected: Ok with 201 CREATED response and id 4
#[tokio::test]
async fn created_with_next_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_seed_data().build()?;

    let result =
        create_character(State(test.into_app_state()), Ok(Json(hulk()))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let character: CharacterDto = response_json(resp).await;
    assert_eq!(character.id, 4);
    assert_eq!(character.name.as_deref(), Some("Hulk"));
    assert_eq!(character.real_name.as_deref(), Some("Bruce Banner"));
    assert_eq!(character.universe.as_deref(), Some("Marvel"));
    assert_eq!(test.stored_ids()?, vec![1, 2, 3, 4]);

    Ok(())
}

/// Tests creating in an empty store.
///
/// Expected: Ok with 201 CREATED response and id 1
#[tokio::test]
async fn created_with_id_one_when_empty() -> Result<(), TestError> {
    let test = TestBuilder::new().with_empty_store().build()?;

    let result =
        create_character(State(test.into_app_state()), Ok(Json(hulk()))).await;

    let character: CharacterDto = response_json(result.unwrap().into_response()).await;
    assert_eq!(character.id, 1);

    Ok(())
}

/// Tests ids follow the highest stored id even when lower ids are free.
///
/// Expected: Ok with 201 CREATED response and id one past the maximum
#[tokio::test]
async fn created_after_highest_id_with_gaps() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_character(factory::character(2, "Storm", "Ororo Munroe", "Marvel"))
        .with_character(factory::character(10, "Flash", "Barry Allen", "DC"))
        .build()?;

    let result =
        create_character(State(test.into_app_state()), Ok(Json(hulk()))).await;

    let character: CharacterDto = response_json(result.unwrap().into_response()).await;
    assert_eq!(character.id, 11);

    Ok(())
}

/// Tests listing after several creates returns every record with unique ids in creation order.
///
/// Expected: every created character listed after the seed characters
#[tokio::test]
async fn listed_after_multiple_creates() -> Result<(), TestError> {
    let test = TestBuilder::new().with_seed_data().build()?;
    let state = test.into_app_state();

    for name in ["Hulk", "Thor", "Vision"] {
        let character = NewCharacterDto {
            name: Some(name.to_string()),
            ..hulk()
        };
        create_character(State(state.clone()), Ok(Json(character)))
            .await
            .unwrap();
    }

    let resp = get_characters(State(state)).await.unwrap().into_response();
    let characters: Vec<CharacterDto> = response_json(resp).await;
    let created: Vec<(i64, Option<&str>)> = characters[3..]
        .iter()
        .map(|c| (c.id, c.name.as_deref()))
        .collect();
    assert_eq!(
        created,
        vec![(4, Some("Hulk")), (5, Some("Thor")), (6, Some("Vision"))]
    );

    Ok(())
}

/// Tests creating with absent fields, which the server does not validate.
///
/// Expected: Ok with 201 CREATED response and the absent fields omitted
#[tokio::test]
async fn created_without_validation() -> Result<(), TestError> {
    let test = TestBuilder::new().with_seed_data().build()?;

    let result = create_character(
        State(test.into_app_state()),
        Ok(Json(NewCharacterDto::default())),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let character: serde_json::Value = response_json(resp).await;
    assert_eq!(character, serde_json::json!({ "id": 4 }));

    let document = test.read_document()?;
    assert_eq!(
        document.characters.last(),
        Some(&CharacterFixture {
            id: 4,
            ..Default::default()
        })
    );
    assert!(!test.read_raw()?.contains("null"));

    Ok(())
}

/// Tests creating once the highest stored id leaves no room for another.
///
/// Expected: Err with 500 INTERNAL_SERVER_ERROR response and the backing file unchanged
#[tokio::test]
async fn error_when_ids_exhausted() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_character(factory::character(i64::MAX, "Storm", "Ororo Munroe", "Marvel"))
        .build()?;
    let state = test.into_app_state();
    let before = test.read_raw()?;

    let result = create_character(State(state), Ok(Json(hulk()))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorDto = response_json(resp).await;
    assert_eq!(body.error, "Internal server error");
    assert_eq!(test.read_raw()?, before);

    Ok(())
}

/// Tests creating when the backing file has become unreadable.
///
/// Expected: Err with 500 INTERNAL_SERVER_ERROR response
#[tokio::test]
async fn error_when_store_corrupted() -> Result<(), TestError> {
    let test = TestBuilder::new().with_seed_data().build()?;
    let state = test.into_app_state();

    std::fs::write(&test.store_path, "[]")?;

    let result = create_character(State(state), Ok(Json(hulk()))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
