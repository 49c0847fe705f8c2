use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use dioxus_logger::tracing;

use crate::{
    model::{
        api::ErrorDto,
        character::{CharacterDto, DeletedCharacterDto, NewCharacterDto},
    },
    server::{
        data::character::CharacterRepository,
        error::{character::CharacterError, Error},
        model::app::AppState,
    },
};

pub static CHARACTER_TAG: &str = "character";

/// Parses a character id from a request path segment.
///
/// Ids are compared numerically on every route; a segment that is not a base-10 integer can
/// never match a stored character and is reported as not found.
pub fn parse_character_id(id: &str) -> Result<i64, CharacterError> {
    id.parse::<i64>()
        .map_err(|_| CharacterError::NotFound(id.to_string()))
}

/// List all characters
#[utoipa::path(
    get,
    path = "/characters",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "Success when listing characters", body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_characters(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let character_repository = CharacterRepository::new(&state.store);

    let characters = character_repository.get_all().await?;

    tracing::info!("GET /characters - {} characters found", characters.len());

    Ok((StatusCode::OK, Json(characters)))
}

/// Create a character
///
/// The id is assigned by the server as one past the highest stored id. Fields may be omitted;
/// a field that is present must be a string.
#[utoipa::path(
    post,
    path = "/characters",
    tag = CHARACTER_TAG,
    request_body = NewCharacterDto,
    responses(
        (status = 201, description = "Character created", body = CharacterDto),
        (status = 422, description = "Body is not a character", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_character(
    State(state): State<AppState>,
    payload: Result<Json<NewCharacterDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let character_repository = CharacterRepository::new(&state.store);

    let Json(payload) = payload?;
    let character = character_repository.create(payload).await?;

    tracing::info!(
        id = %character.id,
        "POST /characters - created character {:?}",
        character.name
    );

    Ok((StatusCode::CREATED, Json(character)))
}

/// Get a character by id
#[utoipa::path(
    get,
    path = "/characters/{id}",
    tag = CHARACTER_TAG,
    params(("id" = String, Path, description = "Character id")),
    responses(
        (status = 200, description = "Character found", body = CharacterDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let character_repository = CharacterRepository::new(&state.store);

    let character_id = parse_character_id(&id)?;

    let Some(character) = character_repository.get_by_id(character_id).await? else {
        return Err(CharacterError::NotFound(id).into());
    };

    tracing::info!(
        "GET /characters/{} - found character {:?}",
        character.id,
        character.name
    );

    Ok((StatusCode::OK, Json(character)))
}

/// Replace a character by id
///
/// Overwrites name, real name, and universe; the id is preserved.
#[utoipa::path(
    put,
    path = "/characters/{id}",
    tag = CHARACTER_TAG,
    params(("id" = String, Path, description = "Character id")),
    request_body = NewCharacterDto,
    responses(
        (status = 200, description = "Character updated", body = CharacterDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 422, description = "Body is not a character", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_character(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<NewCharacterDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let character_repository = CharacterRepository::new(&state.store);

    let character_id = parse_character_id(&id)?;
    let Json(payload) = payload?;

    let Some(character) = character_repository
        .update(character_id, payload)
        .await?
    else {
        return Err(CharacterError::NotFound(id).into());
    };

    tracing::info!(
        "PUT /characters/{} - updated character {:?}",
        character.id,
        character.name
    );

    Ok((StatusCode::OK, Json(character)))
}

/// Delete a character by id
#[utoipa::path(
    delete,
    path = "/characters/{id}",
    tag = CHARACTER_TAG,
    params(("id" = String, Path, description = "Character id")),
    responses(
        (status = 200, description = "Character deleted", body = DeletedCharacterDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_character(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let character_repository = CharacterRepository::new(&state.store);

    let character_id = parse_character_id(&id)?;

    let Some(character) = character_repository.delete(character_id).await? else {
        return Err(CharacterError::NotFound(id).into());
    };

    tracing::info!(
        "DELETE /characters/{} - deleted character {:?}",
        character.id,
        character.name
    );

    Ok((
        StatusCode::OK,
        Json(DeletedCharacterDto {
            message: "Character deleted".to_string(),
            deleted_character: character,
        }),
    ))
}
