//! Calls to the character API.
//!
//! Every function maps a non-success response to `Err` with the status and, when the body is an
//! [`ErrorDto`](crate::model::api::ErrorDto), the server's error message.

use serde::de::DeserializeOwned;

use crate::model::character::{CharacterDto, DeletedCharacterDto, NewCharacterDto};

/// Base URL of the API, overridable at compile time through `API_BASE_URL`
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};

#[derive(Clone, Copy)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Retrieve all characters from API
pub async fn get_characters() -> Result<Vec<CharacterDto>, String> {
    send(Method::Get, "/characters".to_string(), None).await
}

pub async fn create_character(character: &NewCharacterDto) -> Result<CharacterDto, String> {
    send(Method::Post, "/characters".to_string(), Some(character)).await
}

pub async fn update_character(
    id: i64,
    character: &NewCharacterDto,
) -> Result<CharacterDto, String> {
    send(Method::Put, format!("/characters/{}", id), Some(character)).await
}

pub async fn delete_character(id: i64) -> Result<DeletedCharacterDto, String> {
    send(Method::Delete, format!("/characters/{}", id), None).await
}

#[cfg(feature = "web")]
async fn send<T: DeserializeOwned>(
    method: Method,
    path: String,
    body: Option<&NewCharacterDto>,
) -> Result<T, String> {
    use reqwasm::http::Request;

    let url = format!("{}{}", API_BASE_URL, path);

    let mut request = match method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
        Method::Delete => Request::delete(&url),
    };

    if let Some(body) = body {
        let body = serde_json::to_string(body)
            .map_err(|e| format!("Failed to serialize request body: {}", e))?;

        request = request.header("Content-Type", "application/json").body(body);
    }

    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to send request to {}: {}", url, e))?;

    if response.ok() {
        return response
            .json::<T>()
            .await
            .map_err(|e| format!("Failed to parse response from {}: {}", url, e));
    }

    use crate::model::api::ErrorDto;

    if let Ok(error_dto) = response.json::<ErrorDto>().await {
        Err(format!(
            "Request failed with status {}: {}",
            response.status(),
            error_dto.error
        ))
    } else {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(format!(
            "Request failed with status {}: {}",
            response.status(),
            error_text
        ))
    }
}

#[cfg(not(feature = "web"))]
async fn send<T: DeserializeOwned>(
    _method: Method,
    path: String,
    _body: Option<&NewCharacterDto>,
) -> Result<T, String> {
    Err(format!(
        "Cannot request {}{}: the HTTP client requires the `web` feature",
        API_BASE_URL, path
    ))
}
