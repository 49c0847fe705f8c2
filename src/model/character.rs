use serde::{Deserialize, Serialize};

/// A stored character.
///
/// The user supplied fields are optional because the API stores whatever the client sent;
/// fields missing from a request are omitted from the stored record rather than written as `null`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CharacterDto {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub universe: Option<String>,
}

impl CharacterDto {
    /// Builds a record with the given id from the user supplied fields
    pub fn from_new(id: i64, character: NewCharacterDto) -> Self {
        Self {
            id,
            name: character.name,
            real_name: character.real_name,
            universe: character.universe,
        }
    }
}

/// Request body used both to create a character and to replace an existing one
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct NewCharacterDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub universe: Option<String>,
}

/// Confirmation returned after a character has been deleted
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct DeletedCharacterDto {
    pub message: String,
    pub deleted_character: CharacterDto,
}
