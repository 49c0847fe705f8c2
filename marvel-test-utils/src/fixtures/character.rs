//! Character fixtures written into test stores.
//!
//! Fixtures mirror the on-disk JSON layout of the store rather than the application's types so
//! tests exercise the same parsing path as a real backing file.

use serde::{Deserialize, Serialize};

/// A character record as it appears in the backing file
///
/// Fields the API stored as absent are `None` and omitted when written back.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterFixture {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub universe: Option<String>,
}

/// The document layout of the backing file
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentFixture {
    pub characters: Vec<CharacterFixture>,
}

pub mod factory {
    use super::CharacterFixture;

    /// Build a character fixture
    pub fn character(id: i64, name: &str, real_name: &str, universe: &str) -> CharacterFixture {
        CharacterFixture {
            id,
            name: Some(name.to_string()),
            real_name: Some(real_name.to_string()),
            universe: Some(universe.to_string()),
        }
    }

    /// The three characters a fresh store is seeded with
    pub fn seed_characters() -> Vec<CharacterFixture> {
        vec![
            character(1, "Spider-Man", "Peter Parker", "Marvel"),
            character(2, "Iron Man", "Tony Stark", "Marvel"),
            character(3, "Batman", "Bruce Wayne", "DC"),
        ]
    }
}
