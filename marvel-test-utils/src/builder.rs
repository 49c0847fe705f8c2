//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for preparing the backing file a test runs against.
//! Configuration methods are chained together and applied during the final `build()` call, which
//! writes the file into a fresh temporary directory.

use std::fs;

use tempfile::TempDir;

use crate::{
    error::TestError,
    fixtures::character::{factory, CharacterFixture, DocumentFixture},
    TestContext,
};

pub static STORE_FILE_NAME: &str = "characters.json";

enum StoreContents {
    Missing,
    Document(DocumentFixture),
    Raw(String),
}

/// Builder for declarative test initialization.
///
/// By default the backing file is absent, leaving the application to seed it on startup.
pub struct TestBuilder {
    contents: StoreContents,
}

impl TestBuilder {
    /// Create a new TestBuilder with no backing file.
    pub fn new() -> Self {
        Self {
            contents: StoreContents::Missing,
        }
    }

    /// Write the three seed characters to the backing file.
    pub fn with_seed_data(mut self) -> Self {
        self.contents = StoreContents::Document(DocumentFixture {
            characters: factory::seed_characters(),
        });
        self
    }

    /// Write a backing file with an empty character list.
    pub fn with_empty_store(mut self) -> Self {
        self.contents = StoreContents::Document(DocumentFixture::default());
        self
    }

    /// Append a character to the backing file.
    ///
    /// Starts from an empty document if no document has been configured yet.
    ///
    /// # Arguments
    /// - `character` - Character record to write, see [`factory::character`]
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_character(mut self, character: CharacterFixture) -> Self {
        match &mut self.contents {
            StoreContents::Document(document) => document.characters.push(character),
            _ => {
                self.contents = StoreContents::Document(DocumentFixture {
                    characters: vec![character],
                })
            }
        }
        self
    }

    /// Write arbitrary text as the backing file, such as a corrupted document.
    pub fn with_raw_contents(mut self, contents: &str) -> Self {
        self.contents = StoreContents::Raw(contents.to_string());
        self
    }

    /// Create the temporary directory and write the configured backing file.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context owning the temporary directory
    /// - `Err(TestError)` - The directory or file could not be created
    pub fn build(self) -> Result<TestContext, TestError> {
        let dir = TempDir::new()?;
        let store_path = dir.path().join(STORE_FILE_NAME);

        match self.contents {
            StoreContents::Missing => (),
            StoreContents::Document(document) => {
                fs::write(&store_path, serde_json::to_string_pretty(&document)?)?
            }
            StoreContents::Raw(contents) => fs::write(&store_path, contents)?,
        }

        Ok(TestContext { dir, store_path })
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
