//! JSON file backed character store.
//!
//! The backing file is the system of record. [`CharacterStore`] is its only owner: the path sits
//! behind an async mutex so every read-modify-write cycle runs to completion before the next one
//! starts, and documents are written through a temporary file that is renamed over the original.
//!
//! File access is blocking, so each cycle runs on the blocking thread pool while the lock is held.
//!
//! Only the members the application knows about are kept. Unknown members in a stored record or
//! at the top level of the document are dropped the next time the document is rewritten.

use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
    sync::Arc,
};

use dioxus_logger::tracing;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::{model::character::CharacterDto, server::error::store::StoreError};

/// On-disk layout of the store
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterDocument {
    pub characters: Vec<CharacterDto>,
}

impl CharacterDocument {
    /// The document written when no usable store exists at startup
    pub fn seed() -> Self {
        let seed = |id: i64, name: &str, real_name: &str, universe: &str| CharacterDto {
            id,
            name: Some(name.to_string()),
            real_name: Some(real_name.to_string()),
            universe: Some(universe.to_string()),
        };

        Self {
            characters: vec![
                seed(1, "Spider-Man", "Peter Parker", "Marvel"),
                seed(2, "Iron Man", "Tony Stark", "Marvel"),
                seed(3, "Batman", "Bruce Wayne", "DC"),
            ],
        }
    }

    /// Id for the next created character: one past the highest id, or 1 when empty.
    ///
    /// Deleted ids are never handed out again as long as a higher id remains. Fails once the
    /// highest id is `i64::MAX`.
    pub fn next_id(&self) -> Result<i64, StoreError> {
        match self.characters.iter().map(|c| c.id).max() {
            None => Ok(1),
            Some(max) => max.checked_add(1).ok_or(StoreError::IdsExhausted(max)),
        }
    }

    pub fn position(&self, id: i64) -> Option<usize> {
        self.characters.iter().position(|c| c.id == id)
    }
}

/// Handle to the backing file, only reachable through [`CharacterStore::lock`]
pub struct StoreFile {
    path: PathBuf,
}

impl StoreFile {
    /// Reads and parses the whole document
    pub fn load(&self) -> Result<CharacterDocument, StoreError> {
        let content = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Replaces the whole document on disk
    ///
    /// The document is written to a temporary file in the same directory, synced, then renamed
    /// over the store so readers never observe a partially written file.
    pub fn save(&mut self, document: &CharacterDocument) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(document).map_err(StoreError::Serialize)?;

        let write_error = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(write_error)?;
        temp.write_all(content.as_bytes()).map_err(write_error)?;
        temp.as_file().sync_all().map_err(write_error)?;
        temp.persist(&self.path).map_err(|e| write_error(e.error))?;

        Ok(())
    }
}

pub struct CharacterStore {
    path: PathBuf,
    file: Arc<Mutex<StoreFile>>,
}

impl CharacterStore {
    /// Opens the store at `path`, writing the seed document if no usable store exists.
    ///
    /// A missing file or a file that does not parse as a store document is replaced by the seed
    /// document. Any other I/O failure is returned.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let mut file = StoreFile { path: path.clone() };

        match file.load() {
            Ok(document) => {
                tracing::info!(
                    path = %path.display(),
                    "Loaded character store with {} characters",
                    document.characters.len()
                );
            }
            Err(StoreError::Read { source, .. }) if source.kind() == ErrorKind::NotFound => {
                file.save(&CharacterDocument::seed())?;

                tracing::info!(path = %path.display(), "Created character store with seed data");
            }
            Err(StoreError::Parse { source, .. }) => {
                tracing::warn!(
                    path = %path.display(),
                    "Character store is malformed ({}), replacing it with seed data",
                    source
                );

                file.save(&CharacterDocument::seed())?;
            }
            Err(err) => return Err(err),
        }

        Ok(Self {
            path,
            file: Arc::new(Mutex::new(file)),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Runs one read-modify-write cycle with exclusive access to the backing file.
    ///
    /// `cycle` runs on the blocking thread pool and the lock is held until it returns.
    pub async fn transact<T, F>(&self, cycle: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut StoreFile) -> Result<T, StoreError> + Send + 'static,
        T: Send + 'static,
    {
        let mut file = self.file.clone().lock_owned().await;

        tokio::task::spawn_blocking(move || cycle(&mut file)).await?
    }
}
