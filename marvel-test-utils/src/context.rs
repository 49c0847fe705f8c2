use std::{fs, path::PathBuf};

use tempfile::TempDir;

use crate::{error::TestError, fixtures::character::DocumentFixture};

/// A prepared test environment.
///
/// The temporary directory, and the backing file inside it, is removed when the context drops.
pub struct TestContext {
    pub dir: TempDir,
    pub store_path: PathBuf,
}

impl TestContext {
    /// Read the backing file as raw text
    pub fn read_raw(&self) -> Result<String, TestError> {
        Ok(fs::read_to_string(&self.store_path)?)
    }

    /// Parse the backing file into its document layout
    pub fn read_document(&self) -> Result<DocumentFixture, TestError> {
        Ok(serde_json::from_str(&self.read_raw()?)?)
    }

    /// Ids stored in the backing file, in stored order
    pub fn stored_ids(&self) -> Result<Vec<i64>, TestError> {
        Ok(self
            .read_document()?
            .characters
            .iter()
            .map(|c| c.id)
            .collect())
    }
}
