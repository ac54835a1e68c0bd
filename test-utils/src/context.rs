use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::error::TestError;

/// Test context owning a temporary directory with a configuration document.
///
/// The directory and everything in it is deleted when the context is dropped, so each
/// test works on its own isolated document.
pub struct TestContext {
    /// Temporary directory holding the document.
    pub dir: TempDir,

    /// Path of the configuration document inside `dir`.
    pub config_path: PathBuf,
}

impl TestContext {
    /// Reads and parses the document currently on disk.
    ///
    /// Used to assert what a store actually persisted, independently of its in-memory
    /// state.
    ///
    /// # Returns
    /// - `Ok(Value)` - The parsed document
    /// - `Err(TestError::Io)` - The document could not be read
    /// - `Err(TestError::Json)` - The document is not valid JSON
    pub fn read_document(&self) -> Result<Value, TestError> {
        let contents = std::fs::read_to_string(&self.config_path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Deletes the directory holding the document.
    ///
    /// Any later write to `config_path` fails, which lets tests exercise persistence
    /// failures.
    ///
    /// # Returns
    /// - `Ok(())` - Directory removed
    /// - `Err(TestError::Io)` - Directory could not be removed
    pub fn remove_storage(&self) -> Result<(), TestError> {
        std::fs::remove_dir_all(self.dir.path())?;
        Ok(())
    }
}
