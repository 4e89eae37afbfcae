//! File-based storage backend.

use crate::error::Result;
use crate::storage::traits::WorkoutStore;
use std::fs;
use std::path::PathBuf;

/// File-based storage backend with atomic writes.
///
/// Each key maps to `<base_dir>/<key>.json`. The file holds whatever blob
/// was saved; the backend never inspects it.
#[derive(Debug)]
pub struct FileBackend {
    base_dir: PathBuf,
}

impl FileBackend {
    /// Create a new file backend.
    ///
    /// Creates the base directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the base directory cannot be created.
    pub fn new(base_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    /// Get the path to a key's blob file.
    fn blob_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }
}

impl WorkoutStore for FileBackend {
    fn save(&self, key: &str, blob: &str) -> Result<()> {
        let path = self.blob_path(key);
        let temp = path.with_extension("tmp");

        // Write to temp file first
        fs::write(&temp, blob)?;

        // Atomic rename - prevents corruption if process crashes mid-write
        fs::rename(&temp, &path)?;

        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.blob_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)?;
        Ok(Some(contents))
    }

    fn clear(&self, key: &str) -> Result<()> {
        let path = self.blob_path(key);
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }
}
