//! In-memory storage backend for testing.

use crate::error::Result;
use crate::storage::traits::WorkoutStore;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory storage backend for testing.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    blobs: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
    /// Create a new in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WorkoutStore for MemoryBackend {
    fn save(&self, key: &str, blob: &str) -> Result<()> {
        let mut blobs = self.blobs.write().unwrap();
        blobs.insert(key.to_string(), blob.to_string());
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<String>> {
        let blobs = self.blobs.read().unwrap();
        Ok(blobs.get(key).cloned())
    }

    fn clear(&self, key: &str) -> Result<()> {
        let mut blobs = self.blobs.write().unwrap();
        blobs.remove(key);
        Ok(())
    }
}
