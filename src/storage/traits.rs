//! Storage trait definitions.

use crate::error::Result;
use std::sync::Arc;

/// Key-value store for the persisted workout collection.
///
/// Blobs are opaque strings; encoding and decoding happen in
/// [`crate::storage::record`], never in the store. Persistence is
/// whole-collection: one key, one blob, replaced on every save.
pub trait WorkoutStore: Send + Sync {
    /// Save a blob under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn save(&self, key: &str, blob: &str) -> Result<()>;

    /// Load the blob stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Remove the blob stored under `key`. Clearing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn clear(&self, key: &str) -> Result<()>;
}

/// Forwarding impl so a test can keep a handle to a store the session
/// controller owns.
impl<S: WorkoutStore + ?Sized> WorkoutStore for Arc<S> {
    fn save(&self, key: &str, blob: &str) -> Result<()> {
        (**self).save(key, blob)
    }

    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn clear(&self, key: &str) -> Result<()> {
        (**self).clear(key)
    }
}
