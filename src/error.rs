//! Error types for waymark.

use std::io;
use thiserror::Error;

/// Result type alias for waymark operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in waymark operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Storage I/O error.
    #[error("Storage error: {0}")]
    Storage(#[from] io::Error),

    /// Persisted workout data failed to decode.
    #[error("Corrupt workout data: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// Form input rejected during validation.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Location request denied or failed.
    #[error("Location unavailable: {0}")]
    LocationUnavailable(String),

    /// No workout with the given id.
    #[error("Unknown workout: {0}")]
    UnknownWorkout(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}
