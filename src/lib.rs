//! waymark - map-pinned workout log.
//!
//! Records running and cycling workouts against the map location they
//! happened at, derives pace and speed once at construction, and persists
//! the whole log across sessions as a single keyed blob.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod storage;
pub mod ui;

pub use config::Config;
pub use error::{Error, Result};
