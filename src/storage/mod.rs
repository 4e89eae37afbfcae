//! Storage backends for the persisted workout collection.

pub mod file;
pub mod memory;
pub mod record;
pub mod traits;

pub use file::FileBackend;
pub use memory::MemoryBackend;
pub use record::{StoredDetails, StoredWorkout};
pub use traits::WorkoutStore;
