//! `waymark list` command implementation.

use crate::config::load_config;
use crate::core::controller::{WORKOUTS_KEY, list_entry};
use crate::error::Result;
use crate::storage::record::{StoredWorkout, decode_collection};
use crate::storage::{FileBackend, WorkoutStore};

/// Run the list command.
///
/// Shows all logged workouts with their IDs, creation time, and rendered
/// entry, straight from the store.
///
/// # Errors
///
/// Returns an error if configuration or the storage backend fails.
pub fn run() -> Result<()> {
    let config = load_config()?;
    let store = FileBackend::new(config.storage.path.clone())?;

    let stored = load_stored(&store)?;

    if stored.is_empty() {
        println!("No workouts logged.");
        println!("\nWorkouts are stored in: {}", config.storage.path.display());
        return Ok(());
    }

    println!("{:<38} {:<20} Workout", "ID", "Created");
    println!("{}", "─".repeat(100));

    let count = stored.len();
    for record in stored {
        let created = super::format_local_time(record.created_at);
        let workout = record.into_workout();

        println!("{:<38} {:<20} {}", workout.id, created, list_entry(&workout));
    }

    println!("{}", "─".repeat(100));
    println!("Showing {count} workout(s)");

    Ok(())
}

/// Load and decode the stored collection. A corrupt blob degrades to an
/// empty listing with a warning, same as session restore.
fn load_stored(store: &dyn WorkoutStore) -> Result<Vec<StoredWorkout>> {
    let Some(blob) = store.load(WORKOUTS_KEY)? else {
        return Ok(Vec::new());
    };

    match decode_collection(&blob) {
        Ok(stored) => Ok(stored),
        Err(e) => {
            eprintln!("waymark: warning: stored workouts are corrupt: {e}");
            Ok(Vec::new())
        }
    }
}
