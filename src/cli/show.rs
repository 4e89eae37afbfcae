//! `waymark show` command implementation.

use crate::core::workout::WorkoutDetails;
use crate::error::{Error, Result};

/// Run the show command.
///
/// Drives a session, selects the workout with the given id (panning the
/// console map to it), and prints its details.
///
/// # Errors
///
/// Returns an error if configuration or storage fails, or if no workout
/// has the given id.
pub fn run(id: &str) -> Result<()> {
    let mut controller = super::build_controller()?;
    controller.initialize();

    let workout = controller
        .on_workout_selected(id)
        .ok_or_else(|| Error::UnknownWorkout(id.to_string()))?;

    println!();
    println!("{}", workout.description);
    println!("  id:        {}", workout.id);
    println!("  logged:    {}", super::format_local_time(workout.created_at));
    println!("  location:  {}", workout.coords);
    println!("  distance:  {} km", workout.distance_km);
    println!("  duration:  {} min", workout.duration_min);

    match workout.details {
        WorkoutDetails::Running {
            cadence_spm,
            pace_min_per_km,
        } => {
            println!("  pace:      {pace_min_per_km:.1} min/km");
            println!("  cadence:   {cadence_spm} spm");
        }
        WorkoutDetails::Cycling {
            elevation_gain_m,
            speed_kmh,
        } => {
            println!("  speed:     {speed_kmh:.1} km/h");
            println!("  elevation: {elevation_gain_m} m");
        }
    }

    println!("  selected:  {} time(s)", workout.interaction_count);

    Ok(())
}
