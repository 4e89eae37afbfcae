//! `waymark log` command implementation.

use crate::core::workout::{Coordinates, WorkoutKind};
use crate::error::Result;
use crate::ui::FormSubmission;

/// Run the log command.
///
/// Drives one full session: restore and replay, pick the given location,
/// then submit the form fields. Numeric fields arrive as raw strings so
/// they go through the same validation a form would.
///
/// # Errors
///
/// Returns an error if configuration or storage fails, or if the
/// submission is rejected by validation.
pub fn run(
    kind: &str,
    latitude: f64,
    longitude: f64,
    distance: &str,
    duration: &str,
    cadence: Option<&str>,
    elevation: Option<&str>,
) -> Result<()> {
    let mut controller = super::build_controller()?;
    controller.initialize();

    // Mirror the form's kind selector before submitting
    if let Ok(parsed) = kind.trim().parse::<WorkoutKind>() {
        controller.on_kind_changed(parsed);
    }

    controller.on_map_location_picked(Coordinates::new(latitude, longitude));

    let submission = FormSubmission {
        kind: kind.to_string(),
        distance: distance.to_string(),
        duration: duration.to_string(),
        cadence: cadence.unwrap_or_default().to_string(),
        elevation_gain: elevation.unwrap_or_default().to_string(),
    };

    let workout = controller.on_form_submitted(&submission)?;
    println!("Logged {} ({})", workout.description, workout.id);

    Ok(())
}
