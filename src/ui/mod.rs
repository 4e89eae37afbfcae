//! Adapter traits for the UI and platform boundaries.
//!
//! The session controller only ever talks to these traits. Real frontends
//! implement them over an actual map widget and form; the CLI uses the
//! console shims in [`console`]; tests use the recording doubles in
//! [`recording`].

pub mod console;
pub mod location;
pub mod recording;

pub use console::{ConsoleForm, ConsoleList, ConsoleMap};
pub use location::{FixedLocation, UnavailableLocation};

use crate::core::workout::{Coordinates, WorkoutKind};
use crate::error::Result;

/// Source of the user's current position.
///
/// Single-shot: the controller asks once during initialization.
pub trait LocationProvider {
    /// Resolve the current position.
    ///
    /// # Errors
    ///
    /// Returns `Error::LocationUnavailable` when access is denied or the
    /// lookup fails.
    fn request_current_location(&self) -> Result<Coordinates>;
}

/// Interactive map showing one marker per workout.
pub trait MapWidget {
    /// Centre the map for the first time at the given zoom level.
    fn initialize(&mut self, center: Coordinates, zoom: u8);

    /// Drop a marker with an attached popup.
    fn add_marker(&mut self, coords: Coordinates, popup_text: &str, popup_style_key: &str);

    /// Move the view to the coordinates.
    fn pan_to(&mut self, coords: Coordinates, animated: bool);
}

/// Input form for logging one workout.
pub trait WorkoutForm {
    /// Make the form visible.
    fn show(&mut self);

    /// Hide the form.
    fn hide(&mut self);

    /// Blank out all field values.
    fn clear_fields(&mut self);

    /// Swap the kind-specific field between cadence and elevation gain.
    fn toggle_field_set(&mut self, kind: WorkoutKind);
}

/// Rendered list of logged workouts.
pub trait WorkoutList {
    /// Append one rendered entry. `id` identifies the entry so later click
    /// events can name it.
    fn append_item(&mut self, id: &str, rendered: &str);
}

/// Raw field values exactly as the form collected them.
///
/// Numeric fields stay strings until [`crate::core::validation`] parses
/// them; the kind-irrelevant field is simply left empty.
#[derive(Debug, Clone, Default)]
pub struct FormSubmission {
    /// Workout kind slug ("running" / "cycling").
    pub kind: String,

    /// Distance field, kilometres.
    pub distance: String,

    /// Duration field, minutes.
    pub duration: String,

    /// Cadence field, steps per minute (running only).
    pub cadence: String,

    /// Elevation gain field, metres (cycling only).
    pub elevation_gain: String,
}
