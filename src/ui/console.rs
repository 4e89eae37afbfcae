//! Console implementations of the UI adapters.
//!
//! The CLI has no real map or form. These shims print what the widgets
//! would show, so a session driven from a terminal stays observable.

use crate::core::workout::{Coordinates, WorkoutKind};
use crate::ui::{MapWidget, WorkoutForm, WorkoutList};

/// Map shim that narrates marker and view changes on stdout.
#[derive(Debug, Default)]
pub struct ConsoleMap;

impl MapWidget for ConsoleMap {
    fn initialize(&mut self, center: Coordinates, zoom: u8) {
        println!("map: centred on {center} (zoom {zoom})");
    }

    fn add_marker(&mut self, coords: Coordinates, popup_text: &str, _popup_style_key: &str) {
        println!("map: marker at {coords}: {popup_text}");
    }

    fn pan_to(&mut self, coords: Coordinates, _animated: bool) {
        println!("map: panning to {coords}");
    }
}

/// Form shim. The CLI passes field values as arguments, so there is
/// nothing to show or clear.
#[derive(Debug, Default)]
pub struct ConsoleForm;

impl WorkoutForm for ConsoleForm {
    fn show(&mut self) {}

    fn hide(&mut self) {}

    fn clear_fields(&mut self) {}

    fn toggle_field_set(&mut self, _kind: WorkoutKind) {}
}

/// List shim that prints each rendered entry as a line.
#[derive(Debug, Default)]
pub struct ConsoleList;

impl WorkoutList for ConsoleList {
    fn append_item(&mut self, _id: &str, rendered: &str) {
        println!("{rendered}");
    }
}
