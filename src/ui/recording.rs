//! Recording test doubles for the UI adapters.
//!
//! Each double appends every call it receives to a shared log, so a test
//! holding the log handle can assert the exact sequence of UI effects an
//! operation produced. Shared via `Rc<RefCell<_>>` to match the
//! single-threaded session model.

use crate::core::workout::{Coordinates, WorkoutKind};
use crate::ui::{MapWidget, WorkoutForm, WorkoutList};
use std::cell::RefCell;
use std::rc::Rc;

/// One recorded adapter call.
#[derive(Debug, Clone, PartialEq)]
pub enum UiCall {
    /// `MapWidget::initialize`.
    MapInitialized {
        /// Centre the map was given.
        center: Coordinates,

        /// Zoom level the map was given.
        zoom: u8,
    },

    /// `MapWidget::add_marker`.
    MarkerAdded {
        /// Marker position.
        coords: Coordinates,

        /// Popup text attached to the marker.
        popup_text: String,

        /// Style key attached to the popup.
        popup_style_key: String,
    },

    /// `MapWidget::pan_to`.
    PannedTo {
        /// Target position.
        coords: Coordinates,

        /// Whether the move was animated.
        animated: bool,
    },

    /// `WorkoutForm::show`.
    FormShown,

    /// `WorkoutForm::hide`.
    FormHidden,

    /// `WorkoutForm::clear_fields`.
    FieldsCleared,

    /// `WorkoutForm::toggle_field_set`.
    FieldSetToggled {
        /// Kind the form switched to.
        kind: WorkoutKind,
    },

    /// `WorkoutList::append_item`.
    ItemAppended {
        /// Entry id.
        id: String,

        /// Rendered entry text.
        rendered: String,
    },
}

/// Shared call log handle.
pub type CallLog = Rc<RefCell<Vec<UiCall>>>;

/// Create an empty call log to hand to the recording doubles.
#[must_use]
pub fn new_call_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Map double writing to a shared call log.
pub struct RecordingMap {
    calls: CallLog,
}

impl RecordingMap {
    /// Create a map double appending to `calls`.
    #[must_use]
    pub fn new(calls: CallLog) -> Self {
        Self { calls }
    }
}

impl MapWidget for RecordingMap {
    fn initialize(&mut self, center: Coordinates, zoom: u8) {
        self.calls
            .borrow_mut()
            .push(UiCall::MapInitialized { center, zoom });
    }

    fn add_marker(&mut self, coords: Coordinates, popup_text: &str, popup_style_key: &str) {
        self.calls.borrow_mut().push(UiCall::MarkerAdded {
            coords,
            popup_text: popup_text.to_string(),
            popup_style_key: popup_style_key.to_string(),
        });
    }

    fn pan_to(&mut self, coords: Coordinates, animated: bool) {
        self.calls
            .borrow_mut()
            .push(UiCall::PannedTo { coords, animated });
    }
}

/// Form double writing to a shared call log.
pub struct RecordingForm {
    calls: CallLog,
}

impl RecordingForm {
    /// Create a form double appending to `calls`.
    #[must_use]
    pub fn new(calls: CallLog) -> Self {
        Self { calls }
    }
}

impl WorkoutForm for RecordingForm {
    fn show(&mut self) {
        self.calls.borrow_mut().push(UiCall::FormShown);
    }

    fn hide(&mut self) {
        self.calls.borrow_mut().push(UiCall::FormHidden);
    }

    fn clear_fields(&mut self) {
        self.calls.borrow_mut().push(UiCall::FieldsCleared);
    }

    fn toggle_field_set(&mut self, kind: WorkoutKind) {
        self.calls
            .borrow_mut()
            .push(UiCall::FieldSetToggled { kind });
    }
}

/// List double writing to a shared call log.
pub struct RecordingList {
    calls: CallLog,
}

impl RecordingList {
    /// Create a list double appending to `calls`.
    #[must_use]
    pub fn new(calls: CallLog) -> Self {
        Self { calls }
    }
}

impl WorkoutList for RecordingList {
    fn append_item(&mut self, id: &str, rendered: &str) {
        self.calls.borrow_mut().push(UiCall::ItemAppended {
            id: id.to_string(),
            rendered: rendered.to_string(),
        });
    }
}
