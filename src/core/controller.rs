//! Session controller: owns the workout collection and drives the adapters.
//!
//! Event flow mirrors one app session: `initialize` restores the saved
//! collection and asks for a location; a map pick opens the form; a form
//! submission appends a workout, renders it, and persists the whole
//! collection; a list selection pans the map back to the workout.

use crate::config::MapConfig;
use crate::core::validation::{ValidatedSubmission, parse_submission};
use crate::core::workout::{Coordinates, Workout, WorkoutDetails, WorkoutKind};
use crate::error::{Error, Result};
use crate::storage::WorkoutStore;
use crate::storage::record::{StoredWorkout, decode_collection, encode_collection};
use crate::ui::{FormSubmission, LocationProvider, MapWidget, WorkoutForm, WorkoutList};
use chrono::Utc;

/// Storage key under which the whole collection is persisted.
pub const WORKOUTS_KEY: &str = "workout";

/// Orchestrates one session over injected adapters.
///
/// The controller is the only writer of the collection and the only
/// caller of the store. Adapters are trait objects so embedders and
/// tests can supply their own.
pub struct SessionController {
    location: Box<dyn LocationProvider>,
    map: Box<dyn MapWidget>,
    form: Box<dyn WorkoutForm>,
    list: Box<dyn WorkoutList>,
    store: Box<dyn WorkoutStore>,
    map_config: MapConfig,
    workouts: Vec<Workout>,
    pending_pick: Option<Coordinates>,
    map_ready: bool,
}

impl SessionController {
    /// Create a controller over the given adapters. Nothing happens until
    /// [`initialize`](Self::initialize) is called.
    #[must_use]
    pub fn new(
        location: Box<dyn LocationProvider>,
        map: Box<dyn MapWidget>,
        form: Box<dyn WorkoutForm>,
        list: Box<dyn WorkoutList>,
        store: Box<dyn WorkoutStore>,
        map_config: MapConfig,
    ) -> Self {
        Self {
            location,
            map,
            form,
            list,
            store,
            map_config,
            workouts: Vec::new(),
            pending_pick: None,
            map_ready: false,
        }
    }

    /// Start the session: restore persisted workouts, replay the list,
    /// then request the current location.
    ///
    /// Restoration never depends on the location request; the list
    /// populates even when no position source exists. A missing blob
    /// starts an empty session; a corrupt one warns and starts empty
    /// without touching the store.
    pub fn initialize(&mut self) {
        self.restore();

        match self.location.request_current_location() {
            Ok(coords) => self.on_location_resolved(coords),
            Err(e) => eprintln!("waymark: warning: {e}"),
        }
    }

    fn restore(&mut self) {
        let blob = match self.store.load(WORKOUTS_KEY) {
            Ok(Some(blob)) => blob,
            Ok(None) => return,
            Err(e) => {
                eprintln!("waymark: warning: failed to read stored workouts: {e}");
                return;
            }
        };

        let stored = match decode_collection(&blob) {
            Ok(stored) => stored,
            Err(e) => {
                eprintln!("waymark: warning: stored workouts are corrupt, starting empty: {e}");
                return;
            }
        };

        self.workouts = stored.into_iter().map(StoredWorkout::into_workout).collect();

        // List entries replay immediately; markers wait for the map.
        for workout in &self.workouts {
            self.list.append_item(&workout.id, &list_entry(workout));
        }
    }

    /// The position source resolved: centre the map and replay a marker
    /// for every workout already in the collection.
    pub fn on_location_resolved(&mut self, coords: Coordinates) {
        self.map.initialize(coords, self.map_config.zoom);

        for workout in &self.workouts {
            self.map.add_marker(
                workout.coords,
                &popup_text(workout),
                &popup_style_key(workout.kind()),
            );
        }

        self.map_ready = true;
    }

    /// The user picked a location on the map: remember it and open the
    /// form. Picking again before submitting overwrites the previous
    /// pick; the last one wins.
    pub fn on_map_location_picked(&mut self, coords: Coordinates) {
        self.pending_pick = Some(coords);
        self.form.show();
    }

    /// The user switched the workout kind in the form.
    pub fn on_kind_changed(&mut self, kind: WorkoutKind) {
        self.form.toggle_field_set(kind);
    }

    /// The form was submitted with raw field values.
    ///
    /// On success the workout is appended, rendered as marker and list
    /// entry, the form is cleared and hidden, and the whole collection is
    /// persisted. A persistence failure is a warning, not an error; the
    /// in-memory session continues. The pending pick is kept, so another
    /// submission without a new pick logs at the same location.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if no location is pending or any field
    /// fails validation. Nothing is constructed or rendered in that case
    /// and the form stays open.
    pub fn on_form_submitted(&mut self, raw: &FormSubmission) -> Result<&Workout> {
        let Some(coords) = self.pending_pick else {
            return Err(Error::Validation(
                "no location picked for this workout".to_string(),
            ));
        };

        let workout = match parse_submission(raw)? {
            ValidatedSubmission::Running {
                distance_km,
                duration_min,
                cadence_spm,
            } => Workout::running(coords, distance_km, duration_min, cadence_spm, Utc::now())?,
            ValidatedSubmission::Cycling {
                distance_km,
                duration_min,
                elevation_gain_m,
            } => Workout::cycling(coords, distance_km, duration_min, elevation_gain_m, Utc::now())?,
        };

        self.workouts.push(workout);
        let index = self.workouts.len() - 1;
        let workout = &self.workouts[index];

        if self.map_ready {
            self.map.add_marker(
                workout.coords,
                &popup_text(workout),
                &popup_style_key(workout.kind()),
            );
        }
        self.list.append_item(&workout.id, &list_entry(workout));

        self.form.clear_fields();
        self.form.hide();

        self.persist();

        Ok(workout)
    }

    /// A rendered list entry was selected.
    ///
    /// Known id: counts the interaction and pans the map (if ready).
    /// Unknown id: returns `None` and changes nothing; the click may
    /// reference a stale entry from before a reset.
    pub fn on_workout_selected(&mut self, id: &str) -> Option<&Workout> {
        let index = self.workouts.iter().position(|w| w.id == id)?;

        self.workouts[index].mark_interacted();

        let coords = self.workouts[index].coords;
        if self.map_ready {
            self.map.pan_to(coords, true);
        }

        Some(&self.workouts[index])
    }

    /// Clear the persisted blob, the in-memory collection, and any
    /// pending pick. Entries and markers already handed to the adapters
    /// stay as they are; the empty state shows on the next session.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be cleared.
    pub fn reset_all(&mut self) -> Result<()> {
        self.store.clear(WORKOUTS_KEY)?;
        self.workouts.clear();
        self.pending_pick = None;
        Ok(())
    }

    /// Workouts in insertion order.
    #[must_use]
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    /// Look up a workout by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id == id)
    }

    fn persist(&self) {
        let stored: Vec<StoredWorkout> =
            self.workouts.iter().map(StoredWorkout::from_workout).collect();

        let blob = match encode_collection(&stored) {
            Ok(blob) => blob,
            Err(e) => {
                eprintln!("waymark: warning: failed to encode workouts: {e}");
                return;
            }
        };

        if let Err(e) = self.store.save(WORKOUTS_KEY, &blob) {
            eprintln!("waymark: warning: failed to save workouts: {e}");
        }
    }
}

/// Marker popup text: kind icon plus description.
#[must_use]
pub fn popup_text(workout: &Workout) -> String {
    format!("{} {}", kind_icon(workout.kind()), workout.description)
}

/// Popup style key, e.g. `"running-popup"`.
#[must_use]
pub fn popup_style_key(kind: WorkoutKind) -> String {
    format!("{}-popup", kind.slug())
}

/// One rendered list line for a workout.
///
/// Reads the stored fields directly: restored entries show their metrics
/// as data, nothing is recomputed here.
#[must_use]
pub fn list_entry(workout: &Workout) -> String {
    match workout.details {
        WorkoutDetails::Running {
            cadence_spm,
            pace_min_per_km,
        } => format!(
            "{} {}: {} km, {} min, {:.1} min/km, {} spm",
            kind_icon(WorkoutKind::Running),
            workout.description,
            workout.distance_km,
            workout.duration_min,
            pace_min_per_km,
            cadence_spm,
        ),
        WorkoutDetails::Cycling {
            elevation_gain_m,
            speed_kmh,
        } => format!(
            "{} {}: {} km, {} min, {:.1} km/h, {} m",
            kind_icon(WorkoutKind::Cycling),
            workout.description,
            workout.distance_km,
            workout.duration_min,
            speed_kmh,
            elevation_gain_m,
        ),
    }
}

fn kind_icon(kind: WorkoutKind) -> &'static str {
    match kind {
        WorkoutKind::Running => "🏃",
        WorkoutKind::Cycling => "🚴‍♀️",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;
    use crate::ui::recording::{
        CallLog, RecordingForm, RecordingList, RecordingMap, UiCall, new_call_log,
    };
    use crate::ui::{FixedLocation, UnavailableLocation};
    use chrono::TimeZone;
    use std::sync::Arc;

    const HOME: Coordinates = Coordinates {
        latitude: 54.321,
        longitude: 10.135,
    };

    const PICK: Coordinates = Coordinates {
        latitude: 54.35,
        longitude: 10.2,
    };

    fn controller_with(
        store: Arc<MemoryBackend>,
        calls: CallLog,
        located: bool,
    ) -> SessionController {
        let location: Box<dyn LocationProvider> = if located {
            Box::new(FixedLocation::new(HOME))
        } else {
            Box::new(UnavailableLocation)
        };

        SessionController::new(
            location,
            Box::new(RecordingMap::new(calls.clone())),
            Box::new(RecordingForm::new(calls.clone())),
            Box::new(RecordingList::new(calls)),
            Box::new(store),
            MapConfig::default(),
        )
    }

    fn running_raw() -> FormSubmission {
        FormSubmission {
            kind: "running".to_string(),
            distance: "5.2".to_string(),
            duration: "24".to_string(),
            cadence: "178".to_string(),
            elevation_gain: String::new(),
        }
    }

    fn cycling_raw() -> FormSubmission {
        FormSubmission {
            kind: "cycling".to_string(),
            distance: "27".to_string(),
            duration: "95".to_string(),
            cadence: String::new(),
            elevation_gain: "523".to_string(),
        }
    }

    #[test]
    fn initialize_on_empty_store_renders_nothing() {
        let calls = new_call_log();
        let mut controller = controller_with(Arc::new(MemoryBackend::new()), calls.clone(), true);

        controller.initialize();

        assert!(controller.workouts().is_empty());
        assert_eq!(
            *calls.borrow(),
            vec![UiCall::MapInitialized {
                center: HOME,
                zoom: 13
            }]
        );
    }

    #[test]
    fn pick_remembers_location_and_shows_form() {
        let calls = new_call_log();
        let mut controller = controller_with(Arc::new(MemoryBackend::new()), calls.clone(), true);
        controller.initialize();

        controller.on_map_location_picked(PICK);

        assert!(calls.borrow().contains(&UiCall::FormShown));
    }

    #[test]
    fn last_pick_wins() {
        let calls = new_call_log();
        let mut controller = controller_with(Arc::new(MemoryBackend::new()), calls, true);
        controller.initialize();

        controller.on_map_location_picked(Coordinates::new(1.0, 1.0));
        controller.on_map_location_picked(PICK);
        let workout = controller.on_form_submitted(&running_raw()).unwrap();

        assert_eq!(workout.coords, PICK);
    }

    #[test]
    fn submission_without_pick_is_rejected() {
        let calls = new_call_log();
        let mut controller = controller_with(Arc::new(MemoryBackend::new()), calls, true);
        controller.initialize();

        let result = controller.on_form_submitted(&running_raw());

        assert!(matches!(result, Err(Error::Validation(_))));
        assert!(controller.workouts().is_empty());
    }

    #[test]
    fn submission_renders_marker_then_entry_then_closes_form() {
        let calls = new_call_log();
        let store = Arc::new(MemoryBackend::new());
        let mut controller = controller_with(store, calls.clone(), true);
        controller.initialize();
        controller.on_map_location_picked(PICK);
        calls.borrow_mut().clear();

        controller.on_form_submitted(&running_raw()).unwrap();

        let calls = calls.borrow();
        assert!(matches!(calls[0], UiCall::MarkerAdded { coords, .. } if coords == PICK));
        assert!(matches!(calls[1], UiCall::ItemAppended { .. }));
        assert_eq!(calls[2], UiCall::FieldsCleared);
        assert_eq!(calls[3], UiCall::FormHidden);
    }

    #[test]
    fn submission_persists_the_whole_collection() {
        let store = Arc::new(MemoryBackend::new());
        let mut controller = controller_with(Arc::clone(&store), new_call_log(), true);
        controller.initialize();
        controller.on_map_location_picked(PICK);

        controller.on_form_submitted(&running_raw()).unwrap();
        controller.on_form_submitted(&cycling_raw()).unwrap();

        let blob = store.load(WORKOUTS_KEY).unwrap().unwrap();
        let stored = decode_collection(&blob).unwrap();
        assert_eq!(stored.len(), 2);
    }

    #[test]
    fn two_submissions_share_the_pending_pick() {
        let mut controller =
            controller_with(Arc::new(MemoryBackend::new()), new_call_log(), true);
        controller.initialize();
        controller.on_map_location_picked(PICK);

        let first_coords = controller.on_form_submitted(&running_raw()).unwrap().coords;
        let second_coords = controller.on_form_submitted(&cycling_raw()).unwrap().coords;

        assert_eq!(first_coords, PICK);
        assert_eq!(second_coords, PICK);
        assert_eq!(controller.workouts().len(), 2);
    }

    #[test]
    fn invalid_submission_leaves_everything_untouched() {
        let calls = new_call_log();
        let store = Arc::new(MemoryBackend::new());
        let mut controller = controller_with(Arc::clone(&store), calls.clone(), true);
        controller.initialize();
        controller.on_map_location_picked(PICK);
        calls.borrow_mut().clear();

        let mut raw = running_raw();
        raw.distance = "abc".to_string();
        assert!(controller.on_form_submitted(&raw).is_err());

        assert!(controller.workouts().is_empty());
        assert!(calls.borrow().is_empty());
        assert!(store.load(WORKOUTS_KEY).unwrap().is_none());
    }

    #[test]
    fn zero_distance_submission_is_rejected_after_parsing() {
        // "0" parses fine; the constructor is what rejects it.
        let calls = new_call_log();
        let store = Arc::new(MemoryBackend::new());
        let mut controller = controller_with(Arc::clone(&store), calls.clone(), true);
        controller.initialize();
        controller.on_map_location_picked(PICK);
        calls.borrow_mut().clear();

        let mut raw = running_raw();
        raw.distance = "0".to_string();
        let result = controller.on_form_submitted(&raw);

        assert!(matches!(result, Err(Error::Validation(_))));
        assert!(controller.workouts().is_empty());
        assert!(calls.borrow().is_empty());
        assert!(store.load(WORKOUTS_KEY).unwrap().is_none());
    }

    #[test]
    fn markers_are_skipped_until_location_resolves() {
        let calls = new_call_log();
        let mut controller =
            controller_with(Arc::new(MemoryBackend::new()), calls.clone(), false);
        controller.initialize();
        controller.on_map_location_picked(PICK);

        controller.on_form_submitted(&running_raw()).unwrap();

        let recorded = calls.borrow().clone();
        assert!(
            !recorded
                .iter()
                .any(|call| matches!(call, UiCall::MarkerAdded { .. }))
        );
        assert!(
            recorded
                .iter()
                .any(|call| matches!(call, UiCall::ItemAppended { .. }))
        );
    }

    #[test]
    fn location_resolving_late_replays_all_markers() {
        let calls = new_call_log();
        let mut controller =
            controller_with(Arc::new(MemoryBackend::new()), calls.clone(), false);
        controller.initialize();
        controller.on_map_location_picked(PICK);
        controller.on_form_submitted(&running_raw()).unwrap();
        controller.on_form_submitted(&cycling_raw()).unwrap();

        controller.on_location_resolved(HOME);

        let markers = calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, UiCall::MarkerAdded { .. }))
            .count();
        assert_eq!(markers, 2);
    }

    #[test]
    fn selection_counts_interactions_and_pans() {
        let calls = new_call_log();
        let mut controller =
            controller_with(Arc::new(MemoryBackend::new()), calls.clone(), true);
        controller.initialize();
        controller.on_map_location_picked(PICK);
        let id = controller.on_form_submitted(&running_raw()).unwrap().id.clone();

        controller.on_workout_selected(&id);
        let workout = controller.on_workout_selected(&id).unwrap();

        assert_eq!(workout.interaction_count, 2);
        assert!(
            calls
                .borrow()
                .iter()
                .any(|call| matches!(call, UiCall::PannedTo { animated: true, .. }))
        );
    }

    #[test]
    fn selecting_unknown_id_is_a_no_op() {
        let calls = new_call_log();
        let mut controller =
            controller_with(Arc::new(MemoryBackend::new()), calls.clone(), true);
        controller.initialize();
        calls.borrow_mut().clear();

        assert!(controller.on_workout_selected("no-such-id").is_none());
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn selection_does_not_persist_interaction_counts() {
        let store = Arc::new(MemoryBackend::new());
        let mut controller = controller_with(Arc::clone(&store), new_call_log(), true);
        controller.initialize();
        controller.on_map_location_picked(PICK);
        let id = controller.on_form_submitted(&running_raw()).unwrap().id.clone();

        controller.on_workout_selected(&id);

        let blob = store.load(WORKOUTS_KEY).unwrap().unwrap();
        let stored = decode_collection(&blob).unwrap();
        assert_eq!(stored[0].interaction_count, 0);
    }

    #[test]
    fn restore_replays_list_without_location() {
        let store = Arc::new(MemoryBackend::new());
        {
            let mut controller = controller_with(Arc::clone(&store), new_call_log(), true);
            controller.initialize();
            controller.on_map_location_picked(PICK);
            controller.on_form_submitted(&running_raw()).unwrap();
        }

        // Next session has no position source at all
        let calls = new_call_log();
        let mut controller = controller_with(store, calls.clone(), false);
        controller.initialize();

        assert_eq!(controller.workouts().len(), 1);
        assert!(
            calls
                .borrow()
                .iter()
                .any(|call| matches!(call, UiCall::ItemAppended { .. }))
        );
        assert!(
            !calls
                .borrow()
                .iter()
                .any(|call| matches!(call, UiCall::MapInitialized { .. }))
        );
    }

    #[test]
    fn restored_workouts_keep_their_stored_fields() {
        let store = Arc::new(MemoryBackend::new());
        let created_at = Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap();
        let original =
            Workout::running(PICK, 5.0, 25.0, 178, created_at).unwrap();
        let blob = encode_collection(&[StoredWorkout::from_workout(&original)]).unwrap();
        store.save(WORKOUTS_KEY, &blob).unwrap();

        let mut controller = controller_with(store, new_call_log(), true);
        controller.initialize();

        assert_eq!(controller.workouts()[0], original);
        assert_eq!(controller.workouts()[0].description, "Running on March 5");
    }

    #[test]
    fn corrupt_blob_starts_empty_without_clearing_the_store() {
        let store = Arc::new(MemoryBackend::new());
        store.save(WORKOUTS_KEY, "{{ not json").unwrap();

        let mut controller = controller_with(Arc::clone(&store), new_call_log(), true);
        controller.initialize();

        assert!(controller.workouts().is_empty());
        // The corrupt blob is left in place until the next save
        assert_eq!(store.load(WORKOUTS_KEY).unwrap().unwrap(), "{{ not json");
    }

    #[test]
    fn logging_after_corrupt_restore_overwrites_the_blob() {
        let store = Arc::new(MemoryBackend::new());
        store.save(WORKOUTS_KEY, "{{ not json").unwrap();

        let mut controller = controller_with(Arc::clone(&store), new_call_log(), true);
        controller.initialize();
        controller.on_map_location_picked(PICK);
        controller.on_form_submitted(&running_raw()).unwrap();

        let blob = store.load(WORKOUTS_KEY).unwrap().unwrap();
        assert_eq!(decode_collection(&blob).unwrap().len(), 1);
    }

    #[test]
    fn reset_clears_store_memory_and_pending_pick() {
        let store = Arc::new(MemoryBackend::new());
        let mut controller = controller_with(Arc::clone(&store), new_call_log(), true);
        controller.initialize();
        controller.on_map_location_picked(PICK);
        controller.on_form_submitted(&running_raw()).unwrap();

        controller.reset_all().unwrap();

        assert!(controller.workouts().is_empty());
        assert!(store.load(WORKOUTS_KEY).unwrap().is_none());
        // The pick is gone too: a new submission needs a new pick
        assert!(controller.on_form_submitted(&running_raw()).is_err());
    }

    #[test]
    fn kind_change_toggles_the_form() {
        let calls = new_call_log();
        let mut controller =
            controller_with(Arc::new(MemoryBackend::new()), calls.clone(), true);

        controller.on_kind_changed(WorkoutKind::Cycling);

        assert_eq!(
            *calls.borrow(),
            vec![UiCall::FieldSetToggled {
                kind: WorkoutKind::Cycling
            }]
        );
    }

    #[test]
    fn list_entry_formats_running_metrics() {
        let created_at = Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap();
        let workout = Workout::running(PICK, 5.2, 24.0, 178, created_at).unwrap();

        assert_eq!(
            list_entry(&workout),
            format!(
                "🏃 Running on March 5: 5.2 km, 24 min, {:.1} min/km, 178 spm",
                24.0 / 5.2
            )
        );
    }

    #[test]
    fn list_entry_formats_cycling_metrics() {
        let created_at = Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap();
        let workout = Workout::cycling(PICK, 30.0, 90.0, 523.0, created_at).unwrap();

        assert_eq!(
            list_entry(&workout),
            "🚴‍♀️ Cycling on March 5: 30 km, 90 min, 20.0 km/h, 523 m"
        );
    }

    #[test]
    fn popup_carries_kind_style_key() {
        assert_eq!(popup_style_key(WorkoutKind::Running), "running-popup");
        assert_eq!(popup_style_key(WorkoutKind::Cycling), "cycling-popup");
    }
}
