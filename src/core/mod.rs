//! Core workout model, validation, and session orchestration.

pub mod controller;
pub mod validation;
pub mod workout;

pub use controller::{SessionController, WORKOUTS_KEY};
pub use validation::{ValidatedSubmission, parse_submission};
pub use workout::{Coordinates, Workout, WorkoutDetails, WorkoutKind};
