//! Persisted workout records.
//!
//! `StoredWorkout` is the blob schema: a plain data shape mirroring every
//! workout field, including the metrics derived at construction and the
//! interaction count. Mapping back never re-validates or re-derives; a
//! restored record carries exactly the fields the blob had, whether or
//! not they are self-consistent.

use crate::core::workout::{Coordinates, Workout, WorkoutDetails};
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One workout as stored in the blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredWorkout {
    /// Unique identifier.
    pub id: String,

    /// When the workout was logged.
    pub created_at: DateTime<Utc>,

    /// Map location the workout is pinned to.
    pub coords: Coordinates,

    /// Distance covered, in kilometres.
    pub distance_km: f64,

    /// Duration, in minutes.
    pub duration_min: f64,

    /// Human label, stored rather than re-derived on restore.
    pub description: String,

    /// Selection count at the time of the last save.
    #[serde(default)]
    pub interaction_count: u32,

    /// Kind tag plus kind-specific fields.
    #[serde(flatten)]
    pub details: StoredDetails,
}

/// Kind-specific stored fields, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StoredDetails {
    /// Running payload.
    Running {
        /// Steps per minute.
        cadence_spm: u32,

        /// Stored pace, minutes per kilometre.
        pace_min_per_km: f64,
    },

    /// Cycling payload.
    Cycling {
        /// Metres climbed.
        elevation_gain_m: f64,

        /// Stored speed, kilometres per hour.
        speed_kmh: f64,
    },
}

impl StoredWorkout {
    /// Snapshot a live workout into its stored form.
    #[must_use]
    pub fn from_workout(workout: &Workout) -> Self {
        let details = match workout.details {
            WorkoutDetails::Running {
                cadence_spm,
                pace_min_per_km,
            } => StoredDetails::Running {
                cadence_spm,
                pace_min_per_km,
            },
            WorkoutDetails::Cycling {
                elevation_gain_m,
                speed_kmh,
            } => StoredDetails::Cycling {
                elevation_gain_m,
                speed_kmh,
            },
        };

        Self {
            id: workout.id.clone(),
            created_at: workout.created_at,
            coords: workout.coords,
            distance_km: workout.distance_km,
            duration_min: workout.duration_min,
            description: workout.description.clone(),
            interaction_count: workout.interaction_count,
            details,
        }
    }

    /// Rebuild a live workout from its stored form.
    ///
    /// A verbatim field copy: no validation, no re-derivation.
    #[must_use]
    pub fn into_workout(self) -> Workout {
        let details = match self.details {
            StoredDetails::Running {
                cadence_spm,
                pace_min_per_km,
            } => WorkoutDetails::Running {
                cadence_spm,
                pace_min_per_km,
            },
            StoredDetails::Cycling {
                elevation_gain_m,
                speed_kmh,
            } => WorkoutDetails::Cycling {
                elevation_gain_m,
                speed_kmh,
            },
        };

        Workout {
            id: self.id,
            created_at: self.created_at,
            coords: self.coords,
            distance_km: self.distance_km,
            duration_min: self.duration_min,
            description: self.description,
            interaction_count: self.interaction_count,
            details,
        }
    }
}

/// Encode the whole collection as a JSON blob.
///
/// # Errors
///
/// Returns `Error::Corrupt` if serialization fails.
pub fn encode_collection(workouts: &[StoredWorkout]) -> Result<String> {
    Ok(serde_json::to_string(workouts)?)
}

/// Decode a JSON blob back into stored records.
///
/// # Errors
///
/// Returns `Error::Corrupt` if the blob does not parse as a collection.
pub fn decode_collection(blob: &str) -> Result<Vec<StoredWorkout>> {
    Ok(serde_json::from_str(blob)?)
}
