//! Workout record types.

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A latitude/longitude pair as reported by the map or location source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees.
    pub latitude: f64,

    /// Longitude in degrees.
    pub longitude: f64,
}

impl Coordinates {
    /// Create a coordinate pair.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.latitude, self.longitude)
    }
}

/// Workout kind discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutKind {
    /// A run, measured by cadence and pace.
    Running,

    /// A ride, measured by elevation gain and speed.
    Cycling,
}

impl WorkoutKind {
    /// Capitalized label used in descriptions ("Running" / "Cycling").
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Cycling => "Cycling",
        }
    }

    /// Lowercase name used for style keys and form input ("running" / "cycling").
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Cycling => "cycling",
        }
    }
}

impl FromStr for WorkoutKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "running" => Ok(Self::Running),
            "cycling" => Ok(Self::Cycling),
            other => Err(Error::Validation(format!("unknown workout kind: {other:?}"))),
        }
    }
}

/// Kind-specific fields, including the metric derived at construction.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkoutDetails {
    /// Running payload.
    Running {
        /// Steps per minute.
        cadence_spm: u32,

        /// Minutes per kilometre, derived once at construction.
        pace_min_per_km: f64,
    },

    /// Cycling payload.
    Cycling {
        /// Metres climbed. May be zero or negative on descent-heavy rides.
        elevation_gain_m: f64,

        /// Kilometres per hour, derived once at construction.
        speed_kmh: f64,
    },
}

impl WorkoutDetails {
    /// The kind this payload belongs to.
    #[must_use]
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Self::Running { .. } => WorkoutKind::Running,
            Self::Cycling { .. } => WorkoutKind::Cycling,
        }
    }
}

/// A single logged workout.
///
/// Everything except `interaction_count` is fixed at construction: the
/// constructors validate their inputs, derive the kind metric and the
/// description once, and nothing recomputes them afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
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

    /// Human label, e.g. "Running on March 5".
    pub description: String,

    /// How many times the user has selected this workout.
    pub interaction_count: u32,

    /// Kind-specific fields.
    pub details: WorkoutDetails,
}

impl Workout {
    /// Create a running workout, deriving pace as duration over distance.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if distance or duration is not a
    /// positive finite number, or if cadence is zero.
    pub fn running(
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: u32,
        created_at: DateTime<Utc>,
    ) -> Result<Self> {
        require_positive("distance", distance_km)?;
        require_positive("duration", duration_min)?;
        if cadence_spm == 0 {
            return Err(Error::Validation(
                "cadence must be a positive number".to_string(),
            ));
        }

        let pace_min_per_km = duration_min / distance_km;
        Ok(Self::assemble(
            coords,
            distance_km,
            duration_min,
            created_at,
            WorkoutDetails::Running {
                cadence_spm,
                pace_min_per_km,
            },
        ))
    }

    /// Create a cycling workout, deriving speed in km/h.
    ///
    /// Elevation gain only has to be finite: zero and negative values are
    /// valid rides, unlike distance and duration which must be positive.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if distance or duration is not a
    /// positive finite number, or if elevation gain is not finite.
    pub fn cycling(
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
        created_at: DateTime<Utc>,
    ) -> Result<Self> {
        require_positive("distance", distance_km)?;
        require_positive("duration", duration_min)?;
        if !elevation_gain_m.is_finite() {
            return Err(Error::Validation(
                "elevation gain must be a number".to_string(),
            ));
        }

        let speed_kmh = distance_km / (duration_min / 60.0);
        Ok(Self::assemble(
            coords,
            distance_km,
            duration_min,
            created_at,
            WorkoutDetails::Cycling {
                elevation_gain_m,
                speed_kmh,
            },
        ))
    }

    fn assemble(
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        created_at: DateTime<Utc>,
        details: WorkoutDetails,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            created_at,
            coords,
            distance_km,
            duration_min,
            description: describe(details.kind(), created_at),
            interaction_count: 0,
            details,
        }
    }

    /// The kind of this workout.
    #[must_use]
    pub fn kind(&self) -> WorkoutKind {
        self.details.kind()
    }

    /// Record one explicit user interaction (a selection) with this workout.
    pub fn mark_interacted(&mut self) {
        self.interaction_count += 1;
    }
}

/// Derive the human label: `"<Kind> on <Month> <day>"`.
fn describe(kind: WorkoutKind, created_at: DateTime<Utc>) -> String {
    format!("{} on {}", kind.label(), created_at.format("%B %-d"))
}

fn require_positive(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::Validation(format!(
            "{field} must be a positive number"
        )))
    }
}
