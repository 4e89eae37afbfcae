//! Form field parsing and validation.
//!
//! Field values arrive as the raw strings the form collected. Every numeric
//! field must parse to a finite number before a workout is constructed;
//! one bad field rejects the whole submission. Positivity is checked by the
//! `Workout` constructors, not here.

use crate::core::workout::WorkoutKind;
use crate::error::{Error, Result};
use crate::ui::FormSubmission;

/// Typed field values for one submission, ready for construction.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidatedSubmission {
    /// A running submission.
    Running {
        /// Distance in kilometres.
        distance_km: f64,

        /// Duration in minutes.
        duration_min: f64,

        /// Cadence in steps per minute.
        cadence_spm: u32,
    },

    /// A cycling submission.
    Cycling {
        /// Distance in kilometres.
        distance_km: f64,

        /// Duration in minutes.
        duration_min: f64,

        /// Elevation gain in metres.
        elevation_gain_m: f64,
    },
}

impl ValidatedSubmission {
    /// The kind this submission will construct.
    #[must_use]
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Self::Running { .. } => WorkoutKind::Running,
            Self::Cycling { .. } => WorkoutKind::Cycling,
        }
    }
}

/// Parse raw form fields into typed values.
///
/// # Errors
///
/// Returns `Error::Validation` if the kind is unknown or any numeric field
/// fails to parse to a finite number.
pub fn parse_submission(raw: &FormSubmission) -> Result<ValidatedSubmission> {
    let kind: WorkoutKind = raw.kind.trim().parse()?;
    let distance_km = parse_finite("distance", &raw.distance)?;
    let duration_min = parse_finite("duration", &raw.duration)?;

    match kind {
        WorkoutKind::Running => Ok(ValidatedSubmission::Running {
            distance_km,
            duration_min,
            cadence_spm: parse_cadence(&raw.cadence)?,
        }),
        WorkoutKind::Cycling => Ok(ValidatedSubmission::Cycling {
            distance_km,
            duration_min,
            elevation_gain_m: parse_finite("elevation gain", &raw.elevation_gain)?,
        }),
    }
}

// f64's FromStr accepts "inf" and "NaN", so finiteness is an explicit check.
fn parse_finite(field: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| Error::Validation(format!("{field} must be a number, got {raw:?}")))
}

fn parse_cadence(raw: &str) -> Result<u32> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| Error::Validation(format!("cadence must be a whole number, got {raw:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn parses_running_fields() {
        let parsed = parse_submission(&running_raw()).unwrap();
        assert_eq!(
            parsed,
            ValidatedSubmission::Running {
                distance_km: 5.2,
                duration_min: 24.0,
                cadence_spm: 178,
            }
        );
    }

    #[test]
    fn parses_cycling_fields() {
        let parsed = parse_submission(&cycling_raw()).unwrap();
        assert_eq!(
            parsed,
            ValidatedSubmission::Cycling {
                distance_km: 27.0,
                duration_min: 95.0,
                elevation_gain_m: 523.0,
            }
        );
    }

    #[test]
    fn trims_whitespace_before_parsing() {
        let mut raw = running_raw();
        raw.kind = " running ".to_string();
        raw.distance = " 5.2 ".to_string();
        raw.cadence = "178 ".to_string();

        let parsed = parse_submission(&raw).unwrap();
        assert_eq!(parsed.kind(), WorkoutKind::Running);
    }

    #[test]
    fn rejects_unknown_kind() {
        let mut raw = running_raw();
        raw.kind = "rowing".to_string();
        assert!(matches!(
            parse_submission(&raw),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn rejects_non_numeric_fields() {
        for bad in ["", "abc", "5,2", "12.3.4"] {
            let mut raw = running_raw();
            raw.distance = bad.to_string();
            assert!(parse_submission(&raw).is_err(), "distance {bad:?}");

            let mut raw = cycling_raw();
            raw.elevation_gain = bad.to_string();
            assert!(parse_submission(&raw).is_err(), "elevation {bad:?}");
        }
    }

    #[test]
    fn rejects_non_finite_numbers() {
        for bad in ["inf", "-inf", "NaN"] {
            let mut raw = running_raw();
            raw.duration = bad.to_string();
            assert!(parse_submission(&raw).is_err(), "duration {bad:?}");
        }
    }

    #[test]
    fn rejects_fractional_or_negative_cadence() {
        for bad in ["170.5", "-3", ""] {
            let mut raw = running_raw();
            raw.cadence = bad.to_string();
            assert!(parse_submission(&raw).is_err(), "cadence {bad:?}");
        }
    }

    #[test]
    fn negative_distance_parses_here_and_fails_in_the_constructor() {
        // The parser only cares that the field is a usable number.
        let mut raw = running_raw();
        raw.distance = "-5".to_string();
        assert!(parse_submission(&raw).is_ok());
    }
}
