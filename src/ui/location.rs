//! Location providers.

use crate::core::workout::Coordinates;
use crate::error::{Error, Result};
use crate::ui::LocationProvider;

/// Provider pinned to fixed coordinates, e.g. a configured map centre.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation {
    coords: Coordinates,
}

impl FixedLocation {
    /// Create a provider that always resolves to `coords`.
    #[must_use]
    pub fn new(coords: Coordinates) -> Self {
        Self { coords }
    }
}

impl LocationProvider for FixedLocation {
    fn request_current_location(&self) -> Result<Coordinates> {
        Ok(self.coords)
    }
}

/// Provider for environments without any position source.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableLocation;

impl LocationProvider for UnavailableLocation {
    fn request_current_location(&self) -> Result<Coordinates> {
        Err(Error::LocationUnavailable(
            "no location source available".to_string(),
        ))
    }
}
