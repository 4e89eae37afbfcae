//! CLI command implementations.

pub mod list;
pub mod log;
pub mod reset;
pub mod show;

use crate::config::load_config;
use crate::core::SessionController;
use crate::error::Result;
use crate::storage::FileBackend;
use crate::ui::{
    ConsoleForm, ConsoleList, ConsoleMap, FixedLocation, LocationProvider, UnavailableLocation,
};
use chrono::{DateTime, Local, Utc};

/// Build a controller over the console adapters and the configured
/// file store. The configured map centre doubles as the position
/// source; without one, the session runs location-less.
fn build_controller() -> Result<SessionController> {
    let config = load_config()?;

    let location: Box<dyn LocationProvider> = match config.map.center {
        Some(center) => Box::new(FixedLocation::new(center)),
        None => Box::new(UnavailableLocation),
    };

    Ok(SessionController::new(
        location,
        Box::new(ConsoleMap),
        Box::new(ConsoleForm),
        Box::new(ConsoleList),
        Box::new(FileBackend::new(config.storage.path)?),
        config.map,
    ))
}

/// Format UTC time as local time for display.
fn format_local_time(utc: DateTime<Utc>) -> String {
    let local: DateTime<Local> = utc.into();
    local.format("%Y-%m-%d %H:%M").to_string()
}
