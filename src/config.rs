//! Configuration loading and management.
//!
//! Configuration is loaded with the following precedence:
//! 1. Environment variables (`WAYMARK_*`)
//! 2. Config file (`~/.waymark/config.toml`)
//! 3. Defaults

use crate::core::workout::Coordinates;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Main configuration struct.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,

    /// Map configuration.
    pub map: MapConfig,
}

/// Storage configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the waymark home directory.
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_waymark_home(),
        }
    }
}

/// Map configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Initial zoom level.
    pub zoom: u8,

    /// Fixed map centre, used as the position source in environments
    /// without one. Unset means no location is available.
    pub center: Option<Coordinates>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            zoom: 13,
            center: None,
        }
    }
}

/// Get the default waymark home directory.
fn default_waymark_home() -> PathBuf {
    dirs::home_dir().map_or_else(|| PathBuf::from(".waymark"), |h| h.join(".waymark"))
}

/// Load configuration with precedence: env vars → file → defaults.
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be parsed.
pub fn load_config() -> Result<Config> {
    let mut config = Config::default();

    // Try to load config file
    let config_path = get_config_path();
    if config_path.exists() {
        let contents = fs::read_to_string(&config_path).map_err(Error::Storage)?;
        config = toml::from_str(&contents).map_err(|e| Error::Config(e.to_string()))?;
    }

    // Override with environment variables
    apply_env_overrides(&mut config);

    Ok(config)
}

/// Get the path to the config file.
fn get_config_path() -> PathBuf {
    if let Ok(path) = env::var("WAYMARK_CONFIG") {
        return PathBuf::from(path);
    }

    if let Ok(home) = env::var("WAYMARK_HOME") {
        return PathBuf::from(home).join("config.toml");
    }

    default_waymark_home().join("config.toml")
}

/// Apply environment variable overrides to config.
fn apply_env_overrides(config: &mut Config) {
    // Storage path
    if let Ok(path) = env::var("WAYMARK_STORAGE_PATH") {
        config.storage.path = PathBuf::from(path);
    } else if let Ok(home) = env::var("WAYMARK_HOME") {
        config.storage.path = PathBuf::from(home);
    }

    // Map
    if let Ok(val) = env::var("WAYMARK_MAP_ZOOM") {
        if let Ok(zoom) = val.parse() {
            config.map.zoom = zoom;
        }
    }

    if let Ok(val) = env::var("WAYMARK_MAP_CENTER") {
        if let Some(center) = parse_center(&val) {
            config.map.center = Some(center);
        }
    }
}

/// Parse a `"lat,lng"` pair, as used by `WAYMARK_MAP_CENTER`.
fn parse_center(raw: &str) -> Option<Coordinates> {
    let (lat, lng) = raw.split_once(',')?;
    let latitude = lat.trim().parse().ok()?;
    let longitude = lng.trim().parse().ok()?;
    Some(Coordinates::new(latitude, longitude))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.map.zoom, 13);
        assert!(config.map.center.is_none());
        assert!(config.storage.path.ends_with(".waymark"));
    }

    #[test]
    fn parse_config_toml() {
        let toml = r"
            [storage]
            path = '/tmp/waymark-test'

            [map]
            zoom = 11
            center = { latitude = 54.32, longitude = 10.12 }
        ";

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.storage.path, PathBuf::from("/tmp/waymark-test"));
        assert_eq!(config.map.zoom, 11);
        assert_eq!(config.map.center, Some(Coordinates::new(54.32, 10.12)));
    }

    #[test]
    fn partial_config_uses_defaults() {
        let toml = r"
            [map]
            zoom = 15
        ";

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.map.zoom, 15);
        assert!(config.map.center.is_none()); // Default
        assert!(config.storage.path.ends_with(".waymark")); // Default
    }

    #[test]
    fn parse_center_accepts_lat_lng_pair() {
        assert_eq!(
            parse_center("54.32, 10.12"),
            Some(Coordinates::new(54.32, 10.12))
        );
        assert_eq!(
            parse_center("-33.9,151.2"),
            Some(Coordinates::new(-33.9, 151.2))
        );
    }

    #[test]
    fn parse_center_rejects_malformed_pairs() {
        assert!(parse_center("").is_none());
        assert!(parse_center("54.32").is_none());
        assert!(parse_center("54.32;10.12").is_none());
        assert!(parse_center("north,east").is_none());
    }
}
