//! Test utilities for fixtures and small hand-built routes
//!
//! Fixture files live under `test-data/` at the crate root:
//! - `test-data/routes/*.yaml` - route definitions
//! - `test-data/walks/*.yaml` - recorded walks for replay

#![cfg(any(test, feature = "benchmark"))]

use chrono::{TimeZone, Utc};
use std::path::{Path, PathBuf};

use crate::geo::GeoPoint;
use crate::route::{RouteConfig, WaypointRoute};
use crate::types::{LocationSample, Waypoint};

/// Error returned when a required fixture cannot be located.
#[derive(Debug, Clone)]
pub struct FixtureError {
    message: String,
}

impl FixtureError {
    fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl std::fmt::Display for FixtureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for FixtureError {}

/// The `test-data` directory of this crate
pub fn get_test_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("test-data")
}

/// Require that a fixture exists on disk and return its path.
pub fn require_fixture<P: AsRef<Path>>(path: P) -> Result<PathBuf, FixtureError> {
    let path_ref = path.as_ref();
    if path_ref.exists() {
        Ok(path_ref.to_path_buf())
    } else {
        Err(FixtureError::new(format!("Missing fixture: {}", path_ref.display())))
    }
}

/// Require a route fixture in `test-data/routes`
pub fn require_route_fixture(file_name: &str) -> Result<PathBuf, FixtureError> {
    require_fixture(get_test_data_dir().join("routes").join(file_name))
}

/// Require a recorded walk fixture in `test-data/walks`
pub fn require_walk_fixture(file_name: &str) -> Result<PathBuf, FixtureError> {
    require_fixture(get_test_data_dir().join("walks").join(file_name))
}

/// A sample at the given position with a fixed capture time
pub fn sample_at(latitude: f64, longitude: f64) -> LocationSample {
    LocationSample::new(
        GeoPoint { latitude, longitude },
        Utc.with_ymd_and_hms(2025, 1, 13, 22, 0, 0).single().unwrap_or_default(),
    )
}

/// Three waypoints on the equator, 0.045 degrees (about 5 km) apart,
/// declared at 0, 5 and 10 km from the start.
pub fn three_waypoint_route() -> WaypointRoute {
    let waypoints = vec![
        Waypoint::new("start", "Start", GeoPoint { latitude: 0.0, longitude: 0.0 }, 0, 0.0),
        Waypoint::new("middle", "Middle", GeoPoint { latitude: 0.0, longitude: 0.045 }, 1, 5.0),
        Waypoint::new("end", "End", GeoPoint { latitude: 0.0, longitude: 0.09 }, 2, 10.0),
    ];
    build(RouteConfig::new("Three Stops", waypoints))
}

/// Two waypoints mirrored about the prime meridian, so any point on it is a tie.
pub fn two_waypoint_symmetric_route() -> WaypointRoute {
    let waypoints = vec![
        Waypoint::new("west", "West", GeoPoint { latitude: 0.0, longitude: -0.01 }, 0, 0.0),
        Waypoint::new("east", "East", GeoPoint { latitude: 0.0, longitude: 0.01 }, 1, 2.2),
    ];
    build(RouteConfig::new("Mirror", waypoints))
}

fn build(config: RouteConfig) -> WaypointRoute {
    match WaypointRoute::new(config) {
        Ok(route) => route,
        Err(e) => panic!("test route is invalid: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_exists() {
        let dir = get_test_data_dir();
        assert!(dir.is_dir(), "test-data directory should exist at {}", dir.display());
    }

    #[test]
    fn require_fixture_errors_when_missing() {
        let result = require_walk_fixture("__missing_fixture.yaml");
        let message = result.unwrap_err().to_string();
        assert!(message.contains("Missing fixture"));
    }

    #[test]
    fn hand_built_routes_are_valid() {
        assert_eq!(three_waypoint_route().total_length(), 10.0);
        assert_eq!(two_waypoint_symmetric_route().waypoint_count(), 2);
    }
}
