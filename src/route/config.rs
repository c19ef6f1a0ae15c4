//! YAML route configuration
//!
//! Routes are stored as a flat list of waypoints plus a little metadata:
//!
//! ```yaml
//! name: Girivalam
//! localized_name: கிரிவலம்
//! estimated_duration_minutes: 270
//! waypoints:
//!   - id: indra-lingam
//!     name: Indra Lingam
//!     position: { latitude: 12.2300, longitude: 79.0800 }
//!     sequence_index: 0
//!     distance_from_start_km: 0.0
//! ```
//!
//! Waypoints may be listed in any order; they are sorted by `sequence_index`
//! when the route is built.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use crate::types::Waypoint;
use crate::{Result, TrackingError};

/// Unvalidated route definition as read from configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    pub name: String,
    #[serde(default)]
    pub localized_name: Option<String>,
    /// Typical time to walk the whole route
    #[serde(default)]
    pub estimated_duration_minutes: Option<f64>,
    pub waypoints: Vec<Waypoint>,
}

impl RouteConfig {
    pub fn new(name: impl Into<String>, waypoints: Vec<Waypoint>) -> Self {
        Self {
            name: name.into(),
            localized_name: None,
            estimated_duration_minutes: None,
            waypoints,
        }
    }

    /// Parse a route definition from YAML text
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml)
            .map_err(|e| TrackingError::parse_error("RouteConfig deserialization", e.to_string()))
    }

    /// Read and parse a route definition file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading route file: {}", path.display());

        let yaml = std::fs::read_to_string(path)
            .map_err(|e| TrackingError::file_error(path.to_path_buf(), e))?;
        let config = Self::parse(&yaml)?;

        info!("Loaded route '{}' with {} waypoints", config.name, config.waypoints.len());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_metadata_and_waypoints() {
        let yaml = "
name: Test Loop
estimated_duration_minutes: 90
waypoints:
  - id: b
    name: Second
    position: { latitude: 12.2200, longitude: 79.0850 }
    sequence_index: 1
    distance_from_start_km: 2.5
  - id: a
    name: First
    position: { latitude: 12.2300, longitude: 79.0800 }
    sequence_index: 0
    distance_from_start_km: 0.0
";
        let config = RouteConfig::parse(yaml).unwrap();
        assert_eq!(config.name, "Test Loop");
        assert_eq!(config.estimated_duration_minutes, Some(90.0));
        assert_eq!(config.waypoints.len(), 2);
        assert!(config.localized_name.is_none());
    }

    #[test]
    fn missing_waypoints_is_a_parse_error() {
        let err = RouteConfig::parse("name: Empty\n").unwrap_err();
        assert!(matches!(err, TrackingError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_a_file_error() {
        let err = RouteConfig::load("test-data/routes/__missing.yaml").unwrap_err();
        match err {
            TrackingError::File { path, .. } => {
                assert!(path.ends_with("__missing.yaml"));
            }
            other => panic!("Expected File error, got {:?}", other),
        }
    }
}
