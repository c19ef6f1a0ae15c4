//! # Waypoint Route Model
//!
//! A [`WaypointRoute`] is the ordered, immutable set of checkpoints for one
//! named walking path. It is built once from configuration (a YAML file or the
//! built-in seed) and validated on construction, so a tracker never operates
//! on an invalid topology.
//!
//! ## Validation rules
//!
//! - at least two waypoints
//! - `sequence_index` values are exactly `0..n` (unique and contiguous)
//! - waypoint ids are unique
//! - `distance_from_start_km` is finite, non-negative and never decreases
//! - every waypoint position is a valid coordinate
//! - the estimated duration, when present, is finite and positive
//!
//! Any violation fails with [`TrackingError::MalformedRoute`].
//!
//! ```rust
//! use girivalam::WaypointRoute;
//!
//! let route = WaypointRoute::girivalam().unwrap();
//! assert_eq!(route.waypoint_count(), 8);
//! assert_eq!(route.waypoint_at(7).unwrap().distance_from_start_km, route.total_length());
//! ```

use std::collections::HashSet;
use std::path::Path;

use crate::types::Waypoint;
use crate::{Result, TrackingError};

mod config;
mod seed;

pub use config::RouteConfig;

/// Validated, ordered waypoint route
#[derive(Debug, Clone, PartialEq)]
pub struct WaypointRoute {
    name: String,
    localized_name: Option<String>,
    estimated_duration_minutes: Option<f64>,
    waypoints: Vec<Waypoint>,
}

impl WaypointRoute {
    /// Build a route from a configuration, sorting and validating its waypoints.
    pub fn new(config: RouteConfig) -> Result<Self> {
        let RouteConfig { name, localized_name, estimated_duration_minutes, mut waypoints } =
            config;

        waypoints.sort_by_key(|waypoint| waypoint.sequence_index);
        validate_waypoints(&waypoints)?;

        if let Some(minutes) = estimated_duration_minutes {
            if !minutes.is_finite() || minutes <= 0.0 {
                return Err(TrackingError::malformed_route(format!(
                    "estimated duration must be positive, got {} minutes",
                    minutes
                )));
            }
        }

        Ok(Self { name, localized_name, estimated_duration_minutes, waypoints })
    }

    /// Parse and validate a route from YAML text
    pub fn parse(yaml: &str) -> Result<Self> {
        Self::new(RouteConfig::parse(yaml)?)
    }

    /// Load and validate a route from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::new(RouteConfig::load(path)?)
    }

    /// The built-in Girivalam circumambulation route: eight lingam shrines,
    /// 14.2 km, about four and a half hours on foot.
    pub fn girivalam() -> Result<Self> {
        Self::new(seed::girivalam_config())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn localized_name(&self) -> Option<&str> {
        self.localized_name.as_deref()
    }

    /// Total route length: the last waypoint's distance from start
    pub fn total_length(&self) -> f64 {
        // Validation guarantees at least two waypoints
        self.waypoints.last().map_or(0.0, |waypoint| waypoint.distance_from_start_km)
    }

    /// Waypoint by sequence index
    pub fn waypoint_at(&self, index: usize) -> Result<&Waypoint> {
        self.waypoints
            .get(index)
            .ok_or(TrackingError::IndexOutOfRange { index, count: self.waypoints.len() })
    }

    /// All waypoints in route order
    pub fn all(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn waypoint_count(&self) -> usize {
        self.waypoints.len()
    }

    /// Find a waypoint by its id
    pub fn find(&self, id: &str) -> Option<&Waypoint> {
        self.waypoints.iter().find(|waypoint| waypoint.id == id)
    }

    pub fn estimated_duration_minutes(&self) -> Option<f64> {
        self.estimated_duration_minutes
    }

    /// Average walking speed implied by the estimated duration
    pub fn walking_pace_kmh(&self) -> Option<f64> {
        self.estimated_duration_minutes.map(|minutes| self.total_length() / (minutes / 60.0))
    }

    /// Walking time for a distance at the route's pace
    pub fn estimated_minutes_for(&self, distance_km: f64) -> Option<f64> {
        let minutes = self.estimated_duration_minutes?;
        let total = self.total_length();
        if total > 0.0 { Some(minutes * distance_km / total) } else { Some(0.0) }
    }
}

fn validate_waypoints(waypoints: &[Waypoint]) -> Result<()> {
    if waypoints.len() < 2 {
        return Err(TrackingError::malformed_route(format!(
            "a route needs at least two waypoints, got {}",
            waypoints.len()
        )));
    }

    let mut ids = HashSet::with_capacity(waypoints.len());
    let mut previous_distance = 0.0;

    // Sorted input: index i must hold sequence_index i
    for (expected_index, waypoint) in waypoints.iter().enumerate() {
        if waypoint.sequence_index != expected_index {
            return Err(TrackingError::malformed_route(format!(
                "waypoint '{}' has sequence index {}, expected {} (indices must be unique and contiguous from 0)",
                waypoint.id, waypoint.sequence_index, expected_index
            )));
        }

        if !ids.insert(waypoint.id.as_str()) {
            return Err(TrackingError::malformed_route(format!(
                "duplicate waypoint id '{}'",
                waypoint.id
            )));
        }

        let distance = waypoint.distance_from_start_km;
        if !distance.is_finite() || distance < 0.0 {
            return Err(TrackingError::malformed_route(format!(
                "waypoint '{}' has invalid distance from start {}",
                waypoint.id, distance
            )));
        }
        if distance < previous_distance {
            return Err(TrackingError::malformed_route(format!(
                "distance from start decreases at waypoint '{}' ({} < {})",
                waypoint.id, distance, previous_distance
            )));
        }
        previous_distance = distance;

        if waypoint.position.validate().is_err() {
            return Err(TrackingError::malformed_route(format!(
                "waypoint '{}' has invalid position ({}, {})",
                waypoint.id, waypoint.position.latitude, waypoint.position.longitude
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoPoint;

    fn waypoint(id: &str, sequence_index: usize, distance: f64) -> Waypoint {
        Waypoint::new(
            id,
            id.to_uppercase(),
            GeoPoint { latitude: 12.22 + sequence_index as f64 * 0.001, longitude: 79.07 },
            sequence_index,
            distance,
        )
    }

    fn route(waypoints: Vec<Waypoint>) -> Result<WaypointRoute> {
        WaypointRoute::new(RouteConfig::new("Test", waypoints))
    }

    fn assert_malformed(result: Result<WaypointRoute>, needle: &str) {
        match result {
            Err(TrackingError::MalformedRoute { reason }) => {
                assert!(reason.contains(needle), "'{}' does not mention '{}'", reason, needle)
            }
            other => panic!("Expected MalformedRoute, got {:?}", other),
        }
    }

    #[test]
    fn seeded_route_last_waypoint_is_total_length() {
        let route = WaypointRoute::girivalam().unwrap();
        assert_eq!(route.waypoint_count(), 8);
        assert_eq!(route.total_length(), 14.2);
        assert_eq!(route.waypoint_at(7).unwrap().distance_from_start_km, route.total_length());
        assert_eq!(route.waypoint_at(0).unwrap().id, "indra-lingam");
        assert_eq!(route.waypoint_at(7).unwrap().id, "isanya-lingam");
    }

    #[test]
    fn seeded_route_pace_matches_advertised_duration() {
        let route = WaypointRoute::girivalam().unwrap();
        let pace = route.walking_pace_kmh().unwrap();
        assert!((pace - 14.2 / 4.5).abs() < 1e-9);
        let minutes = route.estimated_minutes_for(route.total_length()).unwrap();
        assert!((minutes - 270.0).abs() < 1e-9);
    }

    #[test]
    fn waypoint_at_rejects_index_past_end() {
        let route = route(vec![waypoint("a", 0, 0.0), waypoint("b", 1, 5.0)]).unwrap();
        match route.waypoint_at(2) {
            Err(TrackingError::IndexOutOfRange { index, count }) => {
                assert_eq!(index, 2);
                assert_eq!(count, 2);
            }
            other => panic!("Expected IndexOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn waypoints_are_sorted_by_sequence_index() {
        let route = route(vec![
            waypoint("c", 2, 10.0),
            waypoint("a", 0, 0.0),
            waypoint("b", 1, 5.0),
        ])
        .unwrap();
        let ids: Vec<&str> = route.all().iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
        assert_eq!(route.find("b").map(|w| w.sequence_index), Some(1));
        assert!(route.find("z").is_none());
    }

    #[test]
    fn rejects_single_waypoint() {
        assert_malformed(route(vec![waypoint("a", 0, 0.0)]), "at least two");
    }

    #[test]
    fn rejects_duplicate_sequence_index() {
        assert_malformed(
            route(vec![waypoint("a", 0, 0.0), waypoint("b", 1, 1.0), waypoint("c", 1, 2.0)]),
            "sequence index",
        );
    }

    #[test]
    fn rejects_gap_in_sequence() {
        assert_malformed(route(vec![waypoint("a", 0, 0.0), waypoint("b", 2, 1.0)]), "contiguous");
    }

    #[test]
    fn rejects_decreasing_distance() {
        assert_malformed(
            route(vec![waypoint("a", 0, 0.0), waypoint("b", 1, 5.0), waypoint("c", 2, 4.0)]),
            "decreases",
        );
    }

    #[test]
    fn rejects_duplicate_id() {
        assert_malformed(route(vec![waypoint("a", 0, 0.0), waypoint("a", 1, 1.0)]), "duplicate");
    }

    #[test]
    fn rejects_negative_or_nan_distance() {
        assert_malformed(route(vec![waypoint("a", 0, -1.0), waypoint("b", 1, 1.0)]), "invalid");
        assert_malformed(route(vec![waypoint("a", 0, 0.0), waypoint("b", 1, f64::NAN)]), "invalid");
    }

    #[test]
    fn rejects_invalid_waypoint_position() {
        let mut bad = waypoint("b", 1, 1.0);
        bad.position.latitude = 91.0;
        assert_malformed(route(vec![waypoint("a", 0, 0.0), bad]), "position");
    }

    #[test]
    fn rejects_non_positive_duration() {
        let mut config =
            RouteConfig::new("Test", vec![waypoint("a", 0, 0.0), waypoint("b", 1, 1.0)]);
        config.estimated_duration_minutes = Some(0.0);
        assert_malformed(WaypointRoute::new(config), "duration");
    }

    #[test]
    fn equal_consecutive_distances_are_allowed() {
        let route = route(vec![waypoint("a", 0, 0.0), waypoint("b", 1, 0.0), waypoint("c", 2, 3.0)]);
        assert!(route.is_ok());
    }

    #[test]
    fn route_without_duration_has_no_estimate() {
        let route = route(vec![waypoint("a", 0, 0.0), waypoint("b", 1, 5.0)]).unwrap();
        assert!(route.walking_pace_kmh().is_none());
        assert!(route.estimated_minutes_for(2.0).is_none());
    }
}
