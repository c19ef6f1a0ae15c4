//! Route File Tests
//!
//! Loads the route definitions under `test-data/routes` through the public API
//! and checks them against the built-in circuit.

use girivalam::{TrackingError, WaypointRoute};
use std::path::PathBuf;

fn route_fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test-data").join("routes").join(name)
}

#[test]
fn girivalam_file_matches_builtin_route() {
    let from_file = WaypointRoute::load(route_fixture("girivalam.yaml")).expect("route file loads");
    let builtin = WaypointRoute::girivalam().expect("seed route is valid");

    assert_eq!(from_file.name(), builtin.name());
    assert_eq!(from_file.waypoint_count(), builtin.waypoint_count());
    assert_eq!(from_file.total_length(), builtin.total_length());
    assert_eq!(from_file.estimated_duration_minutes(), Some(270.0));

    for (loaded, seeded) in from_file.all().iter().zip(builtin.all()) {
        assert_eq!(loaded.id, seeded.id);
        assert_eq!(loaded.sequence_index, seeded.sequence_index);
        assert_eq!(loaded.position, seeded.position);
        assert_eq!(loaded.distance_from_start_km, seeded.distance_from_start_km);
    }
}

#[test]
fn decreasing_distance_file_is_rejected() {
    // Waypoints are listed out of order in the file; only their distances are wrong
    let result = WaypointRoute::load(route_fixture("decreasing_distance.yaml"));
    match result {
        Err(TrackingError::MalformedRoute { reason }) => {
            assert!(reason.contains("yama-lingam"), "unexpected reason: {}", reason)
        }
        other => panic!("expected MalformedRoute, got {:?}", other),
    }
}

#[test]
fn missing_route_file_reports_path() {
    let result = WaypointRoute::load(route_fixture("does_not_exist.yaml"));
    match result {
        Err(TrackingError::File { path, .. }) => {
            assert!(path.ends_with("does_not_exist.yaml"))
        }
        other => panic!("expected File error, got {:?}", other),
    }
}

#[test]
fn loaded_route_lookups() {
    let route = WaypointRoute::load(route_fixture("girivalam.yaml")).expect("route file loads");
    let niruthi = route.find("niruthi-lingam").expect("Niruthi Lingam on route");
    assert_eq!(niruthi.sequence_index, 3);
    assert_eq!(niruthi.display_name(true), "நிருதி லிங்கம்");
    assert!(route.waypoint_at(8).is_err());
}
