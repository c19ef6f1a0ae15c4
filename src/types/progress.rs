//! Derived route progress

use serde::{Deserialize, Serialize};

use super::LocationSample;

/// Progress along the route derived from one location sample.
///
/// Progress is quantized to waypoint granularity: the walker is credited with
/// the share of the route up to the nearest waypoint, never with a position
/// interpolated inside a segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct RouteProgress {
    /// Index of the waypoint closest to the sample
    pub nearest_waypoint_index: usize,
    /// Distance from the sample to that waypoint
    pub nearest_waypoint_distance_km: f64,
    pub completed_distance_km: f64,
    pub remaining_distance_km: f64,
    /// Share of the route completed, in [0, 100]
    pub progress_percent: f64,
    pub waypoint_count: usize,
    /// Walking time left at the route's advertised pace, if it has one
    pub estimated_remaining_minutes: Option<f64>,
    /// The sample this progress was derived from
    pub sample: LocationSample,
}

impl RouteProgress {
    /// 1-based checkpoint number for "checkpoint k of n" counters
    pub fn checkpoint_number(&self) -> usize {
        self.nearest_waypoint_index + 1
    }

    /// Whether the walker is within `radius_m` meters of the nearest waypoint
    pub fn is_at_waypoint(&self, radius_m: f64) -> bool {
        self.nearest_waypoint_distance_km * 1000.0 <= radius_m
    }

    /// Whether the nearest waypoint is the last one on the route
    pub fn is_complete(&self) -> bool {
        self.nearest_waypoint_index + 1 == self.waypoint_count
    }
}
