//! # Progress Tracker
//!
//! Derives [`RouteProgress`] for one walker from successive location samples.
//!
//! ```text
//!        start()                 update(sample) ──► RouteProgress
//!   Idle ───────► Tracking ◄──┐
//!    ▲               │        │  (invalid sample: error, last value kept)
//!    └─── stop() ────┘────────┘
//! ```
//!
//! The tracker is single-writer: it takes `&mut self` and is meant to be owned
//! by exactly one session. Samples must be applied in capture order; the
//! [`Driver`](crate::driver::Driver) does this for asynchronous sources.
//!
//! ```rust
//! use std::sync::Arc;
//! use girivalam::{LocationSample, ProgressTracker, WaypointRoute};
//!
//! let route = Arc::new(WaypointRoute::girivalam().unwrap());
//! let mut tracker = ProgressTracker::new(route);
//! tracker.start();
//!
//! let progress = tracker.update(LocationSample::now(12.2150, 79.0750)).unwrap();
//! assert_eq!(progress.nearest_waypoint_index, 2);
//! ```

use std::sync::Arc;

use crate::geo::haversine_km;
use crate::route::WaypointRoute;
use crate::types::{LocationSample, RouteProgress};
use crate::{Result, TrackingError};

/// Distances closer than this are treated as a tie (one micrometer)
pub const TIE_EPSILON_KM: f64 = 1e-9;

/// Lifecycle state of a tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerState {
    Idle,
    Tracking,
}

/// Stateful progress computation for one tracking session
#[derive(Debug)]
pub struct ProgressTracker {
    route: Arc<WaypointRoute>,
    state: TrackerState,
    current: Option<RouteProgress>,
}

impl ProgressTracker {
    /// Create an idle tracker for a route
    pub fn new(route: Arc<WaypointRoute>) -> Self {
        Self { route, state: TrackerState::Idle, current: None }
    }

    /// Begin tracking. Calling this while already tracking does nothing.
    pub fn start(&mut self) {
        if self.state == TrackerState::Idle {
            self.state = TrackerState::Tracking;
            self.current = None;
        }
    }

    /// Stop tracking and discard the last progress value
    pub fn stop(&mut self) {
        self.state = TrackerState::Idle;
        self.current = None;
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    pub fn is_tracking(&self) -> bool {
        self.state == TrackerState::Tracking
    }

    /// Last successfully computed progress, if any
    pub fn current(&self) -> Option<&RouteProgress> {
        self.current.as_ref()
    }

    pub fn route(&self) -> &Arc<WaypointRoute> {
        &self.route
    }

    /// Apply a location sample and return the new progress.
    ///
    /// Fails with [`TrackingError::NotStarted`] when idle and with
    /// [`TrackingError::InvalidCoordinate`] for an out-of-range sample. On
    /// failure the previously stored progress is left untouched.
    pub fn update(&mut self, sample: LocationSample) -> Result<RouteProgress> {
        if self.state != TrackerState::Tracking {
            return Err(TrackingError::NotStarted);
        }

        let progress = compute_progress(&self.route, sample)?;
        self.current = Some(progress.clone());
        Ok(progress)
    }
}

/// Nearest waypoint index and its distance. Ties go to the earlier waypoint.
fn nearest_waypoint(route: &WaypointRoute, sample: &LocationSample) -> Result<(usize, f64)> {
    let mut nearest = (0, f64::INFINITY);

    for (index, waypoint) in route.all().iter().enumerate() {
        let distance = haversine_km(&sample.position, &waypoint.position)?;
        if distance < nearest.1 - TIE_EPSILON_KM {
            nearest = (index, distance);
        }
    }

    Ok(nearest)
}

fn compute_progress(route: &WaypointRoute, sample: LocationSample) -> Result<RouteProgress> {
    let (index, nearest_distance_km) = nearest_waypoint(route, &sample)?;

    let waypoint_count = route.waypoint_count();
    let total = route.total_length();

    // Quantized to waypoint granularity; routes always hold at least two waypoints
    let fraction = (index as f64 / (waypoint_count - 1) as f64).clamp(0.0, 1.0);
    let progress_percent = fraction * 100.0;
    let completed_distance_km = total * fraction;
    let remaining_distance_km = (total - completed_distance_km).max(0.0);

    Ok(RouteProgress {
        nearest_waypoint_index: index,
        nearest_waypoint_distance_km: nearest_distance_km,
        completed_distance_km,
        remaining_distance_km,
        progress_percent,
        waypoint_count,
        estimated_remaining_minutes: route.estimated_minutes_for(remaining_distance_km),
        sample,
    })
}
