//! Error types for route-progress tracking.
//!
//! Every fallible operation in the crate returns [`TrackingError`]. The core
//! errors (`InvalidCoordinate`, `IndexOutOfRange`, `NotStarted`,
//! `MalformedRoute`) are local and synchronous: they describe a caller-side
//! contract violation or a bad input, never a transient condition.
//!
//! ## Error Categories
//!
//! - **Coordinate Errors**: latitude/longitude outside the WGS-84 range
//! - **Route Errors**: bad waypoint lookups and invalid route topology
//! - **Tracker State Errors**: updates applied to an idle tracker
//! - **File / Parse Errors**: unreadable or malformed YAML route and walk files
//!
//! ## Recovery
//!
//! ```rust
//! use girivalam::TrackingError;
//!
//! let error = TrackingError::invalid_coordinate(95.0, 79.08);
//! if error.is_recoverable() {
//!     for suggestion in error.recovery_suggestions() {
//!         println!("  - {}", suggestion);
//!     }
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for tracking operations.
pub type Result<T, E = TrackingError> = std::result::Result<T, E>;

/// Main error type for tracking operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TrackingError {
    #[error("Invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("Waypoint index {index} out of range (route has {count} waypoints)")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("Progress tracker is not started")]
    NotStarted,

    #[error("Malformed route: {reason}")]
    MalformedRoute { reason: String },

    #[error("File error: {path}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error in {context}: {details}")]
    Parse { context: String, details: String },

    #[error("Tracking session is closed")]
    SessionClosed,
}

impl TrackingError {
    /// Returns whether the caller can recover by fixing its input and calling again.
    pub fn is_recoverable(&self) -> bool {
        match self {
            TrackingError::InvalidCoordinate { .. } => true,
            TrackingError::NotStarted => true,
            TrackingError::IndexOutOfRange { .. } => false,
            TrackingError::MalformedRoute { .. } => false,
            TrackingError::File { .. } => false,
            TrackingError::Parse { .. } => false,
            TrackingError::SessionClosed => false,
        }
    }

    /// Returns suggested recovery actions for this error.
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            TrackingError::InvalidCoordinate { .. } => vec![
                "Skip this location sample and wait for the next fix",
                "Check that latitude and longitude are not swapped",
            ],
            TrackingError::NotStarted => {
                vec!["Call start() before applying location samples"]
            }
            TrackingError::IndexOutOfRange { .. } => vec![
                "Check the index against the route length",
                "Use all() to iterate waypoints instead of indexing",
            ],
            TrackingError::MalformedRoute { .. } => vec![
                "Check that sequence indices start at 0 and are contiguous",
                "Check that distances from start never decrease",
                "Check that waypoint ids are unique",
            ],
            TrackingError::File { .. } => vec![
                "Check file exists and is readable",
                "Check file permissions",
            ],
            TrackingError::Parse { .. } => vec![
                "Check the YAML structure against the documented format",
                "Verify field names and value types",
            ],
            TrackingError::SessionClosed => vec![
                "Start a new tracking session",
                "Keep the session alive while samples are still being sent",
            ],
        }
    }

    /// Helper constructor for coordinate errors.
    pub fn invalid_coordinate(latitude: f64, longitude: f64) -> Self {
        TrackingError::InvalidCoordinate { latitude, longitude }
    }

    /// Helper constructor for route validation errors.
    pub fn malformed_route(reason: impl Into<String>) -> Self {
        TrackingError::MalformedRoute { reason: reason.into() }
    }

    /// Helper constructor for file errors with path context.
    pub fn file_error(path: PathBuf, source: std::io::Error) -> Self {
        TrackingError::File { path, source }
    }

    /// Helper constructor for YAML parse errors.
    pub fn parse_error(context: impl Into<String>, details: impl Into<String>) -> Self {
        TrackingError::Parse { context: context.into(), details: details.into() }
    }
}

impl From<std::io::Error> for TrackingError {
    fn from(err: std::io::Error) -> Self {
        TrackingError::File { path: PathBuf::from("<unknown>"), source: err }
    }
}
