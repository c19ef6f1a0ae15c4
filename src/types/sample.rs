//! Device location samples

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// A position fix from the device's positioning capability.
///
/// Samples are ephemeral: they are consumed by the tracker as soon as they
/// arrive and never stored beyond the progress value derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct LocationSample {
    pub position: GeoPoint,
    pub captured_at: DateTime<Utc>,
}

impl LocationSample {
    /// Create a sample captured at the given instant
    pub fn new(position: GeoPoint, captured_at: DateTime<Utc>) -> Self {
        Self { position, captured_at }
    }

    /// Create a sample stamped with the current time
    pub fn now(latitude: f64, longitude: f64) -> Self {
        Self { position: GeoPoint { latitude, longitude }, captured_at: Utc::now() }
    }
}
