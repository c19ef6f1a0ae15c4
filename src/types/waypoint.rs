//! Waypoint records

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// Audio guide recordings for a waypoint
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(default)]
pub struct AudioGuide {
    /// Tamil narration URL
    pub tamil: Option<String>,
    /// English narration URL
    pub english: Option<String>,
}

/// A fixed checkpoint along the route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct Waypoint {
    /// Stable identifier, unique within the route
    pub id: String,
    /// English display name
    pub name: String,
    /// Tamil display name
    #[serde(default)]
    pub localized_name: Option<String>,
    /// Location of the checkpoint
    pub position: GeoPoint,
    /// 0-based order along the route
    pub sequence_index: usize,
    /// Cumulative walking distance from the route start
    pub distance_from_start_km: f64,
    /// Compass direction from the hill, e.g. "Southeast"
    #[serde(default)]
    pub direction: Option<String>,
    /// Religious significance of the shrine
    #[serde(default)]
    pub significance: Option<String>,
    #[serde(default)]
    pub audio_guide: Option<AudioGuide>,
}

impl Waypoint {
    /// Create a waypoint with only the fields the tracker needs.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        position: GeoPoint,
        sequence_index: usize,
        distance_from_start_km: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            localized_name: None,
            position,
            sequence_index,
            distance_from_start_km,
            direction: None,
            significance: None,
            audio_guide: None,
        }
    }

    /// Display name in the requested language, falling back to English.
    pub fn display_name(&self, localized: bool) -> &str {
        match (&self.localized_name, localized) {
            (Some(name), true) => name,
            _ => &self.name,
        }
    }
}
