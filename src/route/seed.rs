//! Built-in Girivalam route
//!
//! The eight Ashta Lingam shrines around Arunachala hill, walked clockwise
//! from Indra Lingam (East) to Isanya Lingam (Northeast).

use super::RouteConfig;
use crate::geo::GeoPoint;
use crate::types::{AudioGuide, Waypoint};

struct Shrine {
    id: &'static str,
    name: &'static str,
    tamil_name: &'static str,
    latitude: f64,
    longitude: f64,
    distance_km: f64,
    direction: &'static str,
    significance: &'static str,
}

const SHRINES: [Shrine; 8] = [
    Shrine {
        id: "indra-lingam",
        name: "Indra Lingam",
        tamil_name: "இந்திர லிங்கம்",
        latitude: 12.2300,
        longitude: 79.0800,
        distance_km: 0.0,
        direction: "East",
        significance: "Represents the element of Air and Lord Indra",
    },
    Shrine {
        id: "agni-lingam",
        name: "Agni Lingam",
        tamil_name: "அக்னி லிங்கம்",
        latitude: 12.2200,
        longitude: 79.0850,
        distance_km: 1.9,
        direction: "Southeast",
        significance: "Represents the element of Fire and Lord Agni",
    },
    Shrine {
        id: "yama-lingam",
        name: "Yama Lingam",
        tamil_name: "எம லிங்கம்",
        latitude: 12.2150,
        longitude: 79.0750,
        distance_km: 3.8,
        direction: "South",
        significance: "Represents transformation and Lord Yama",
    },
    Shrine {
        id: "niruthi-lingam",
        name: "Niruthi Lingam",
        tamil_name: "நிருதி லிங்கம்",
        latitude: 12.2200,
        longitude: 79.0650,
        distance_km: 5.8,
        direction: "Southwest",
        significance: "Represents protection and Lord Niruthi",
    },
    Shrine {
        id: "varuna-lingam",
        name: "Varuna Lingam",
        tamil_name: "வருண லிங்கம்",
        latitude: 12.2250,
        longitude: 79.0600,
        distance_km: 7.6,
        direction: "West",
        significance: "Represents the element of Water and Lord Varuna",
    },
    Shrine {
        id: "vayu-lingam",
        name: "Vayu Lingam",
        tamil_name: "வாயு லிங்கம்",
        latitude: 12.2350,
        longitude: 79.0650,
        distance_km: 9.6,
        direction: "Northwest",
        significance: "Represents the element of Wind and Lord Vayu",
    },
    Shrine {
        id: "kubera-lingam",
        name: "Kubera Lingam",
        tamil_name: "குபேர லிங்கம்",
        latitude: 12.2400,
        longitude: 79.0750,
        distance_km: 11.9,
        direction: "North",
        significance: "Represents wealth and Lord Kubera",
    },
    Shrine {
        id: "isanya-lingam",
        name: "Isanya Lingam",
        tamil_name: "ஈசானிய லிங்கம்",
        latitude: 12.2350,
        longitude: 79.0800,
        distance_km: 14.2,
        direction: "Northeast",
        significance: "Represents completion and Lord Isanya",
    },
];

pub(super) fn girivalam_config() -> RouteConfig {
    let waypoints = SHRINES
        .iter()
        .enumerate()
        .map(|(index, shrine)| Waypoint {
            id: shrine.id.to_string(),
            name: shrine.name.to_string(),
            localized_name: Some(shrine.tamil_name.to_string()),
            position: GeoPoint { latitude: shrine.latitude, longitude: shrine.longitude },
            sequence_index: index,
            distance_from_start_km: shrine.distance_km,
            direction: Some(shrine.direction.to_string()),
            significance: Some(shrine.significance.to_string()),
            audio_guide: Some(AudioGuide {
                tamil: Some(format!("/audio/checkpoint{}_tamil.mp3", index + 1)),
                english: Some(format!("/audio/checkpoint{}_english.mp3", index + 1)),
            }),
        })
        .collect();

    RouteConfig {
        name: "Girivalam".to_string(),
        localized_name: Some("கிரிவலம்".to_string()),
        estimated_duration_minutes: Some(270.0),
        waypoints,
    }
}
