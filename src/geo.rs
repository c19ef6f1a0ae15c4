//! Great-circle distance on a spherical Earth.

use serde::{Deserialize, Serialize};

use crate::{Result, TrackingError};

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Latitude/longitude pair in degrees (WGS-84).
///
/// Construction through struct literals or deserialization is unchecked so
/// that a bad device fix can travel as far as the distance function, which
/// rejects it. Use [`GeoPoint::new`] for a validated point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a point, rejecting out-of-range or non-finite coordinates.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        let point = Self { latitude, longitude };
        point.validate()?;
        Ok(point)
    }

    /// Check that latitude is within [-90, 90] and longitude within [-180, 180].
    pub fn validate(&self) -> Result<()> {
        let latitude_ok = self.latitude.is_finite() && (-90.0..=90.0).contains(&self.latitude);
        let longitude_ok =
            self.longitude.is_finite() && (-180.0..=180.0).contains(&self.longitude);

        if latitude_ok && longitude_ok {
            Ok(())
        } else {
            Err(TrackingError::invalid_coordinate(self.latitude, self.longitude))
        }
    }

    /// Distance to another point in kilometers.
    pub fn distance_km(&self, other: &GeoPoint) -> Result<f64> {
        haversine_km(self, other)
    }
}

/// Great-circle distance between two points in kilometers.
///
/// Fails with [`TrackingError::InvalidCoordinate`] if either point is out of
/// range. The result is exactly symmetric in its arguments.
pub fn haversine_km(a: &GeoPoint, b: &GeoPoint) -> Result<f64> {
    a.validate()?;
    b.validate()?;

    let lat1_rad = a.latitude.to_radians();
    let lat2_rad = b.latitude.to_radians();

    // Absolute deltas keep the result bit-identical when the arguments are swapped
    let dlat = (b.latitude - a.latitude).abs().to_radians();
    let dlon = (b.longitude - a.longitude).abs().to_radians();

    let h = ((dlat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (dlon / 2.0).sin().powi(2))
    .min(1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    Ok(EARTH_RADIUS_KM * c)
}

/// Great-circle distance from raw degree values.
pub fn distance_km(latitude_1: f64, longitude_1: f64, latitude_2: f64, longitude_2: f64) -> Result<f64> {
    haversine_km(
        &GeoPoint { latitude: latitude_1, longitude: longitude_1 },
        &GeoPoint { latitude: latitude_2, longitude: longitude_2 },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn valid_point() -> impl Strategy<Value = GeoPoint> {
        (-90.0f64..=90.0, -180.0f64..=180.0)
            .prop_map(|(latitude, longitude)| GeoPoint { latitude, longitude })
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(a in valid_point(), b in valid_point()) {
            let ab = haversine_km(&a, &b).unwrap();
            let ba = haversine_km(&b, &a).unwrap();
            prop_assert_eq!(ab, ba);
        }

        #[test]
        fn distance_to_self_is_zero(a in valid_point()) {
            prop_assert_eq!(haversine_km(&a, &a).unwrap(), 0.0);
        }

        #[test]
        fn distance_is_bounded_by_half_circumference(a in valid_point(), b in valid_point()) {
            let d = haversine_km(&a, &b).unwrap();
            prop_assert!(d >= 0.0);
            prop_assert!(d <= std::f64::consts::PI * EARTH_RADIUS_KM + 1e-6);
        }

        #[test]
        fn out_of_range_latitude_is_rejected(latitude in 90.0001f64..1000.0, longitude in -180.0f64..=180.0) {
            let result = distance_km(latitude, longitude, 0.0, 0.0);
            let is_invalid_coordinate = matches!(result, Err(TrackingError::InvalidCoordinate { .. }));
            prop_assert!(is_invalid_coordinate);
        }
    }

    #[test]
    fn known_distance_between_lingams() {
        // Indra Lingam to Isanya Lingam: 0.005 degrees of latitude apart
        let d = distance_km(12.2300, 79.0800, 12.2350, 79.0800).unwrap();
        assert!((d - 0.55597).abs() < 1e-3, "got {}", d);
    }

    #[test]
    fn one_degree_of_longitude_at_equator() {
        let d = distance_km(0.0, 0.0, 0.0, 1.0).unwrap();
        assert!((d - 111.195).abs() < 1e-2, "got {}", d);
    }

    #[test]
    fn rejects_non_finite_and_out_of_range_values() {
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::new(0.0, f64::INFINITY).is_err());
        assert!(GeoPoint::new(-90.5, 0.0).is_err());
        assert!(GeoPoint::new(0.0, 180.5).is_err());
        assert!(GeoPoint::new(90.0, -180.0).is_ok());
    }

    #[test]
    fn second_point_is_validated_too() {
        let good = GeoPoint { latitude: 12.23, longitude: 79.08 };
        let bad = GeoPoint { latitude: 12.23, longitude: 200.0 };
        match good.distance_km(&bad) {
            Err(TrackingError::InvalidCoordinate { latitude, longitude }) => {
                assert_eq!(latitude, 12.23);
                assert_eq!(longitude, 200.0);
            }
            other => panic!("Expected InvalidCoordinate, got {:?}", other),
        }
    }
}
