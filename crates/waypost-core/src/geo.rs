//! Great-circle distance on a spherical earth.
//!
//! Used to reject roads whose declared length is shorter than the straight
//! line between their endpoints, and to find points near a location.

use serde::{Deserialize, Serialize};

/// Mean earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether both parts are finite and inside the valid degree ranges.
    #[must_use]
    pub fn in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Great-circle distance to `other`, in meters.
    #[must_use]
    pub fn distance_m(&self, other: &Self) -> f64 {
        haversine(self.latitude, self.longitude, other.latitude, other.longitude)
    }

    /// Great-circle distance to `other`, in kilometers.
    #[must_use]
    pub fn distance_km(&self, other: &Self) -> f64 {
        self.distance_m(other) / 1000.0
    }
}

/// Haversine distance between two points given in degrees, in meters.
#[must_use]
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lon1, lat2, lon2) = (
        lat1.to_radians(),
        lon1.to_radians(),
        lat2.to_radians(),
        lon2.to_radians(),
    );
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_M * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_point_is_zero() {
        assert!(haversine(0.0, 0.0, 0.0, 0.0).abs() < f64::EPSILON);
        assert!(haversine(38.65, -27.22, 38.65, -27.22).abs() < 1e-6);
    }

    #[test]
    fn one_degree_of_longitude_on_equator() {
        let d = haversine(0.0, 0.0, 0.0, 1.0);
        assert!((d - 111_195.0).abs() / 111_195.0 < 0.01, "got {d}");
    }

    #[test]
    fn symmetric() {
        let a = haversine(38.654, -27.218, 38.731, -27.063);
        let b = haversine(38.731, -27.063, 38.654, -27.218);
        assert!((a - b).abs() < 1e-6);
    }

    #[test]
    fn antipodes_are_half_circumference() {
        let d = haversine(0.0, 0.0, 0.0, 180.0);
        let half = std::f64::consts::PI * EARTH_RADIUS_M;
        assert!((d - half).abs() < 1.0, "got {d}, expected {half}");
    }

    #[test]
    fn coordinates_report_kilometers() {
        let a = Coordinates::new(0.0, 0.0);
        let b = Coordinates::new(0.0, 1.0);
        assert!((a.distance_km(&b) - 111.195).abs() < 1.2);
    }

    #[test]
    fn range_check_covers_bounds_and_nan() {
        assert!(Coordinates::new(90.0, -180.0).in_range());
        assert!(Coordinates::new(38.6558, -27.2186).in_range());
        assert!(!Coordinates::new(1000.0, 0.0).in_range());
        assert!(!Coordinates::new(0.0, 180.5).in_range());
        assert!(!Coordinates::new(f64::NAN, 0.0).in_range());
        assert!(!Coordinates::new(0.0, f64::INFINITY).in_range());
    }
}
