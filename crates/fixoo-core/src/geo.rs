// crates/fixoo-core/src/geo.rs

use serde::{Deserialize, Serialize};

/// Earth mean radius in kilometers, as used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic coordinate in signed floating degrees.
///
/// Latitude is expected in `[-90, 90]`, longitude in `[-180, 180]`.
/// Coordinates originate from the trusted catalog or from a
/// [`LocationProvider`](crate::location::LocationProvider); out-of-range
/// values are a caller error and are not guarded against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Coordinate { lat, lng }
    }

    /// Great-circle distance to `other` in kilometers.
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        haversine_km(*self, *other)
    }
}

/// Great-circle distance between two points via the haversine formula.
///
/// `a = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlon/2)`,
/// `d = 2R·atan2(√a, √(1−a))` with R = [`EARTH_RADIUS_KM`].
///
/// Pure over finite inputs: non-negative, symmetric, and exactly `0.0`
/// for identical points.
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
