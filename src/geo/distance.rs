use super::METERS_PER_DEGREE;
use crate::models::coordinate::Coordinate;

/// Sphere radius consistent with [`METERS_PER_DEGREE`], so that the
/// great-circle distance agrees with the jitter's degree conversion.
pub const EARTH_RADIUS_METERS: f64 = METERS_PER_DEGREE * 180.0 / std::f64::consts::PI;

/// Haversine great-circle distance in meters.
pub fn great_circle_meters(a: Coordinate, b: Coordinate) -> f64 {
    let (lat1, lat2) = (a.latitude.to_radians(), b.latitude.to_radians());
    let dlat = lat2 - lat1;
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_METERS * h.sqrt().min(1.0).asin()
}
