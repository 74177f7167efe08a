//! Randomized submission location around a fixed center.
//!
//! A distance `d ~ U(0, R)` and an angle `θ ~ U(0, 2π)` are drawn on every
//! call, so samples cluster towards the center. Meters are converted to
//! degrees with a flat local approximation: latitude uses a constant
//! meters-per-degree, longitude is additionally scaled by `cos(lat0)`,
//! computed once for the center and reused for every sample.

use rand::Rng;
use std::f64::consts::TAU;

use super::METERS_PER_DEGREE;
use crate::models::coordinate::Coordinate;

#[derive(Debug, Clone)]
pub struct GeoJitter {
    center: Coordinate,
    radius_meters: f64,
    lat_deg_per_meter: f64,
    lon_deg_per_meter: f64,
}

impl GeoJitter {
    /// A negative or non-finite radius is clamped to zero.
    pub fn new(center: Coordinate, radius_meters: f64) -> Self {
        let cos_lat = center.latitude.to_radians().cos();
        Self {
            center,
            radius_meters: if radius_meters.is_finite() {
                radius_meters.max(0.0)
            } else {
                0.0
            },
            lat_deg_per_meter: 1.0 / METERS_PER_DEGREE,
            lon_deg_per_meter: 1.0 / (METERS_PER_DEGREE * cos_lat),
        }
    }

    pub fn center(&self) -> Coordinate {
        self.center
    }

    pub fn radius_meters(&self) -> f64 {
        self.radius_meters
    }

    /// Draw a coordinate using the thread-local random source.
    pub fn sample(&self) -> Coordinate {
        self.sample_with(&mut rand::thread_rng())
    }

    pub fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Coordinate {
        let distance = rng.gen_range(0.0..=self.radius_meters);
        let angle = rng.gen_range(0.0..TAU);

        let lat_offset_meters = distance * angle.sin();
        let lon_offset_meters = distance * angle.cos();

        Coordinate::new(
            self.center.longitude + lon_offset_meters * self.lon_deg_per_meter,
            self.center.latitude + lat_offset_meters * self.lat_deg_per_meter,
        )
    }
}
