pub mod distance;
pub mod jitter;

pub use jitter::GeoJitter;

/// Local approximation: one degree of latitude spans this many meters.
pub const METERS_PER_DEGREE: f64 = 111_111.0;
