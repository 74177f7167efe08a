use serde::Serialize;

/// A (longitude, latitude) pair in decimal degrees.
///
/// Coordinates are generated fresh for every remote call and never persisted.
/// The remote endpoints expect both values as text, see [`Coordinate::longitude_text`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinate {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Shortest decimal text that parses back to the same value.
    pub fn longitude_text(&self) -> String {
        self.longitude.to_string()
    }

    pub fn latitude_text(&self) -> String {
        self.latitude.to_string()
    }
}
