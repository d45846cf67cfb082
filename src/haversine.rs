//! Great-circle distance model.
//!
//! Distances ignore the road network entirely. Travel times derived from them
//! are a rough placeholder and must not be presented as a real ETA.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::matrix::DistanceMatrix;
use crate::traits::DistanceMatrixProvider;

/// Average urban speed assumption (stop-and-go), used for time estimation.
pub const DEFAULT_SPEED_KMH: f64 = 20.0;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    /// Builds a validated coordinate.
    pub fn new(lat: f64, lng: f64) -> Result<Self> {
        let coordinate = Self { lat, lng };
        coordinate.validate()?;
        Ok(coordinate)
    }

    /// Rejects non-finite or out-of-range values.
    pub fn validate(&self) -> Result<()> {
        if !self.lat.is_finite() || !self.lng.is_finite() {
            return Err(Error::invalid_input(format!(
                "non-finite coordinate ({}, {})",
                self.lat, self.lng
            )));
        }
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(Error::invalid_input(format!(
                "latitude {} must be between -90 and 90",
                self.lat
            )));
        }
        if !(-180.0..=180.0).contains(&self.lng) {
            return Err(Error::invalid_input(format!(
                "longitude {} must be between -180 and 180",
                self.lng
            )));
        }
        Ok(())
    }

    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        distance_km(*self, *other)
    }
}

/// Haversine distance between two points in kilometers.
///
/// Inputs are not validated; NaN in means NaN out.
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat1_rad = a.lat.to_radians();
    let lat2_rad = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    // Rounding can push h a hair above 1 for antipodal points. `clamp` keeps
    // NaN as NaN where `min` would turn it into 1.
    let c = 2.0 * h.clamp(0.0, 1.0).sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Rough travel minutes for a distance at [`DEFAULT_SPEED_KMH`] (`km * 3`).
pub fn estimated_minutes(distance_km: f64) -> f64 {
    distance_km * 60.0 / DEFAULT_SPEED_KMH
}

/// Haversine-based distance matrix provider.
#[derive(Debug, Clone)]
pub struct HaversineMatrix {
    /// Assumed average travel speed in km/h.
    pub speed_kmh: f64,
    /// Location count at which rows are built on the rayon pool instead of
    /// the calling thread.
    pub parallel_threshold: usize,
}

impl Default for HaversineMatrix {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
            parallel_threshold: 500,
        }
    }
}

impl HaversineMatrix {
    pub fn new(speed_kmh: f64) -> Self {
        Self {
            speed_kmh,
            ..Self::default()
        }
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}

impl DistanceMatrixProvider for HaversineMatrix {
    fn matrix_for(&self, locations: &[Coordinate]) -> DistanceMatrix {
        if locations.len() >= self.parallel_threshold {
            DistanceMatrix::from_locations_parallel(locations)
        } else {
            DistanceMatrix::from_locations(locations)
        }
    }

    /// Convert distance in km to travel time in minutes at this speed.
    fn minutes_for(&self, km: f64) -> f64 {
        km / self.speed_kmh * 60.0
    }
}
