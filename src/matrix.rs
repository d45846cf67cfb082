//! Pairwise distance matrix over a set of stops.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::haversine::{Coordinate, distance_km};
use crate::traits::Stop;

/// N×N great-circle distances in kilometers, indexed by stop order.
///
/// Built matrices have a zero diagonal and are symmetric. Coincident stops are
/// kept as distinct nodes with zero distance between them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DistanceMatrix {
    rows: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    /// Builds the matrix for `stops` in the given order.
    pub fn build<S: Stop>(stops: &[S]) -> Self {
        let locations: Vec<Coordinate> = stops.iter().map(Stop::location).collect();
        Self::from_locations(&locations)
    }

    /// Same result as [`DistanceMatrix::build`], with rows computed on the
    /// rayon pool. Only worth it for large stop counts.
    pub fn build_parallel<S: Stop>(stops: &[S]) -> Self {
        let locations: Vec<Coordinate> = stops.iter().map(Stop::location).collect();
        Self::from_locations_parallel(&locations)
    }

    pub fn from_locations_parallel(locations: &[Coordinate]) -> Self {
        let rows: Vec<Vec<f64>> = locations
            .par_iter()
            .enumerate()
            .map(|(i, from)| {
                locations
                    .iter()
                    .enumerate()
                    .map(|(j, to)| if i == j { 0.0 } else { distance_km(*from, *to) })
                    .collect()
            })
            .collect();
        debug!(stops = locations.len(), "built distance matrix in parallel");
        Self { rows }
    }

    pub fn from_locations(locations: &[Coordinate]) -> Self {
        let n = locations.len();
        let mut rows = vec![vec![0.0; n]; n];

        for i in 0..n {
            for j in i + 1..n {
                let km = distance_km(locations[i], locations[j]);
                rows[i][j] = km;
                rows[j][i] = km;
            }
        }

        debug!(stops = n, "built distance matrix");
        Self { rows }
    }

    /// Wraps precomputed rows. They must form a square matrix of finite,
    /// non-negative values.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(Error::invalid_input(format!(
                    "matrix row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
            if let Some(value) = row.iter().find(|v| !v.is_finite() || **v < 0.0) {
                return Err(Error::invalid_input(format!(
                    "matrix row {} contains invalid distance {}",
                    i, value
                )));
            }
        }
        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.rows[from][to]
    }

    /// Open-path cost of visiting `route` in order (no return leg).
    pub fn route_cost(&self, route: &[usize]) -> f64 {
        route
            .windows(2)
            .map(|pair| self.rows[pair[0]][pair[1]])
            .sum()
    }
}
