//! Core domain traits for the journey planner.
//!
//! These are intentionally minimal. The surrounding app implements [`Stop`]
//! for its own place records; everything beyond an id and a coordinate stays
//! outside the engine.

use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::haversine::{Coordinate, estimated_minutes};
use crate::matrix::DistanceMatrix;

/// Unique identifier for planner entities.
pub trait Id: Clone + Eq + Hash {}

impl<T> Id for T where T: Clone + Eq + Hash {}

/// A single place to be visited, reduced to what routing needs.
pub trait Stop {
    type Id: Id;

    fn id(&self) -> &Self::Id;

    /// Location of the stop.
    fn location(&self) -> Coordinate;
}

/// Provides a pairwise distance matrix (kilometers) for a set of locations.
///
/// The matrix is indexed by the provided location order.
pub trait DistanceMatrixProvider {
    fn matrix_for(&self, locations: &[Coordinate]) -> DistanceMatrix;

    /// Rough travel minutes for `km`. Defaults to [`estimated_minutes`].
    fn minutes_for(&self, km: f64) -> f64 {
        estimated_minutes(km)
    }
}

/// Plain [`Stop`] for callers without their own place type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleStop<I> {
    pub id: I,
    pub location: Coordinate,
}

impl<I: Id> SimpleStop<I> {
    pub fn new(id: I, location: Coordinate) -> Self {
        Self { id, location }
    }
}

impl<I: Id> Stop for SimpleStop<I> {
    type Id = I;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn location(&self) -> Coordinate {
        self.location
    }
}
