//! Route optimizer: 2-opt local search over an open path.
//!
//! The search is first-improvement in row-major `(i, j)` order and restarts
//! from the top after every accepted move. Identical input always yields an
//! identical route. A scan tries O(N²) reversals and re-costs each candidate
//! over the whole route in O(N), so one scan is O(N³) and a full run is
//! O(max_iterations · N³). The engine is sized for tens of stops; thousands
//! need a smaller `max_iterations` budget.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::matrix::DistanceMatrix;

#[derive(Debug, Clone)]
pub struct SolveOptions {
    /// Maximum accepted moves before the search gives up on convergence.
    pub max_iterations: usize,
    /// Keep `route[0]` in place (the traveler's current position).
    pub preserve_start: bool,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            preserve_start: false,
        }
    }
}

impl SolveOptions {
    pub fn anchored() -> Self {
        Self {
            preserve_start: true,
            ..Self::default()
        }
    }
}

/// Result of an optimization pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Optimized {
    pub route: Vec<usize>,
    pub cost_km: f64,
    pub initial_cost_km: f64,
    /// `initial_cost_km - cost_km`, never negative.
    pub improvement_km: f64,
    /// Number of accepted improving moves.
    pub iterations: usize,
    /// True when the returned route admits no improving 2-opt move.
    pub converged: bool,
}

/// Improve `route` with 2-opt moves against `matrix`.
///
/// `route` must be a permutation of `0..matrix.len()`. Routes shorter than
/// three stops come back unchanged.
pub fn optimize(route: &[usize], matrix: &DistanceMatrix, options: &SolveOptions) -> Result<Optimized> {
    validate_route(route, matrix)?;

    let mut route = route.to_vec();
    let initial_cost = matrix.route_cost(&route);

    if route.len() < 3 {
        return Ok(Optimized {
            route,
            cost_km: initial_cost,
            initial_cost_km: initial_cost,
            improvement_km: 0.0,
            iterations: 0,
            converged: true,
        });
    }

    let mut cost = initial_cost;
    let mut iterations = 0;
    let mut converged = false;

    for _ in 0..options.max_iterations {
        match find_improving_move(&route, cost, matrix, options.preserve_start) {
            Some((i, j, new_cost)) => {
                route[i..=j].reverse();
                cost = new_cost;
                iterations += 1;
            }
            None => {
                converged = true;
                break;
            }
        }
    }

    // The last accepted move may have landed on a local optimum.
    if !converged {
        converged = find_improving_move(&route, cost, matrix, options.preserve_start).is_none();
    }

    if converged {
        debug!(
            stops = route.len(),
            iterations,
            initial_cost_km = initial_cost,
            cost_km = cost,
            "2-opt converged"
        );
    } else {
        warn!(
            stops = route.len(),
            max_iterations = options.max_iterations,
            cost_km = cost,
            "2-opt stopped at iteration cap"
        );
    }

    Ok(Optimized {
        route,
        cost_km: cost,
        initial_cost_km: initial_cost,
        improvement_km: initial_cost - cost,
        iterations,
        converged,
    })
}

/// 2-opt: the first `(i, j)` whose reversal of `route[i..=j]` lowers the
/// cost, with the new cost. The route itself is left untouched.
fn find_improving_move(
    route: &[usize],
    current_cost: f64,
    matrix: &DistanceMatrix,
    preserve_start: bool,
) -> Option<(usize, usize, f64)> {
    let n = route.len();
    let first = if preserve_start { 1 } else { 0 };
    let last = n - 1;
    let mut candidate = route.to_vec();

    for i in first..last {
        for j in i + 1..=last {
            candidate.copy_from_slice(route);
            candidate[i..=j].reverse();

            let cost = matrix.route_cost(&candidate);
            if cost < current_cost {
                return Some((i, j, cost));
            }
        }
    }

    None
}

fn validate_route(route: &[usize], matrix: &DistanceMatrix) -> Result<()> {
    if route.len() != matrix.len() {
        return Err(Error::invalid_input(format!(
            "route has {} stops but the matrix covers {}",
            route.len(),
            matrix.len()
        )));
    }

    let mut seen = vec![false; route.len()];
    for &index in route {
        match seen.get_mut(index) {
            Some(slot) if !*slot => *slot = true,
            Some(_) => {
                return Err(Error::invalid_input(format!("stop {} appears twice in route", index)));
            }
            None => {
                return Err(Error::invalid_input(format!("stop {} is outside the matrix", index)));
            }
        }
    }

    Ok(())
}
