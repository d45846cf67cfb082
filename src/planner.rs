//! Route planning: the opt-in step the planning screen runs before a journey.
//!
//! Nothing here runs implicitly. A [`Journey`] accepts stops in whatever
//! order it is given; callers who want a short route call [`plan_route`]
//! first and start the journey from the result.

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::haversine::Coordinate;
use crate::journey::Journey;
use crate::solver::{SolveOptions, optimize};
use crate::traits::{DistanceMatrixProvider, Stop};

#[derive(Debug, Clone, Default)]
pub struct PlanOptions {
    pub solve: SolveOptions,
}

/// One leg of a planned route. `from` is `None` for the leg leaving the
/// anchor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteLeg<I> {
    pub from: Option<I>,
    pub to: I,
    pub distance_km: f64,
    /// Provider's rough estimate, not a routing-service ETA.
    pub estimated_minutes: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = "S: Serialize, S::Id: Serialize"))]
pub struct PlannedRoute<S: Stop> {
    /// Stops in travel order.
    pub stops: Vec<S>,
    /// Travel order as indices into the input slice.
    pub order: Vec<usize>,
    pub anchor: Option<Coordinate>,
    pub legs: Vec<RouteLeg<S::Id>>,
    /// Total km including the leg from the anchor.
    pub total_km: f64,
    pub estimated_minutes: f64,
    pub improvement_km: f64,
    pub converged: bool,
}

impl<S: Stop> PlannedRoute<S> {
    /// A journey over the planned stops, ready to start.
    pub fn into_journey(self) -> Journey<S> {
        Journey::new(self.stops)
    }
}

/// Orders `stops` into a short open path.
///
/// With an `anchor` (the traveler's current location) the route starts there
/// and the anchor is pinned; without one the optimizer runs over the stops
/// with `options.solve` as given. Distances and leg minutes come from
/// `matrix_provider`.
pub fn plan_route<S, M>(
    stops: &[S],
    anchor: Option<Coordinate>,
    matrix_provider: &M,
    options: &PlanOptions,
) -> Result<PlannedRoute<S>>
where
    S: Stop + Clone,
    M: DistanceMatrixProvider,
{
    if stops.is_empty() {
        return Err(Error::invalid_input("no stops selected"));
    }
    if let Some(anchor) = anchor {
        anchor.validate()?;
    }
    for (index, stop) in stops.iter().enumerate() {
        stop.location().validate().map_err(|e| match e {
            Error::InvalidInput(message) => Error::invalid_input(format!("stop {}: {}", index, message)),
            other => other,
        })?;
    }

    let offset = usize::from(anchor.is_some());
    let locations: Vec<Coordinate> = anchor
        .into_iter()
        .chain(stops.iter().map(Stop::location))
        .collect();

    let matrix = matrix_provider.matrix_for(&locations);
    if matrix.len() != locations.len() {
        return Err(Error::invalid_input(format!(
            "matrix provider returned {} rows for {} locations",
            matrix.len(),
            locations.len()
        )));
    }

    let mut solve_options = options.solve.clone();
    if anchor.is_some() {
        solve_options.preserve_start = true;
    }

    let initial: Vec<usize> = (0..locations.len()).collect();
    let optimized = optimize(&initial, &matrix, &solve_options)?;

    // Node 0 is the anchor when one is present; everything else maps back to
    // the caller's slice by subtracting the offset.
    let stop_at = |node: usize| node.checked_sub(offset).map(|index| &stops[index]);

    let legs = optimized
        .route
        .windows(2)
        .filter_map(|pair| {
            let to = stop_at(pair[1])?;
            let distance_km = matrix.get(pair[0], pair[1]);
            Some(RouteLeg {
                from: stop_at(pair[0]).map(|stop| stop.id().clone()),
                to: to.id().clone(),
                distance_km,
                estimated_minutes: matrix_provider.minutes_for(distance_km),
            })
        })
        .collect();

    let order: Vec<usize> = optimized
        .route
        .iter()
        .filter_map(|&node| node.checked_sub(offset))
        .collect();
    let ordered_stops = order.iter().map(|&index| stops[index].clone()).collect();

    debug!(
        stops = stops.len(),
        anchored = anchor.is_some(),
        total_km = optimized.cost_km,
        improvement_km = optimized.improvement_km,
        "planned route"
    );

    Ok(PlannedRoute {
        stops: ordered_stops,
        order,
        anchor,
        legs,
        total_km: optimized.cost_km,
        estimated_minutes: matrix_provider.minutes_for(optimized.cost_km),
        improvement_km: optimized.improvement_km,
        converged: optimized.converged,
    })
}
