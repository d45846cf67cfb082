//! Journey state machine.
//!
//! A [`Journey`] walks one user through an ordered list of stops:
//! `Planning -> Active -> Complete`. Every transition is a synchronous call
//! that either returns the new state or rejects the call and leaves the
//! journey untouched. Timestamps are supplied by the caller.
//!
//! Abandoning a journey is just dropping it; there is no cancelled state.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::stats::JourneyStats;
use crate::traits::Stop;

/// Milliseconds since the Unix epoch.
pub type Timestamp = i64;

/// Result of arriving at a stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Visited,
    Postponed,
    Closed,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JourneyState {
    Planning,
    Active,
    Complete,
}

/// One recorded outcome. Ratings are only kept for visited stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitRecord<I> {
    pub stop_index: usize,
    pub stop_id: I,
    pub outcome: Outcome,
    pub recorded_at: Timestamp,
    pub rating: Option<u8>,
    pub note: String,
}

#[derive(Debug, Clone)]
pub struct Journey<S: Stop> {
    stops: Vec<S>,
    state: JourneyState,
    current: usize,
    records: Vec<VisitRecord<S::Id>>,
    started_at: Option<Timestamp>,
    completed_at: Option<Timestamp>,
    last_event_at: Option<Timestamp>,
}

impl<S: Stop> Journey<S> {
    /// A journey over `stops` in the given order, not yet started.
    pub fn new(stops: Vec<S>) -> Self {
        Self {
            stops,
            state: JourneyState::Planning,
            current: 0,
            records: Vec::new(),
            started_at: None,
            completed_at: None,
            last_event_at: None,
        }
    }

    /// Creates and starts a journey in one step.
    pub fn begin(stops: Vec<S>, at: Timestamp) -> Result<Self> {
        let mut journey = Self::new(stops);
        journey.start(at)?;
        Ok(journey)
    }

    pub fn start(&mut self, at: Timestamp) -> Result<JourneyState> {
        if self.state != JourneyState::Planning {
            return Err(Error::invalid_transition(self.state, "start"));
        }
        if self.stops.is_empty() {
            return Err(Error::invalid_input("cannot start a journey with no stops"));
        }

        self.state = JourneyState::Active;
        self.current = 0;
        self.records.clear();
        self.started_at = Some(at);
        self.last_event_at = Some(at);

        info!(stops = self.stops.len(), started_at = at, "journey started");
        Ok(self.state)
    }

    /// Records `outcome` for the current stop and moves to the next one.
    pub fn record_outcome(
        &mut self,
        outcome: Outcome,
        note: impl Into<String>,
        rating: Option<u8>,
        at: Timestamp,
    ) -> Result<JourneyState> {
        self.ensure_active("record an outcome for")?;
        if let Some(rating) = rating {
            if !(1..=5).contains(&rating) {
                return Err(Error::invalid_input(format!("rating {} is outside 1..=5", rating)));
            }
        }
        self.ensure_not_before_last_event(at)?;

        let rating = match outcome {
            Outcome::Visited => rating,
            _ => None,
        };
        let stop_index = self.current;
        self.records.push(VisitRecord {
            stop_index,
            stop_id: self.stops[stop_index].id().clone(),
            outcome,
            recorded_at: at,
            rating,
            note: note.into(),
        });
        debug!(stop_index, ?outcome, "recorded outcome");

        Ok(self.advance(at))
    }

    /// Moves past the current stop without recording anything.
    pub fn skip(&mut self, at: Timestamp) -> Result<JourneyState> {
        self.ensure_active("skip")?;
        self.ensure_not_before_last_event(at)?;

        debug!(stop_index = self.current, "skipped stop");
        Ok(self.advance(at))
    }

    fn advance(&mut self, at: Timestamp) -> JourneyState {
        self.current += 1;
        self.last_event_at = Some(at);

        if self.current == self.stops.len() {
            self.state = JourneyState::Complete;
            self.completed_at = Some(at);

            let stats = self.stats(at);
            info!(
                visited = stats.visited,
                postponed = stats.postponed,
                closed = stats.closed,
                duration = %stats.duration_label(),
                "journey complete"
            );
        }

        self.state
    }

    fn ensure_active(&self, action: &'static str) -> Result<()> {
        if self.state == JourneyState::Active {
            Ok(())
        } else {
            Err(Error::invalid_transition(self.state, action))
        }
    }

    fn ensure_not_before_last_event(&self, at: Timestamp) -> Result<()> {
        match self.last_event_at {
            Some(last) if at < last => Err(Error::invalid_input(format!(
                "timestamp {} is earlier than the previous event at {}",
                at, last
            ))),
            _ => Ok(()),
        }
    }

    pub fn state(&self) -> JourneyState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == JourneyState::Complete
    }

    /// Index of the current target. Equals `stops().len()` once complete.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The stop the user is heading to, while active.
    pub fn current_stop(&self) -> Option<&S> {
        match self.state {
            JourneyState::Active => self.stops.get(self.current),
            _ => None,
        }
    }

    /// Stops not yet recorded or skipped, current target first.
    pub fn remaining(&self) -> &[S] {
        match self.state {
            JourneyState::Planning => &self.stops,
            _ => &self.stops[self.current..],
        }
    }

    pub fn stops(&self) -> &[S] {
        &self.stops
    }

    pub fn records(&self) -> &[VisitRecord<S::Id>] {
        &self.records
    }

    pub fn last_record(&self) -> Option<&VisitRecord<S::Id>> {
        self.records.last()
    }

    pub fn started_at(&self) -> Option<Timestamp> {
        self.started_at
    }

    pub fn completed_at(&self) -> Option<Timestamp> {
        self.completed_at
    }

    /// Totals so far. Elapsed time runs to `now` while active and is frozen
    /// at completion.
    pub fn stats(&self, now: Timestamp) -> JourneyStats {
        let elapsed_ms = match self.started_at {
            Some(start) => self.completed_at.unwrap_or(now).saturating_sub(start).max(0),
            None => 0,
        };
        JourneyStats::from_outcomes(self.records.iter().map(|record| record.outcome), elapsed_ms)
    }

    /// Straight-line km through the remaining stops, starting at the current
    /// target.
    pub fn distance_remaining_km(&self) -> f64 {
        self.remaining()
            .windows(2)
            .map(|pair| pair[0].location().distance_to(&pair[1].location()))
            .sum()
    }
}
