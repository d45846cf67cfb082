//! Journey summary statistics.

use serde::{Deserialize, Serialize};

use crate::journey::Outcome;

const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_MINUTE: i64 = 60_000;

/// Running or final totals for a journey.
///
/// `closed` counts both closed and not-found stops; the summary shows them as
/// one bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneyStats {
    pub visited: usize,
    pub postponed: usize,
    pub closed: usize,
    pub elapsed_ms: i64,
}

impl JourneyStats {
    pub fn from_outcomes<I>(outcomes: I, elapsed_ms: i64) -> Self
    where
        I: IntoIterator<Item = Outcome>,
    {
        let mut stats = Self {
            elapsed_ms,
            ..Self::default()
        };
        for outcome in outcomes {
            match outcome {
                Outcome::Visited => stats.visited += 1,
                Outcome::Postponed => stats.postponed += 1,
                Outcome::Closed | Outcome::NotFound => stats.closed += 1,
            }
        }
        stats
    }

    /// Number of recorded outcomes.
    pub fn total(&self) -> usize {
        self.visited + self.postponed + self.closed
    }

    pub fn duration_label(&self) -> String {
        format_duration(self.elapsed_ms)
    }
}

/// "H hours M minutes", or "M minutes" under one hour.
pub fn format_duration(elapsed_ms: i64) -> String {
    let elapsed_ms = elapsed_ms.max(0);
    let hours = elapsed_ms / MS_PER_HOUR;
    let minutes = (elapsed_ms % MS_PER_HOUR) / MS_PER_MINUTE;

    if hours > 0 {
        format!("{} hours {} minutes", hours, minutes)
    } else {
        format!("{} minutes", minutes)
    }
}
