//! Half-open time intervals.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A half-open interval `[start, end)` in local wall-clock date-time.
///
/// Includes `start`, excludes `end`. Construction does not validate
/// `start < end`; callers validate upstream (e.g., at schedule creation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Interval {
    /// Create a new interval.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Whether two intervals overlap.
    ///
    /// Strict inequalities on both sides: intervals that merely touch at
    /// an endpoint do not overlap. Symmetric. A zero-duration interval
    /// never overlaps at either endpoint of another, but one strictly
    /// inside a well-formed interval does count as overlapping.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Duration in whole minutes (`end - start`).
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Whether an instant falls within the interval under *closed* bounds
    /// (`start <= t <= end`).
    ///
    /// This is inclusive on both ends, unlike [`Interval::overlaps`].
    /// Only the rooms-available-now query uses the closed test; results
    /// differ from the overlap predicate exactly at schedule boundaries.
    pub fn contains_inclusive(&self, t: NaiveDateTime) -> bool {
        t >= self.start && t <= self.end
    }
}
