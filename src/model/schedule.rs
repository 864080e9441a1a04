//! Schedule records.

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::Interval;

/// One concrete occupied interval on the calendar: a course in a room
/// between two instants.
///
/// The `recurring` flag and pattern are stored as-is and never expanded
/// into multiple instances; only the single stored interval is considered
/// by any analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    /// Unique identifier.
    pub id: String,
    /// Occupied room.
    pub room_id: String,
    /// Scheduled course.
    pub course_id: String,
    /// Start instant (local wall-clock).
    pub start_time: NaiveDateTime,
    /// End instant. Callers guarantee `end_time > start_time`; the
    /// analysis core does not re-validate.
    pub end_time: NaiveDateTime,
    #[serde(default)]
    pub recurring: bool,
    /// Opaque recurrence pattern, unused by analysis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence_pattern: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Schedule {
    /// Create a new schedule record.
    pub fn new(
        room_id: impl Into<String>,
        course_id: impl Into<String>,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
    ) -> Self {
        let now = Utc::now().naive_local();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            room_id: room_id.into(),
            course_id: course_id.into(),
            start_time,
            end_time,
            recurring: false,
            recurrence_pattern: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Mark as recurring with an opaque pattern.
    pub fn with_recurrence(mut self, pattern: impl Into<String>) -> Self {
        self.recurring = true;
        self.recurrence_pattern = Some(pattern.into());
        self
    }

    /// The occupied interval `[start_time, end_time)`.
    pub fn interval(&self) -> Interval {
        Interval::new(self.start_time, self.end_time)
    }

    /// Whether the stored times form a well-formed interval.
    pub fn times_are_valid(&self) -> bool {
        self.end_time > self.start_time
    }
}
