//! Types for the query router.

use serde::{Deserialize, Serialize};

/// The classified purpose of a free-text query.
///
/// Entity fields hold the token extracted from the query, not a resolved
/// record: `None` means the rule's keywords matched but no name/code could
/// be extracted, which produces a prompt rather than falling through to
/// the next rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryIntent {
    /// Empty time slots for a room today.
    EmptySlots { room: Option<String> },
    /// Seating capacity of a room.
    Capacity { room: Option<String> },
    /// Facility tags of a room.
    Facilities { room: Option<String> },
    /// Location of a building.
    Location { building: Option<String> },
    /// Today's sessions of a course.
    CourseSchedule { course: Option<String> },
    /// An instructor's day schedule and conflicts.
    InstructorSchedule { instructor: Option<String> },
    /// Rooms available at the current instant.
    AvailableNow,
    /// No rule matched; answer with the help text.
    Help,
}

impl QueryIntent {
    /// Get a human-readable name for this intent.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::EmptySlots { .. } => "Empty Slots",
            Self::Capacity { .. } => "Room Capacity",
            Self::Facilities { .. } => "Room Facilities",
            Self::Location { .. } => "Building Location",
            Self::CourseSchedule { .. } => "Course Schedule",
            Self::InstructorSchedule { .. } => "Instructor Schedule",
            Self::AvailableNow => "Available Rooms",
            Self::Help => "Help",
        }
    }
}
