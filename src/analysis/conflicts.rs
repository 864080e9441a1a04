//! Conflict detection over schedule intervals.

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::{Course, Instructor, Room, RoomStatus, Schedule};

use super::Interval;

/// One instructor's sessions for one day, plus whether any pair of them
/// overlaps.
#[derive(Debug, Clone, Serialize)]
pub struct InstructorDay {
    /// The instructor's sessions on the day, sorted by start time.
    pub sessions: Vec<Schedule>,
    /// True iff at least one unordered pair of distinct sessions overlaps.
    pub has_conflict: bool,
}

/// Derive an instructor's day load and conflict flag.
///
/// Sessions are the schedules of courses assigned to the instructor whose
/// start falls on `day`. The conflict check is all-pairs; daily session
/// counts per instructor are small (typically under 20), so the quadratic
/// scan is fine. Self-comparison is excluded: a session never conflicts
/// with itself, and 0 or 1 sessions never conflict.
pub fn find_instructor_conflicts(
    instructor: &Instructor,
    schedules: &[Schedule],
    courses: &[Course],
    day: NaiveDate,
) -> InstructorDay {
    let mut sessions: Vec<Schedule> = schedules
        .iter()
        .filter(|s| {
            courses
                .iter()
                .any(|c| c.id == s.course_id && c.instructor_id.as_deref() == Some(&instructor.id))
        })
        .filter(|s| s.start_time.date() == day)
        .cloned()
        .collect();
    sessions.sort_by_key(|s| s.start_time);

    let has_conflict = any_pair_overlaps(&sessions);

    InstructorDay {
        sessions,
        has_conflict,
    }
}

fn any_pair_overlaps(sessions: &[Schedule]) -> bool {
    for i in 0..sessions.len() {
        for j in (i + 1)..sessions.len() {
            if sessions[i].interval().overlaps(&sessions[j].interval()) {
                return true;
            }
        }
    }
    false
}

/// Whether a candidate interval collides with any existing schedule for a
/// room.
///
/// `exclude_id` skips one schedule, so an edit does not conflict with the
/// record being edited. Purely in-memory; a production deployment would
/// pair this with a server-side serializable check.
pub fn check_room_conflict(
    room_id: &str,
    candidate: Interval,
    schedules: &[Schedule],
    exclude_id: Option<&str>,
) -> bool {
    schedules
        .iter()
        .filter(|s| s.room_id == room_id)
        .filter(|s| exclude_id != Some(s.id.as_str()))
        .any(|s| s.interval().overlaps(&candidate))
}

/// Rooms free for the whole candidate interval, optionally filtered by
/// minimum capacity and required facility tags.
///
/// Only rooms whose status flag is `Available` qualify; the flag is
/// manually set and independent of the schedule calendar.
pub fn find_available_rooms<'a>(
    candidate: Interval,
    rooms: &'a [Room],
    schedules: &[Schedule],
    min_capacity: Option<u32>,
    required_facilities: &[String],
) -> Vec<&'a Room> {
    rooms
        .iter()
        .filter(|room| room.status == RoomStatus::Available)
        .filter(|room| min_capacity.is_none_or(|cap| room.capacity >= cap))
        .filter(|room| {
            required_facilities
                .iter()
                .all(|facility| room.has_facility(facility))
        })
        .filter(|room| !check_room_conflict(&room.id, candidate, schedules, None))
        .collect()
}
