//! Free-slot derivation within the daily business-hours bracket.

use chrono::{Local, NaiveDate, NaiveDateTime};

use crate::model::{Room, Schedule};

use super::Interval;

/// Default minimum usable slot duration for suggestions, in minutes.
pub const DEFAULT_MIN_SLOT_MINUTES: i64 = 60;

// Business hours are fixed at [08:00, 18:00); the bracket is not
// configurable.
const DAY_START_HOUR: u32 = 8;
const DAY_END_HOUR: u32 = 18;

/// The daily bracket `[08:00, 18:00)` on the given day.
pub fn day_bracket(day: NaiveDate) -> Interval {
    Interval::new(bracket_start(day), bracket_end(day))
}

fn bracket_start(day: NaiveDate) -> NaiveDateTime {
    day.and_hms_opt(DAY_START_HOUR, 0, 0).unwrap()
}

fn bracket_end(day: NaiveDate) -> NaiveDateTime {
    day.and_hms_opt(DAY_END_HOUR, 0, 0).unwrap()
}

/// Find the uncovered sub-intervals of the daily bracket for one room.
///
/// Schedules are filtered internally: only those for this room whose
/// start falls on `day` (date component, not instant equality) count.
/// The cursor walk advances by `max(cursor, schedule.end)`, so
/// overlapping input schedules are absorbed without ever emitting a
/// negative-length slot. Returned slots are disjoint and chronological.
pub fn find_free_slots(room: &Room, schedules: &[Schedule], day: NaiveDate) -> Vec<Interval> {
    let mut room_schedules: Vec<&Schedule> = schedules
        .iter()
        .filter(|s| s.room_id == room.id)
        .filter(|s| s.start_time.date() == day)
        .collect();
    room_schedules.sort_by_key(|s| s.start_time);

    let end = bracket_end(day);
    let mut cursor = bracket_start(day);
    let mut slots = Vec::new();

    for schedule in room_schedules {
        if cursor < schedule.start_time {
            slots.push(Interval::new(cursor, schedule.start_time));
        }
        cursor = cursor.max(schedule.end_time);
    }

    if cursor < end {
        slots.push(Interval::new(cursor, end));
    }

    slots
}

/// [`find_free_slots`] for the current calendar day.
pub fn find_free_slots_today(room: &Room, schedules: &[Schedule]) -> Vec<Interval> {
    find_free_slots(room, schedules, Local::now().date_naive())
}

/// Keep only slots of at least `min_minutes` duration.
///
/// Pure, order-preserving, and idempotent.
pub fn filter_by_min_duration(slots: Vec<Interval>, min_minutes: i64) -> Vec<Interval> {
    slots
        .into_iter()
        .filter(|slot| slot.duration_minutes() >= min_minutes)
        .collect()
}

/// Free slots for a room on a day that are long enough to be usable.
pub fn suggest_alternative_slots(
    room: &Room,
    schedules: &[Schedule],
    day: NaiveDate,
    min_minutes: i64,
) -> Vec<Interval> {
    filter_by_min_duration(find_free_slots(room, schedules, day), min_minutes)
}
