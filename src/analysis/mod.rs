//! Schedule analysis: intervals, free slots, and conflict detection.
//!
//! Everything in this module is synchronous and pure: functions take
//! immutable record slices supplied by the caller and compute derived
//! views. Nothing here mutates records, retains state, or performs I/O.

mod conflicts;
mod interval;
mod slots;

pub use conflicts::{
    check_room_conflict, find_available_rooms, find_instructor_conflicts, InstructorDay,
};
pub use interval::Interval;
pub use slots::{
    day_bracket, filter_by_min_duration, find_free_slots, find_free_slots_today,
    suggest_alternative_slots, DEFAULT_MIN_SLOT_MINUTES,
};
