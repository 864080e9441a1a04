//! Output formatting for CLI commands.
//!
//! Each printer handles both JSON and human-readable output.

use atrium::{InstructorDay, Interval, Room, Snapshot};

/// Print free slots for a room.
pub fn print_slots(room_name: &str, slots: &[Interval], json: bool) {
    if json {
        println!("{}", serde_json::to_string_pretty(slots).unwrap());
    } else if slots.is_empty() {
        println!("Room {room_name} has no free slots in business hours.");
    } else {
        println!("Free slots for room {room_name}:");
        for slot in slots {
            println!(
                "- {} ({} min)",
                atrium::utils::format_schedule_time(slot.start, slot.end),
                slot.duration_minutes()
            );
        }
    }
}

/// Print an instructor's day load.
pub fn print_instructor_day(name: &str, day: &InstructorDay, records: &Snapshot, json: bool) {
    if json {
        println!("{}", serde_json::to_string_pretty(day).unwrap());
        return;
    }

    if day.sessions.is_empty() {
        println!("{name} has no scheduled sessions on that day.");
        return;
    }

    println!("Sessions for {name}:");
    for session in &day.sessions {
        let course = records
            .courses
            .iter()
            .find(|c| c.id == session.course_id)
            .map(|c| c.name.as_str())
            .unwrap_or("Unknown course");
        let room = records
            .rooms
            .iter()
            .find(|r| r.id == session.room_id)
            .map(|r| r.name.as_str())
            .unwrap_or("Unknown room");
        println!(
            "- {} ({} in Room {})",
            atrium::utils::format_schedule_time(session.start_time, session.end_time),
            course,
            room
        );
    }
    if day.has_conflict {
        println!("Warning: schedule has time conflicts");
    }
}

/// Print a room list (availability or search results).
pub fn print_rooms(rooms: &[&Room], records: &Snapshot, json: bool) {
    if json {
        println!("{}", serde_json::to_string_pretty(rooms).unwrap());
        return;
    }

    if rooms.is_empty() {
        println!("No matching rooms.");
        return;
    }

    for room in rooms {
        let building = records
            .building_for_room(room)
            .map(|b| b.name.as_str())
            .unwrap_or("Unknown Building");
        println!(
            "- Room {} ({}) - Capacity: {} [{}]",
            room.name,
            building,
            room.capacity,
            room.status.display_name()
        );
    }
}
