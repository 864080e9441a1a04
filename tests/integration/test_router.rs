//! End-to-end tests for the query router over a snapshot loaded from disk.

use std::io::Write;

use chrono::{NaiveDate, NaiveDateTime};
use tempfile::NamedTempFile;

use atrium::query::HELP_TEXT;
use atrium::{
    Building, Course, Floor, Instructor, QueryIntent, QueryRouter, Room, Schedule, Snapshot,
};

fn at(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 2)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

fn campus() -> Snapshot {
    let science = Building::new("Science Hall", "12 North Campus Drive");
    let ground = Floor::new(&science.id, "Ground", 0);
    let room101 = Room::new(&science.id, "101", 40).with_facilities(["projector", "wifi"]);
    let room102 = Room::new(&science.id, "102", 20);
    let smith = Instructor::new("Dr. Smith", "smith@example.edu", "Computer Science")
        .with_specialization("Databases");
    let cs101 = Course::new("CS101", "Intro to Programming").with_instructor(&smith.id);
    let schedules = vec![Schedule::new(&room101.id, &cs101.id, at(9, 0), at(10, 0))];

    Snapshot {
        buildings: vec![science],
        floors: vec![ground],
        rooms: vec![room101, room102],
        courses: vec![cs101],
        instructors: vec![smith],
        schedules,
    }
}

/// Write a snapshot out as JSON and read it back through the file loader.
fn round_trip_through_file(records: &Snapshot) -> Snapshot {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", serde_json::to_string_pretty(records).unwrap()).unwrap();
    Snapshot::from_file(file.path()).unwrap()
}

#[test]
fn test_snapshot_file_round_trip_preserves_records() {
    let records = round_trip_through_file(&campus());
    assert_eq!(records.rooms.len(), 2);
    assert_eq!(records.schedules.len(), 1);
    assert_eq!(records.rooms[0].facilities, vec!["projector", "wifi"]);
}

#[test]
fn test_empty_slots_from_loaded_snapshot() {
    let records = round_trip_through_file(&campus());
    let router = QueryRouter::new();

    let answer = router.answer_at("show empty slots for room 101", &records, at(12, 0));
    assert!(answer.starts_with("Empty time slots for Room 101 today:"));
    assert!(answer.contains("Mar 2, 2026 8:00 AM - 9:00 AM"));
    assert!(answer.contains("Mar 2, 2026 10:00 AM - 6:00 PM"));
}

#[test]
fn test_unknown_room_lists_known_rooms() {
    let records = campus();
    let router = QueryRouter::new();

    let answer = router.answer_at("show empty slots for room 999", &records, at(12, 0));
    assert_eq!(answer, "Room 999 not found. Available rooms are: 101, 102");
}

#[test]
fn test_capacity_answer_names_room_and_building() {
    let records = campus();
    let router = QueryRouter::new();

    let answer = router.answer_at("what is the capacity of room 101", &records, at(12, 0));
    assert_eq!(answer, "Room 101 in Science Hall has a capacity of 40 people.");
}

#[test]
fn test_course_schedule_includes_today_sessions() {
    let records = campus();
    let router = QueryRouter::new();

    let answer = router.answer_at("when is course CS101", &records, at(12, 0));
    assert!(answer.contains("Schedule for Intro to Programming (CS101):"));
    assert!(answer.contains("Mar 2, 2026 9:00 AM - 10:00 AM in Room 101"));
}

#[test]
fn test_availability_excludes_occupied_room_at_query_time() {
    let records = campus();
    let router = QueryRouter::new();

    let during = router.answer_at("which rooms are available now", &records, at(9, 30));
    assert!(!during.contains("Room 101"));
    assert!(during.contains("Room 102 (Science Hall, Floor Ground) - Capacity: 20"));

    let after = router.answer_at("which rooms are available now", &records, at(11, 0));
    assert!(after.contains("Room 101"));
    assert!(after.contains("Room 102"));
}

#[test]
fn test_off_topic_query_gets_help_text() {
    let records = campus();
    let router = QueryRouter::new();

    let answer = router.answer_at("banana smoothie recipe", &records, at(12, 0));
    assert_eq!(answer, HELP_TEXT);
    assert!(matches!(
        router.classify("banana smoothie recipe"),
        QueryIntent::Help
    ));
}

#[test]
fn test_queries_are_case_insensitive() {
    let records = campus();
    let router = QueryRouter::new();

    let answer = router.answer_at("WHAT IS THE CAPACITY OF ROOM 101", &records, at(12, 0));
    assert!(answer.contains("capacity of 40"));
}
