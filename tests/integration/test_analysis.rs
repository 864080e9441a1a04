//! Tests for the schedule analysis pipeline over full record sets.

use chrono::{NaiveDate, NaiveDateTime};

use atrium::{
    check_room_conflict, find_available_rooms, find_instructor_conflicts, suggest_alternative_slots,
    Building, Course, Instructor, Interval, Room, RoomStatus, Schedule, Snapshot,
};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

fn at(h: u32, m: u32) -> NaiveDateTime {
    day().and_hms_opt(h, m, 0).unwrap()
}

/// A small campus: two rooms in one building, two courses taught by the
/// same instructor, with deliberately overlapping sessions.
fn campus() -> Snapshot {
    let science = Building::new("Science Hall", "12 North Campus Drive");
    let room101 = Room::new(&science.id, "101", 40).with_facility("projector");
    let room102 = Room::new(&science.id, "102", 20);
    let smith = Instructor::new("Dr. Smith", "smith@example.edu", "Computer Science");
    let cs101 = Course::new("CS101", "Intro to Programming").with_instructor(&smith.id);
    let cs201 = Course::new("CS201", "Data Structures").with_instructor(&smith.id);
    let schedules = vec![
        Schedule::new(&room101.id, &cs101.id, at(9, 0), at(10, 0)),
        Schedule::new(&room102.id, &cs201.id, at(9, 30), at(10, 30)),
    ];

    Snapshot {
        buildings: vec![science],
        floors: Vec::new(),
        rooms: vec![room101, room102],
        courses: vec![cs101, cs201],
        instructors: vec![smith],
        schedules,
    }
}

#[test]
fn test_unbooked_room_has_one_full_business_day_slot() {
    let mut records = campus();
    records.schedules.clear();

    let room = records.room_by_name("101").unwrap();
    let slots = suggest_alternative_slots(room, &records.schedules, day(), 60);
    assert_eq!(slots, vec![Interval::new(at(8, 0), at(18, 0))]);
    assert_eq!(slots[0].duration_minutes(), 600);
}

#[test]
fn test_booked_room_yields_ordered_disjoint_slots() {
    let records = campus();
    let room = records.room_by_name("101").unwrap();

    let slots = suggest_alternative_slots(room, &records.schedules, day(), 60);
    assert_eq!(
        slots,
        vec![
            Interval::new(at(8, 0), at(9, 0)),
            Interval::new(at(10, 0), at(18, 0)),
        ]
    );
}

#[test]
fn test_short_gaps_are_filtered_out() {
    let mut records = campus();
    let room_id = records.rooms[0].id.clone();
    let course_id = records.courses[0].id.clone();
    records.schedules = vec![
        Schedule::new(&room_id, &course_id, at(8, 0), at(12, 0)),
        Schedule::new(&room_id, &course_id, at(12, 30), at(18, 0)),
    ];

    let room = records.room_by_name("101").unwrap();
    // The only gap is 30 minutes, below the usable minimum.
    let slots = suggest_alternative_slots(room, &records.schedules, day(), 60);
    assert!(slots.is_empty());
}

#[test]
fn test_instructor_double_booking_is_flagged() {
    let records = campus();
    let smith = &records.instructors[0];

    let result = find_instructor_conflicts(smith, &records.schedules, &records.courses, day());
    assert_eq!(result.sessions.len(), 2);
    assert!(result.has_conflict);
    // Sorted by start regardless of input order.
    assert_eq!(result.sessions[0].start_time, at(9, 0));
    assert_eq!(result.sessions[1].start_time, at(9, 30));
}

#[test]
fn test_sequential_sessions_are_not_flagged() {
    let mut records = campus();
    let room102 = records.rooms[1].id.clone();
    let cs201 = records.courses[1].id.clone();
    records.schedules[1] = Schedule::new(&room102, &cs201, at(10, 0), at(11, 0));

    let smith = &records.instructors[0];
    let result = find_instructor_conflicts(smith, &records.schedules, &records.courses, day());
    assert_eq!(result.sessions.len(), 2);
    assert!(!result.has_conflict);
}

#[test]
fn test_room_conflict_check_for_new_booking() {
    let records = campus();
    let room101 = &records.rooms[0].id;

    // Collides with the 9:00-10:00 session.
    assert!(check_room_conflict(
        room101,
        Interval::new(at(9, 30), at(11, 0)),
        &records.schedules,
        None
    ));
    // Back-to-back is fine.
    assert!(!check_room_conflict(
        room101,
        Interval::new(at(10, 0), at(11, 0)),
        &records.schedules,
        None
    ));
    // Rescheduling the session over its own interval is fine.
    let existing = &records.schedules[0];
    assert!(!check_room_conflict(
        room101,
        existing.interval(),
        &records.schedules,
        Some(&existing.id)
    ));
}

#[test]
fn test_available_room_search_applies_all_filters() {
    let mut records = campus();
    records.rooms.push(
        Room::new(&records.buildings[0].id, "103", 80).with_status(RoomStatus::Maintenance),
    );

    let window = Interval::new(at(9, 0), at(10, 0));

    // Both scheduled rooms collide; the maintenance room is excluded by
    // its status flag.
    let free = find_available_rooms(window, &records.rooms, &records.schedules, None, &[]);
    assert!(free.is_empty());

    // The afternoon is open; facility and capacity filters narrow it down.
    let afternoon = Interval::new(at(14, 0), at(15, 0));
    let all = find_available_rooms(afternoon, &records.rooms, &records.schedules, None, &[]);
    assert_eq!(all.len(), 2);

    let projector = find_available_rooms(
        afternoon,
        &records.rooms,
        &records.schedules,
        Some(30),
        &["projector".to_string()],
    );
    assert_eq!(projector.len(), 1);
    assert_eq!(projector[0].name, "101");
}
