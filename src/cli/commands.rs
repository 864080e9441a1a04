//! CLI command implementations.

use chrono::{Local, NaiveDate, NaiveDateTime};

use atrium::{
    find_available_rooms, find_instructor_conflicts, search_rooms, suggest_alternative_slots,
    Interval, QueryRouter, Result, Snapshot,
};

use super::output;

/// Answer a natural-language question.
pub fn ask(records: &Snapshot, query: &str) -> Result<()> {
    let router = QueryRouter::new();
    println!("{}", router.answer(query, records));
    Ok(())
}

/// Show usable free slots for a room on a day.
pub fn slots(
    records: &Snapshot,
    room_name: &str,
    date: Option<NaiveDate>,
    min_minutes: i64,
    json: bool,
) -> Result<()> {
    let Some(room) = records.room_by_name(room_name) else {
        let names: Vec<&str> = records.rooms.iter().map(|r| r.name.as_str()).collect();
        println!(
            "Room {} not found. Available rooms are: {}",
            room_name,
            names.join(", ")
        );
        return Ok(());
    };

    let day = date.unwrap_or_else(|| Local::now().date_naive());
    let slots = suggest_alternative_slots(room, &records.schedules, day, min_minutes);
    output::print_slots(&room.name, &slots, json);
    Ok(())
}

/// Show an instructor's sessions and conflict flag for a day.
pub fn instructor(
    records: &Snapshot,
    name: &str,
    date: Option<NaiveDate>,
    json: bool,
) -> Result<()> {
    let needle = name.to_lowercase();
    let Some(instructor) = records
        .instructors
        .iter()
        .find(|i| i.name.to_lowercase().contains(&needle))
    else {
        let names: Vec<&str> = records.instructors.iter().map(|i| i.name.as_str()).collect();
        println!(
            "Instructor {} not found. Known instructors: {}",
            name,
            names.join(", ")
        );
        return Ok(());
    };

    let day = date.unwrap_or_else(|| Local::now().date_naive());
    let result = find_instructor_conflicts(instructor, &records.schedules, &records.courses, day);
    output::print_instructor_day(&instructor.name, &result, records, json);
    Ok(())
}

/// Find rooms free for a whole time window.
pub fn rooms(
    records: &Snapshot,
    start: NaiveDateTime,
    end: NaiveDateTime,
    capacity: Option<u32>,
    facilities: &[String],
    json: bool,
) -> Result<()> {
    let window = Interval::new(start, end);
    let found = find_available_rooms(window, &records.rooms, &records.schedules, capacity, facilities);
    output::print_rooms(&found, records, json);
    Ok(())
}

/// Free-text room search.
pub fn search(records: &Snapshot, query: &str, json: bool) -> Result<()> {
    let found = search_rooms(query, records);
    output::print_rooms(&found, records, json);
    Ok(())
}
