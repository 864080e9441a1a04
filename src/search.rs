//! Free-text room search.

use crate::store::Snapshot;

use crate::model::Room;

/// Find rooms matching a free-text query.
///
/// Builds a searchable string per room from its name, building name and
/// location, floor name and level, facility tags, and the codes/names of
/// courses scheduled into it, then keeps rooms whose text contains the
/// query case-insensitively. An empty query matches every room.
pub fn search_rooms<'a>(query: &str, records: &'a Snapshot) -> Vec<&'a Room> {
    let needle = query.to_lowercase();

    records
        .rooms
        .iter()
        .filter(|room| searchable_text(room, records).contains(&needle))
        .collect()
}

fn searchable_text(room: &Room, records: &Snapshot) -> String {
    let mut parts: Vec<String> = vec![room.name.clone()];

    if let Some(building) = records.building_for_room(room) {
        parts.push(building.name.clone());
        parts.push(building.location.clone());
    }
    if let Some(floor) = records.floor_for_room(room) {
        parts.push(floor.name.clone());
        parts.push(floor.level.to_string());
    }
    parts.extend(room.facilities.iter().cloned());

    // Courses scheduled into this room.
    for schedule in records.schedules.iter().filter(|s| s.room_id == room.id) {
        if let Some(course) = records.courses.iter().find(|c| c.id == schedule.course_id) {
            parts.push(course.code.clone());
            parts.push(course.name.clone());
        }
    }

    parts.join(" ").to_lowercase()
}
