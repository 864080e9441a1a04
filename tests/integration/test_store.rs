//! Tests for the record store feeding the analysis core.

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::json;

use atrium::{
    find_free_slots, AtriumError, Interval, MemoryStore, RecordStore, Snapshot, StoreError,
};

fn at(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 2)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

#[test]
fn test_inserted_records_flow_into_analysis() {
    let mut store = MemoryStore::new();

    let building_id = store
        .insert(
            "buildings",
            json!({"name": "Science Hall", "location": "12 North Campus Drive"}),
        )
        .unwrap();
    let room_id = store
        .insert(
            "rooms",
            json!({"building_id": building_id, "name": "101", "capacity": 40}),
        )
        .unwrap();
    let course_id = store
        .insert("courses", json!({"code": "CS101", "name": "Intro to Programming"}))
        .unwrap();
    store
        .insert(
            "schedules",
            json!({
                "room_id": room_id,
                "course_id": course_id,
                "start_time": "2026-03-02T09:00:00",
                "end_time": "2026-03-02T10:00:00",
            }),
        )
        .unwrap();

    let snapshot = store.snapshot().unwrap();
    let room = snapshot.room_by_name("101").unwrap();
    let slots = find_free_slots(room, &snapshot.schedules, at(0, 0).date());
    assert_eq!(
        slots,
        vec![
            Interval::new(at(8, 0), at(9, 0)),
            Interval::new(at(10, 0), at(18, 0)),
        ]
    );
}

#[test]
fn test_inverted_schedule_never_reaches_the_calendar() {
    let mut store = MemoryStore::new();
    let err = store
        .insert(
            "schedules",
            json!({
                "room_id": "r1",
                "course_id": "c1",
                "start_time": "2026-03-02T10:00:00",
                "end_time": "2026-03-02T09:00:00",
            }),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        AtriumError::Store(StoreError::InvalidTimeRange { .. })
    ));
    assert!(store.list("schedules").unwrap().is_empty());
}

#[test]
fn test_update_can_move_but_not_invert_a_schedule() {
    let mut store = MemoryStore::new();
    let id = store
        .insert(
            "schedules",
            json!({
                "room_id": "r1",
                "course_id": "c1",
                "start_time": "2026-03-02T09:00:00",
                "end_time": "2026-03-02T10:00:00",
            }),
        )
        .unwrap();

    store
        .update("schedules", &id, json!({"end_time": "2026-03-02T11:00:00"}))
        .unwrap();

    let err = store
        .update("schedules", &id, json!({"end_time": "2026-03-02T08:00:00"}))
        .unwrap_err();
    assert!(matches!(
        err,
        AtriumError::Store(StoreError::InvalidTimeRange { .. })
    ));

    // The failed patch left the row untouched.
    let snapshot = store.snapshot().unwrap();
    assert_eq!(snapshot.schedules[0].end_time, at(11, 0));
}

#[test]
fn test_snapshot_round_trip_through_store() {
    let records = {
        let mut store = MemoryStore::new();
        store
            .insert("instructors", json!({
                "name": "Dr. Smith",
                "email": "smith@example.edu",
                "department": "Computer Science",
            }))
            .unwrap();
        store.snapshot().unwrap()
    };

    let rebuilt = MemoryStore::from_snapshot(&records).unwrap();
    let again: Snapshot = rebuilt.snapshot().unwrap();
    assert_eq!(again.instructors.len(), 1);
    assert_eq!(again.instructors[0].name, "Dr. Smith");
    assert!(again.instructors[0].specializations.is_empty());
}

#[test]
fn test_select_eq_filters_rows() {
    let mut store = MemoryStore::new();
    store
        .insert("rooms", json!({"building_id": "b1", "name": "101", "capacity": 40}))
        .unwrap();
    store
        .insert("rooms", json!({"building_id": "b2", "name": "201", "capacity": 20}))
        .unwrap();

    let hits = store.select_eq("rooms", "building_id", &json!("b2")).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["name"], json!("201"));
}
