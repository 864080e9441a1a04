//! Record store interface and in-memory implementation.
//!
//! The analysis core never talks to a store: callers fetch rows first and
//! pass a [`Snapshot`] in. The [`RecordStore`] trait captures the row-level
//! surface the application relies on: list a collection, insert a record
//! (identity and timestamps assigned), partial update, delete, and
//! equality-filtered select. [`MemoryStore`] implements it over plain
//! JSON rows, which is what the CLI and tests use.

use std::collections::HashMap;
use std::path::Path;

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::model::{Building, Course, Floor, Instructor, Room, Schedule};

/// Collection names understood by the store.
pub const COLLECTIONS: &[&str] = &[
    "buildings",
    "floors",
    "rooms",
    "courses",
    "instructors",
    "schedules",
];

// ============================================================================
// Snapshot
// ============================================================================

/// An immutable snapshot of every collection, as consumed by the analysis
/// core and the query router.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub buildings: Vec<Building>,
    pub floors: Vec<Floor>,
    pub rooms: Vec<Room>,
    pub courses: Vec<Course>,
    pub instructors: Vec<Instructor>,
    pub schedules: Vec<Schedule>,
}

impl Snapshot {
    /// Load a snapshot from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Look up a room by exact, case-insensitive name.
    pub fn room_by_name(&self, name: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.name.eq_ignore_ascii_case(name))
    }

    /// A room's owning building.
    pub fn building_for_room(&self, room: &Room) -> Option<&Building> {
        self.buildings.iter().find(|b| b.id == room.building_id)
    }

    /// The first floor of a room's building.
    ///
    /// Rooms carry no floor reference in the schema, so this resolves the
    /// *first* floor matching the building rather than the room's actual
    /// floor. Known imprecision, kept as-is.
    pub fn floor_for_room(&self, room: &Room) -> Option<&Floor> {
        self.floors.iter().find(|f| f.building_id == room.building_id)
    }
}

// ============================================================================
// Record Store
// ============================================================================

/// Row-level store surface: collections of plain records addressed by name.
pub trait RecordStore {
    /// All current rows of a collection.
    fn list(&self, collection: &str) -> Result<Vec<Value>>;

    /// Insert a record without identity/timestamp fields; returns the
    /// assigned identity.
    fn insert(&mut self, collection: &str, record: Value) -> Result<String>;

    /// Merge a partial record into the row with the given identity.
    fn update(&mut self, collection: &str, id: &str, patch: Value) -> Result<()>;

    /// Delete the row with the given identity.
    fn delete(&mut self, collection: &str, id: &str) -> Result<()>;

    /// Rows whose `field` equals `value`.
    fn select_eq(&self, collection: &str, field: &str, value: &Value) -> Result<Vec<Value>>;
}

/// In-memory record store over JSON rows.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: HashMap<String, Vec<Value>>,
}

impl MemoryStore {
    /// Create an empty store with all known collections.
    pub fn new() -> Self {
        let mut collections = HashMap::new();
        for name in COLLECTIONS {
            collections.insert(name.to_string(), Vec::new());
        }
        Self { collections }
    }

    /// Build a store pre-populated from a snapshot.
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self> {
        let mut store = Self::new();
        store.replace("buildings", &snapshot.buildings)?;
        store.replace("floors", &snapshot.floors)?;
        store.replace("rooms", &snapshot.rooms)?;
        store.replace("courses", &snapshot.courses)?;
        store.replace("instructors", &snapshot.instructors)?;
        store.replace("schedules", &snapshot.schedules)?;
        Ok(store)
    }

    /// Materialize a typed snapshot of every collection.
    pub fn snapshot(&self) -> Result<Snapshot> {
        Ok(Snapshot {
            buildings: self.typed("buildings")?,
            floors: self.typed("floors")?,
            rooms: self.typed("rooms")?,
            courses: self.typed("courses")?,
            instructors: self.typed("instructors")?,
            schedules: self.typed("schedules")?,
        })
    }

    fn replace<T: Serialize>(&mut self, collection: &str, rows: &[T]) -> Result<()> {
        let values = rows
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        self.collections.insert(collection.to_string(), values);
        Ok(())
    }

    fn typed<T: for<'de> Deserialize<'de>>(&self, collection: &str) -> Result<Vec<T>> {
        self.rows(collection)?
            .iter()
            .map(|v| Ok(serde_json::from_value(v.clone())?))
            .collect()
    }

    fn rows(&self, collection: &str) -> Result<&Vec<Value>> {
        self.collections
            .get(collection)
            .ok_or_else(|| StoreError::UnknownCollection(collection.to_string()).into())
    }

    fn rows_mut(&mut self, collection: &str) -> Result<&mut Vec<Value>> {
        self.collections
            .get_mut(collection)
            .ok_or_else(|| StoreError::UnknownCollection(collection.to_string()).into())
    }

    /// Reject schedule rows whose end does not come after their start.
    /// This is the upstream validation point the analysis core assumes;
    /// the original application rejected these at form submission.
    fn validate_schedule(record: &Map<String, Value>) -> Result<()> {
        let start = Self::time_field(record, "start_time")?;
        let end = Self::time_field(record, "end_time")?;
        if end <= start {
            return Err(StoreError::InvalidTimeRange {
                start: start.to_string(),
                end: end.to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn time_field(record: &Map<String, Value>, field: &str) -> Result<NaiveDateTime> {
        let raw = record
            .get(field)
            .and_then(Value::as_str)
            .ok_or_else(|| StoreError::MalformedRecord {
                collection: "schedules".to_string(),
                reason: format!("missing {field}"),
            })?;
        raw.parse().map_err(|_| {
            StoreError::MalformedRecord {
                collection: "schedules".to_string(),
                reason: format!("unparseable {field}: {raw}"),
            }
            .into()
        })
    }
}

impl RecordStore for MemoryStore {
    fn list(&self, collection: &str) -> Result<Vec<Value>> {
        Ok(self.rows(collection)?.clone())
    }

    fn insert(&mut self, collection: &str, record: Value) -> Result<String> {
        let mut fields = match record {
            Value::Object(map) => map,
            _ => {
                return Err(StoreError::MalformedRecord {
                    collection: collection.to_string(),
                    reason: "record must be a JSON object".to_string(),
                }
                .into())
            }
        };

        if collection == "schedules" {
            Self::validate_schedule(&fields)?;
        }

        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().naive_local().format("%Y-%m-%dT%H:%M:%S").to_string();
        fields.insert("id".to_string(), Value::String(id.clone()));
        fields.insert("created_at".to_string(), Value::String(now.clone()));
        fields.insert("updated_at".to_string(), Value::String(now));

        self.rows_mut(collection)?.push(Value::Object(fields));
        debug!(collection, id = %id, "inserted record");
        Ok(id)
    }

    fn update(&mut self, collection: &str, id: &str, patch: Value) -> Result<()> {
        let patch = match patch {
            Value::Object(map) => map,
            _ => {
                return Err(StoreError::MalformedRecord {
                    collection: collection.to_string(),
                    reason: "patch must be a JSON object".to_string(),
                }
                .into())
            }
        };

        let is_schedules = collection == "schedules";
        let rows = self.rows_mut(collection)?;
        let row = rows
            .iter_mut()
            .find(|r| r.get("id").and_then(Value::as_str) == Some(id))
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let fields = row.as_object_mut().ok_or_else(|| StoreError::MalformedRecord {
            collection: collection.to_string(),
            reason: "stored row is not an object".to_string(),
        })?;

        let mut merged = fields.clone();
        for (key, value) in patch {
            merged.insert(key, value);
        }
        if is_schedules {
            Self::validate_schedule(&merged)?;
        }
        merged.insert(
            "updated_at".to_string(),
            Value::String(Utc::now().naive_local().format("%Y-%m-%dT%H:%M:%S").to_string()),
        );

        *fields = merged;
        debug!(collection, id, "updated record");
        Ok(())
    }

    fn delete(&mut self, collection: &str, id: &str) -> Result<()> {
        let rows = self.rows_mut(collection)?;
        let before = rows.len();
        rows.retain(|r| r.get("id").and_then(Value::as_str) != Some(id));
        if rows.len() == before {
            return Err(StoreError::NotFound(id.to_string()).into());
        }
        debug!(collection, id, "deleted record");
        Ok(())
    }

    fn select_eq(&self, collection: &str, field: &str, value: &Value) -> Result<Vec<Value>> {
        Ok(self
            .rows(collection)?
            .iter()
            .filter(|r| r.get(field) == Some(value))
            .cloned()
            .collect())
    }
}
