//! Room records.

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bookable room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique identifier.
    pub id: String,
    /// Owning building.
    pub building_id: String,
    /// Room name, usually a number (e.g., "101").
    pub name: String,
    /// Seating capacity.
    pub capacity: u32,
    /// Free-form facility tags ("projector", "wifi", ...). Unordered.
    #[serde(default)]
    pub facilities: Vec<String>,
    /// Manually set status flag. Independent of the schedule calendar:
    /// a room marked `Occupied` may have no schedules and vice versa.
    #[serde(default)]
    pub status: RoomStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Room {
    /// Create a new room record.
    pub fn new(building_id: impl Into<String>, name: impl Into<String>, capacity: u32) -> Self {
        let now = Utc::now().naive_local();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            building_id: building_id.into(),
            name: name.into(),
            capacity,
            facilities: Vec::new(),
            status: RoomStatus::Available,
            created_at: now,
            updated_at: now,
        }
    }

    /// Add a facility tag.
    pub fn with_facility(mut self, facility: impl Into<String>) -> Self {
        self.facilities.push(facility.into());
        self
    }

    /// Add multiple facility tags.
    pub fn with_facilities(
        mut self,
        facilities: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.facilities
            .extend(facilities.into_iter().map(|f| f.into()));
        self
    }

    /// Set the status flag.
    pub fn with_status(mut self, status: RoomStatus) -> Self {
        self.status = status;
        self
    }

    /// Whether the room carries a facility tag (case-insensitive).
    pub fn has_facility(&self, facility: &str) -> bool {
        self.facilities
            .iter()
            .any(|f| f.eq_ignore_ascii_case(facility))
    }
}

/// Manually set room status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    #[default]
    Available,
    Occupied,
    Maintenance,
}

impl RoomStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            RoomStatus::Available => "Available",
            RoomStatus::Occupied => "Occupied",
            RoomStatus::Maintenance => "Maintenance",
        }
    }
}
