//! Building and floor records.

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A campus building.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Building {
    /// Unique identifier.
    pub id: String,
    /// Building name (e.g., "Science Hall").
    pub name: String,
    /// Human-readable location string.
    pub location: String,
    /// Operational status.
    #[serde(default)]
    pub status: BuildingStatus,
    /// When the record was created.
    pub created_at: NaiveDateTime,
    /// When the record was last updated.
    pub updated_at: NaiveDateTime,
}

impl Building {
    /// Create a new building record.
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        let now = Utc::now().naive_local();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            location: location.into(),
            status: BuildingStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the status.
    pub fn with_status(mut self, status: BuildingStatus) -> Self {
        self.status = status;
        self
    }
}

/// Operational status of a building or floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingStatus {
    #[default]
    Active,
    Maintenance,
    Inactive,
}

impl BuildingStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            BuildingStatus::Active => "Active",
            BuildingStatus::Maintenance => "Maintenance",
            BuildingStatus::Inactive => "Inactive",
        }
    }
}

/// A floor within a building.
///
/// A floor belongs to exactly one building. Rooms do not carry a floor
/// reference in the schema; floor-for-room lookups resolve the first
/// floor of the room's building, which is a known imprecision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Floor {
    /// Unique identifier.
    pub id: String,
    /// Owning building.
    pub building_id: String,
    /// Floor name (e.g., "Ground", "2nd").
    pub name: String,
    /// Numeric level within the building.
    pub level: i32,
    /// Optional free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub status: BuildingStatus,
    pub created_at: NaiveDateTime,
}

impl Floor {
    /// Create a new floor in a building.
    pub fn new(building_id: impl Into<String>, name: impl Into<String>, level: i32) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            building_id: building_id.into(),
            name: name.into(),
            level,
            description: None,
            status: BuildingStatus::Active,
            created_at: Utc::now().naive_local(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
