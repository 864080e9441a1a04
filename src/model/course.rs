//! Course records.

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A course that can be scheduled into rooms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Unique identifier.
    pub id: String,
    /// Human course code (e.g., "CS101").
    pub code: String,
    /// Human course name.
    pub name: String,
    /// Assigned instructor, if any. A course may have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor_id: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Course {
    /// Create a new course record.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now().naive_local();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            code: code.into(),
            name: name.into(),
            instructor_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Assign an instructor.
    pub fn with_instructor(mut self, instructor_id: impl Into<String>) -> Self {
        self.instructor_id = Some(instructor_id.into());
        self
    }
}
