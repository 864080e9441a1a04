//! Instructor records.

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// An instructor who can be assigned to courses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instructor {
    /// Unique identifier.
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    /// Ordered specialization tags.
    #[serde(default)]
    pub specializations: Vec<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Instructor {
    /// Create a new instructor record.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        let now = Utc::now().naive_local();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            email: email.into(),
            department: department.into(),
            specializations: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Add a specialization tag.
    pub fn with_specialization(mut self, specialization: impl Into<String>) -> Self {
        self.specializations.push(specialization.into());
        self
    }

    /// Add multiple specialization tags.
    pub fn with_specializations(
        mut self,
        specializations: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.specializations
            .extend(specializations.into_iter().map(|s| s.into()));
        self
    }
}
