//! The query router: classification, dispatch, and answer formatting.

use chrono::{Local, NaiveDateTime};
use tracing::debug;

use crate::analysis::{find_free_slots, find_instructor_conflicts};
use crate::store::Snapshot;
use crate::utils::format_schedule_time;

use super::extract::{EntityExtractor, PatternExtractor};
use super::types::QueryIntent;

/// Fixed help text returned for unrecognized queries.
pub const HELP_TEXT: &str = "I can help you with:
- Finding empty slots (e.g., \"show empty slots for room 101\")
- Room capacity (e.g., \"what is the capacity of room 101\")
- Room facilities (e.g., \"what facilities does room 101 have\")
- Building locations (e.g., \"where is building A\")
- Course schedules (e.g., \"when is course CS101\")
- Instructor schedules (e.g., \"show availability for instructor Smith\")
- Room availability (e.g., \"which rooms are available now\")

What would you like to know?";

// ============================================================================
// Query Router
// ============================================================================

/// Routes one free-text question to an intent and formats the answer.
pub struct QueryRouter {
    extractor: Box<dyn EntityExtractor>,
}

impl Default for QueryRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryRouter {
    /// Create a router with the default regex extraction strategy.
    pub fn new() -> Self {
        Self {
            extractor: Box::new(PatternExtractor::new()),
        }
    }

    /// Create a router with a custom extraction strategy.
    pub fn with_extractor(extractor: Box<dyn EntityExtractor>) -> Self {
        Self { extractor }
    }

    /// Classify a query into exactly one intent.
    ///
    /// Rules are tested in a fixed order and the first match wins; each
    /// rule is only reached if every prior rule fell through. Within a
    /// matched rule, failed entity extraction is carried as `None` and
    /// later answered with a prompt; it never falls through.
    pub fn classify(&self, query: &str) -> QueryIntent {
        let q = query.to_lowercase();

        let intent = if q.contains("empty") && q.contains("room") {
            QueryIntent::EmptySlots {
                room: self.extractor.room_name(&q),
            }
        } else if q.contains("capacity") || q.contains("how many") {
            QueryIntent::Capacity {
                room: self.extractor.room_name(&q),
            }
        } else if q.contains("facilities") || q.contains("equipment") {
            QueryIntent::Facilities {
                room: self.extractor.room_name(&q),
            }
        } else if q.contains("where") || q.contains("location") {
            QueryIntent::Location {
                building: self.extractor.building_name(&q),
            }
        } else if q.contains("when") && q.contains("course") {
            QueryIntent::CourseSchedule {
                course: self.extractor.course_code(&q),
            }
        } else if q.contains("instructor") || q.contains("teacher") {
            QueryIntent::InstructorSchedule {
                instructor: self.extractor.instructor_name(&q),
            }
        } else if q.contains("available") || q.contains("free") {
            QueryIntent::AvailableNow
        } else {
            QueryIntent::Help
        };

        debug!(intent = intent.display_name(), "classified query");
        intent
    }

    /// Answer a query against a snapshot, using the current local time.
    pub fn answer(&self, query: &str, records: &Snapshot) -> String {
        self.answer_at(query, records, Local::now().naive_local())
    }

    /// Answer a query as of a specific instant. The instant's date is
    /// "today" for schedule lookups and its time is "now" for the
    /// availability check.
    pub fn answer_at(&self, query: &str, records: &Snapshot, now: NaiveDateTime) -> String {
        match self.classify(query) {
            QueryIntent::EmptySlots { room } => self.answer_empty_slots(room, records, now),
            QueryIntent::Capacity { room } => self.answer_capacity(room, records),
            QueryIntent::Facilities { room } => self.answer_facilities(room, records),
            QueryIntent::Location { building } => self.answer_location(building, records),
            QueryIntent::CourseSchedule { course } => {
                self.answer_course_schedule(course, records, now)
            }
            QueryIntent::InstructorSchedule { instructor } => {
                self.answer_instructor_schedule(instructor, records, now)
            }
            QueryIntent::AvailableNow => self.answer_available_now(records, now),
            QueryIntent::Help => HELP_TEXT.to_string(),
        }
    }

    // ========================================================================
    // Intent Handlers
    // ========================================================================

    fn answer_empty_slots(
        &self,
        room: Option<String>,
        records: &Snapshot,
        now: NaiveDateTime,
    ) -> String {
        let Some(room_name) = room else {
            return "Please specify a room number (e.g., 'show empty slots for room 101')"
                .to_string();
        };

        let Some(room) = records.room_by_name(&room_name) else {
            let available: Vec<&str> = records.rooms.iter().map(|r| r.name.as_str()).collect();
            return format!(
                "Room {} not found. Available rooms are: {}",
                room_name,
                available.join(", ")
            );
        };

        let slots = find_free_slots(room, &records.schedules, now.date());
        if slots.is_empty() {
            return format!(
                "Room {} is fully booked today. Would you like me to suggest alternative rooms?",
                room.name
            );
        }

        let lines: Vec<String> = slots
            .iter()
            .map(|slot| format!("- {}", format_schedule_time(slot.start, slot.end)))
            .collect();
        format!(
            "Empty time slots for Room {} today:\n{}",
            room.name,
            lines.join("\n")
        )
    }

    fn answer_capacity(&self, room: Option<String>, records: &Snapshot) -> String {
        let Some(room_name) = room else {
            return "Please specify a room number (e.g., 'what is the capacity of room 101')"
                .to_string();
        };

        let Some(room) = records.room_by_name(&room_name) else {
            return format!("Room {room_name} not found.");
        };

        let building = records
            .building_for_room(room)
            .map(|b| b.name.as_str())
            .unwrap_or("Unknown Building");
        format!(
            "Room {} in {} has a capacity of {} people.",
            room.name, building, room.capacity
        )
    }

    fn answer_facilities(&self, room: Option<String>, records: &Snapshot) -> String {
        let Some(room_name) = room else {
            return "Please specify a room number (e.g., 'what facilities does room 101 have')"
                .to_string();
        };

        let Some(room) = records.room_by_name(&room_name) else {
            return format!("Room {room_name} not found.");
        };

        if room.facilities.is_empty() {
            return format!("Room {} has no special facilities.", room.name);
        }
        format!(
            "Room {} is equipped with: {}.",
            room.name,
            room.facilities.join(", ")
        )
    }

    fn answer_location(&self, building: Option<String>, records: &Snapshot) -> String {
        let Some(building_name) = building else {
            return "Please specify a building name (e.g., 'where is building A')".to_string();
        };

        let needle = building_name.to_lowercase();
        let Some(building) = records
            .buildings
            .iter()
            .find(|b| b.name.to_lowercase().contains(&needle))
        else {
            return format!("Building {building_name} not found.");
        };

        format!("{} is located at {}.", building.name, building.location)
    }

    fn answer_course_schedule(
        &self,
        course: Option<String>,
        records: &Snapshot,
        now: NaiveDateTime,
    ) -> String {
        let Some(course_code) = course else {
            return "Please specify a course code (e.g., 'when is course CS101')".to_string();
        };

        let needle = course_code.to_lowercase();
        let Some(course) = records
            .courses
            .iter()
            .find(|c| c.code.to_lowercase().contains(&needle))
        else {
            return format!("Course {course_code} not found.");
        };

        let course_schedules: Vec<_> = records
            .schedules
            .iter()
            .filter(|s| s.course_id == course.id)
            .collect();
        if course_schedules.is_empty() {
            return format!("No schedules found for {} ({}).", course.name, course.code);
        }

        let mut response = vec![format!("Schedule for {} ({}):", course.name, course.code)];

        let today: Vec<_> = course_schedules
            .iter()
            .filter(|s| s.start_time.date() == now.date())
            .collect();
        if !today.is_empty() {
            response.push("\nToday:".to_string());
            for schedule in today {
                let room = records
                    .rooms
                    .iter()
                    .find(|r| r.id == schedule.room_id)
                    .map(|r| r.name.as_str())
                    .unwrap_or("Unknown");
                response.push(format!(
                    "- {} in Room {}",
                    format_schedule_time(schedule.start_time, schedule.end_time),
                    room
                ));
            }
        }

        response.join("\n")
    }

    fn answer_instructor_schedule(
        &self,
        instructor: Option<String>,
        records: &Snapshot,
        now: NaiveDateTime,
    ) -> String {
        let Some(instructor_name) = instructor else {
            let names: Vec<&str> = records
                .instructors
                .iter()
                .map(|i| i.name.as_str())
                .collect();
            return format!(
                "Please specify an instructor name. Available instructors: {}",
                names.join(", ")
            );
        };

        let needle = instructor_name.to_lowercase();
        let Some(instructor) = records
            .instructors
            .iter()
            .find(|i| i.name.to_lowercase().contains(&needle))
        else {
            return format!(
                "Instructor \"{instructor_name}\" not found. Please check the name and try again."
            );
        };

        let day = find_instructor_conflicts(
            instructor,
            &records.schedules,
            &records.courses,
            now.date(),
        );

        let mut response = format!("Schedule for {}:\n", instructor.name);
        response += &format!("Department: {}\n", instructor.department);
        response += &format!(
            "Specializations: {}\n\n",
            instructor.specializations.join(", ")
        );

        if day.sessions.is_empty() {
            response += "\nNo scheduled sessions today.";
            return response;
        }

        let lines: Vec<String> = day
            .sessions
            .iter()
            .map(|s| {
                let course = records
                    .courses
                    .iter()
                    .find(|c| c.id == s.course_id)
                    .map(|c| c.name.as_str())
                    .unwrap_or("Unknown course");
                let room = records
                    .rooms
                    .iter()
                    .find(|r| r.id == s.room_id)
                    .map(|r| r.name.as_str())
                    .unwrap_or("Unknown room");
                format!(
                    "- {} ({} in Room {})",
                    format_schedule_time(s.start_time, s.end_time),
                    course,
                    room
                )
            })
            .collect();
        response += &format!("Today's Schedule:\n{}", lines.join("\n"));

        if day.has_conflict {
            response += "\n\n⚠️ Warning: Schedule has time conflicts!";
        }

        response
    }

    fn answer_available_now(&self, records: &Snapshot, now: NaiveDateTime) -> String {
        use crate::model::RoomStatus;

        // The containment test here is closed on both ends, unlike the
        // half-open overlap predicate used everywhere else. Long-standing
        // behavior, kept distinct on purpose.
        let available: Vec<_> = records
            .rooms
            .iter()
            .filter(|room| room.status == RoomStatus::Available)
            .filter(|room| {
                !records
                    .schedules
                    .iter()
                    .filter(|s| s.room_id == room.id)
                    .any(|s| s.interval().contains_inclusive(now))
            })
            .collect();

        if available.is_empty() {
            return "No rooms are currently available.".to_string();
        }

        let mut response = vec!["Currently available rooms:".to_string()];
        for room in available {
            let building = records
                .building_for_room(room)
                .map(|b| b.name.as_str())
                .unwrap_or("Unknown Building");
            let floor = records
                .floor_for_room(room)
                .map(|f| f.name.as_str())
                .unwrap_or("Unknown");
            response.push(format!(
                "- Room {} ({}, Floor {}) - Capacity: {}",
                room.name, building, floor, room.capacity
            ));
        }
        response.join("\n")
    }
}

// ============================================================================
// Tests
// ============================================================================
