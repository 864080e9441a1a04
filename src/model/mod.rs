//! Record types for the room-booking domain.
//!
//! These mirror the persisted schema row for row: buildings, floors,
//! rooms, courses, instructors, and schedules. All instants are local
//! wall-clock `NaiveDateTime` values serialized as ISO-8601 strings;
//! no timezone normalization is applied anywhere.

mod building;
mod course;
mod instructor;
mod room;
mod schedule;

pub use building::{Building, BuildingStatus, Floor};
pub use course::Course;
pub use instructor::Instructor;
pub use room::{Room, RoomStatus};
pub use schedule::Schedule;
