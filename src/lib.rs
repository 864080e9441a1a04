//! Atrium: room-booking schedule analysis and query answering.
//!
//! Free-slot derivation, schedule conflict detection, and a deterministic
//! natural-language query router over building/room/course/instructor
//! records. All analysis is synchronous and pure over caller-supplied
//! snapshots; persistence is behind the [`store::RecordStore`] trait.

pub mod analysis;
pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod search;
pub mod store;
pub mod utils;

pub use analysis::{
    check_room_conflict, day_bracket, filter_by_min_duration, find_available_rooms,
    find_free_slots, find_free_slots_today, find_instructor_conflicts, suggest_alternative_slots,
    Interval, InstructorDay, DEFAULT_MIN_SLOT_MINUTES,
};
pub use config::Config;
pub use error::{AtriumError, ConfigError, Result, StoreError};
pub use model::{
    Building, BuildingStatus, Course, Floor, Instructor, Room, RoomStatus, Schedule,
};
pub use query::{EntityExtractor, PatternExtractor, QueryIntent, QueryRouter};
pub use search::search_rooms;
pub use store::{MemoryStore, RecordStore, Snapshot};
