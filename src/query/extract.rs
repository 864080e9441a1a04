//! Entity extraction from query text.
//!
//! Extraction is a pluggable strategy behind [`EntityExtractor`] so the
//! regex patterns can later be swapped for a stricter tokenizer without
//! touching the router's control flow. The patterns are keyword-anchored
//! (`room <token>`), which is fragile for multi-word names: a building
//! called "Science Hall" only matches on "science".

use std::sync::LazyLock;

use regex::Regex;

/// Strategy for pulling entity names out of a query string.
pub trait EntityExtractor: Send + Sync {
    /// Room name following the word "room".
    fn room_name(&self, query: &str) -> Option<String>;

    /// Building name following the word "building".
    fn building_name(&self, query: &str) -> Option<String>;

    /// Course code following the word "course".
    fn course_code(&self, query: &str) -> Option<String>;

    /// Instructor name following "instructor" or "teacher".
    fn instructor_name(&self, query: &str) -> Option<String>;
}

/// Default keyword-anchored regex extraction.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternExtractor;

impl PatternExtractor {
    pub fn new() -> Self {
        Self
    }
}

static ROOM_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)room\s+(\w+)").expect("Invalid regex"));
static BUILDING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)building\s+(\w+)").expect("Invalid regex"));
static COURSE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)course\s+(\w+)").expect("Invalid regex"));
static INSTRUCTOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)instructor\s+(\w+)").expect("Invalid regex"));
static TEACHER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)teacher\s+(\w+)").expect("Invalid regex"));

fn capture(pattern: &Regex, query: &str) -> Option<String> {
    pattern
        .captures(query)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

impl EntityExtractor for PatternExtractor {
    fn room_name(&self, query: &str) -> Option<String> {
        capture(&ROOM_PATTERN, query)
    }

    fn building_name(&self, query: &str) -> Option<String> {
        capture(&BUILDING_PATTERN, query)
    }

    fn course_code(&self, query: &str) -> Option<String> {
        capture(&COURSE_PATTERN, query)
    }

    fn instructor_name(&self, query: &str) -> Option<String> {
        capture(&INSTRUCTOR_PATTERN, query).or_else(|| capture(&TEACHER_PATTERN, query))
    }
}
