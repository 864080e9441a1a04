//! Small shared helpers.

use chrono::NaiveDateTime;

/// Format a schedule time range for display, e.g.
/// `Mar 2, 2026 9:00 AM - 10:00 AM`.
///
/// The date is printed once, from the start instant; ranges that cross
/// midnight still only show the start date.
pub fn format_schedule_time(start: NaiveDateTime, end: NaiveDateTime) -> String {
    format!(
        "{} - {}",
        start.format("%b %-d, %Y %-I:%M %p"),
        end.format("%-I:%M %p")
    )
}
