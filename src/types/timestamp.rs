//! Timestamp format shared by the users file and the command line
//!
//! Timestamps carry minute precision and no timezone. They are interpreted as the
//! wall-clock time of the space the door controller runs in.

use chrono::{NaiveDateTime, Timelike};

/// Persisted timestamp layout, e.g. `2024-03-01 18:30`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parse an optional timestamp field
///
/// An empty (or all-whitespace) field is an absent bound and yields `Ok(None)`.
pub fn parse_timestamp(field: &str) -> Result<Option<NaiveDateTime>, chrono::ParseError> {
    let field = field.trim();
    if field.is_empty() {
        return Ok(None);
    }
    NaiveDateTime::parse_from_str(field, TIMESTAMP_FORMAT).map(Some)
}

/// Format an optional timestamp field; absent bounds become an empty string
pub fn format_timestamp(value: Option<NaiveDateTime>) -> String {
    value.map(|t| t.format(TIMESTAMP_FORMAT).to_string()).unwrap_or_default()
}

/// Drop seconds and sub-second precision, matching what the file can represent
pub fn truncate_to_minute(value: NaiveDateTime) -> NaiveDateTime {
    value.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(value)
}
