//! Timestamp rendering.
//!
//! The journey planner sends ISO-8601 timestamps, usually without an offset
//! (local London time). This module renders them as a sentence-friendly
//! string in whatever offset they were given, without converting zones.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// `strftime` pattern for human-readable timestamps.
pub const DISPLAY_FORMAT: &str = "%A, %B %d, %Y at %I:%M %p";

/// Naive (offset-free) layouts accepted after RFC 3339 fails.
const NAIVE_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Offset-bearing layouts that RFC 3339 is too strict for.
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%:z"];

/// Error returned when a timestamp is not valid ISO-8601.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimestampError {
    #[error("invalid ISO-8601 timestamp: {0:?}")]
    InvalidTimestamp(String),
}

/// Render an ISO-8601 timestamp as e.g. `Monday, March 04, 2024 at 08:15 AM`.
///
/// The wall-clock time is shown in the offset encoded in the input; naive
/// timestamps are shown as-is. A bare date is treated as midnight.
///
/// # Examples
///
/// ```
/// use fare_server::domain::format_timestamp;
///
/// assert_eq!(
///     format_timestamp("2024-03-04T08:15:00+00:00").unwrap(),
///     "Monday, March 04, 2024 at 08:15 AM"
/// );
/// assert_eq!(
///     format_timestamp("2024-03-04T20:05:00").unwrap(),
///     "Monday, March 04, 2024 at 08:05 PM"
/// );
/// assert!(format_timestamp("next tuesday").is_err());
/// ```
pub fn format_timestamp(input: &str) -> Result<String, TimestampError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.format(DISPLAY_FORMAT).to_string());
    }

    for layout in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(input, layout) {
            return Ok(dt.format(DISPLAY_FORMAT).to_string());
        }
    }

    for layout in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, layout) {
            return Ok(dt.format(DISPLAY_FORMAT).to_string());
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.format(DISPLAY_FORMAT).to_string())
        .ok_or_else(|| TimestampError::InvalidTimestamp(input.to_string()))
}
