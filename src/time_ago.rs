//! Relative "time ago" phrases for message timestamps.

use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::trace;

use crate::error::FormatError;

const MINUTES_IN_HOUR: i64 = 60;
const MINUTES_IN_DAY: i64 = 1_440;
const MINUTES_IN_MONTH: i64 = 43_200;
const MINUTES_IN_YEAR: i64 = 525_600;

/// Parse an ISO-8601 timestamp.
///
/// RFC 3339 strings keep their offset. Date-times without an offset, such as
/// `2025-04-17T10:00:00.123456`, are read as UTC. Whitespace anywhere is
/// rejected.
pub fn parse_timestamp(timestamp: &str) -> Result<DateTime<Utc>, FormatError> {
    let invalid = || FormatError::InvalidInput(format!("invalid timestamp: {timestamp:?}"));
    // chrono skips whitespace ahead of numeric fields
    if timestamp.contains(char::is_whitespace) {
        return Err(invalid());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|_| invalid())
}

/// Describe how long ago `timestamp` was, relative to the current time.
///
/// Returns an empty string when no timestamp is given. Past instants read
/// `"5 minutes ago"`, future ones `"in 5 minutes"`.
///
/// # Errors
///
/// [`FormatError::InvalidInput`] when the timestamp cannot be parsed.
///
/// ```
/// use lexi_stream::get_time_ago;
///
/// assert_eq!(get_time_ago(None).unwrap(), "");
/// let now = chrono::Utc::now().to_rfc3339();
/// assert_eq!(get_time_ago(Some(now.as_str())).unwrap(), "less than a minute ago");
/// ```
pub fn get_time_ago(timestamp: Option<&str>) -> Result<String, FormatError> {
    time_ago_since(timestamp, Utc::now())
}

/// [`get_time_ago`] measured against an explicit `now`.
pub fn time_ago_since(timestamp: Option<&str>, now: DateTime<Utc>) -> Result<String, FormatError> {
    let Some(timestamp) = timestamp else {
        return Ok(String::new());
    };
    let then = parse_timestamp(timestamp)?;
    let elapsed = now.signed_duration_since(then).num_seconds();
    let distance = distance_in_words(elapsed.unsigned_abs() as i64);
    trace!(%then, elapsed, %distance, "relative time");
    if elapsed >= 0 {
        Ok(format!("{distance} ago"))
    } else {
        Ok(format!("in {distance}"))
    }
}

fn round_div(value: i64, by: i64) -> i64 {
    (value + by / 2) / by
}

fn count(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

fn distance_in_words(seconds: i64) -> String {
    let minutes = round_div(seconds, 60);
    if minutes < 1 {
        return "less than a minute".to_string();
    }
    if minutes < 45 {
        return count(minutes, "minute");
    }
    if minutes < 90 {
        return "about 1 hour".to_string();
    }
    if minutes < MINUTES_IN_DAY {
        return format!("about {}", count(round_div(minutes, MINUTES_IN_HOUR), "hour"));
    }
    if minutes < 42 * MINUTES_IN_HOUR {
        return "1 day".to_string();
    }
    if minutes < MINUTES_IN_MONTH {
        return count(round_div(minutes, MINUTES_IN_DAY), "day");
    }
    if minutes < 2 * MINUTES_IN_MONTH {
        return format!("about {}", count(round_div(minutes, MINUTES_IN_MONTH), "month"));
    }

    if minutes < MINUTES_IN_YEAR {
        return count(round_div(minutes, MINUTES_IN_MONTH), "month");
    }
    let months = round_div(minutes, MINUTES_IN_MONTH);
    let years = months / 12;
    match months % 12 {
        0..=2 => format!("about {}", count(years, "year")),
        3..=8 => format!("over {}", count(years, "year")),
        _ => format!("almost {}", count(years + 1, "year")),
    }
}
