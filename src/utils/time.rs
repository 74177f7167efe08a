//! Timestamp utilities: parsing stored timestamps, elapsed time, formatting.

use crate::errors::{AppError, AppResult};
use chrono::{Duration, Local, NaiveDateTime};

/// Local ISO-8601 without offset, fractional seconds optional.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn parse_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}

/// Minimum sign-in to sign-out gap, from fractional hours.
/// Negative or NaN input gives zero; out-of-range input saturates.
pub fn hours_to_duration(hours: f64) -> Duration {
    let ms = (hours.max(0.0) * 3_600_000.0).round() as i64;
    Duration::try_milliseconds(ms).unwrap_or(Duration::MAX)
}

/// `HH:MM` (or `-HH:MM`) from a duration, seconds truncated.
pub fn format_duration(d: Duration) -> String {
    let mins = d.num_minutes();
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

pub fn format_clock(t: NaiveDateTime) -> String {
    t.format("%H:%M:%S").to_string()
}
