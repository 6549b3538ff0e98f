//! Timestamp value generators.

use chrono::{DateTime, Utc};
use fixture_core::FieldValue;
use rand::Rng;

/// Generate the current UTC timestamp.
///
/// This is NOT deterministic - each call returns the current time.
pub fn generate_timestamp_now() -> FieldValue {
    FieldValue::DateTime(Utc::now())
}

/// Generate a random timestamp in the given range.
///
/// The start and end should be ISO 8601 formatted timestamps.
pub fn generate_timestamp_range<R: Rng>(rng: &mut R, start: &str, end: &str) -> FieldValue {
    let start_dt = parse_timestamp(start);
    let end_dt = parse_timestamp(end);

    match (start_dt, end_dt) {
        (Some(start), Some(end)) => {
            let start_ts = start.timestamp();
            let end_ts = end.timestamp();

            if start_ts >= end_ts {
                FieldValue::DateTime(start)
            } else {
                let random_ts = rng.gen_range(start_ts..=end_ts);
                let dt = DateTime::from_timestamp(random_ts, 0).unwrap_or(start);
                FieldValue::DateTime(dt)
            }
        }
        (Some(dt), None) | (None, Some(dt)) => FieldValue::DateTime(dt),
        (None, None) => FieldValue::DateTime(Utc::now()),
    }
}

/// Parse a timestamp string (RFC 3339 or `YYYY-MM-DD`).
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(date) = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }

    None
}
