//! Release date parsing and the derived release year.
//!
//! Seed data spells dates the way they appear on a poster (`"Oct 15 1981"`).
//! They are stored as midnight UTC timestamps.

use chrono::{NaiveDate, NaiveTime};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Input format for human-written release dates: abbreviated month, day, year.
pub const RELEASE_DATE_FORMAT: &str = "%b %d %Y";

/// Parse a release date such as `"Oct 15 1981"` into a UTC timestamp at midnight.
///
/// ```
/// use marquee_core::release::{parse_release_date, release_year};
///
/// let released = parse_release_date("Oct 15 1981").unwrap();
/// assert_eq!(release_year(&released), "1981");
/// ```
pub fn parse_release_date(input: &str) -> Result<Timestamp, CoreError> {
    let date = NaiveDate::parse_from_str(input.trim(), RELEASE_DATE_FORMAT).map_err(|e| {
        CoreError::Validation(format!(
            "Invalid release date '{input}' (expected e.g. 'Oct 15 1981'): {e}"
        ))
    })?;
    Ok(date.and_time(NaiveTime::MIN).and_utc())
}

/// Four-digit release year of a timestamp.
pub fn release_year(released: &Timestamp) -> String {
    released.format("%Y").to_string()
}
