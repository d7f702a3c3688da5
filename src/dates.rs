//! Date Helpers
//!
//! Conversions between `<input type="datetime-local">` text, UTC instants,
//! and the short `es-ES` dates shown on task cards.

use std::fmt::Display;

use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};

/// Shapes a datetime-local input can produce
const INPUT_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Interpret a datetime-local value as wall-clock time in `tz`.
///
/// Ambiguous times (DST fall-back) resolve to the earlier instant; times that
/// do not exist in `tz` yield `None`.
pub fn parse_local_input<Tz: TimeZone>(input: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let input = input.trim();
    let naive = INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())?;
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
}

/// Same text JS `Date.prototype.toISOString` produces
pub fn to_iso_millis(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `d/m/yyyy` in `tz`, matching `toLocaleDateString('es-ES')`
pub fn short_date<Tz>(instant: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    instant.with_timezone(tz).format("%-d/%-m/%Y").to_string()
}
