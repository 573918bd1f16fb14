//! Day-first date handling.
//!
//! The source files carry textual dates written day-first ("31.12.2024",
//! "31/12/2024 18:45"). All parsing goes through this module so every
//! table agrees on the accepted formats and on the display format used
//! by the churn fixture.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

const DATE_FORMATS: [&str; 3] = ["%d.%m.%Y", "%d/%m/%Y", "%d-%m-%Y"];

const DATETIME_FORMATS: [&str; 6] = [
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%d-%m-%Y %H:%M",
];

/// Display format for visit timestamps (churn table contract).
pub const TIMESTAMP_DISPLAY: &str = "%d/%m/%Y %H:%M";

pub fn parse_dayfirst_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

pub fn parse_dayfirst_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| parse_dayfirst_date(value).and_then(|d| d.and_hms_opt(0, 0, 0)))
}

pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format(TIMESTAMP_DISPLAY).to_string()
}

// ── Serde helpers for the loader ─────────────────────────────────────────────

/// Mandatory day-first date column. Unparsable values abort the load.
pub fn de_dayfirst_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_dayfirst_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("unparsable day-first date '{raw}'")))
}

/// Mandatory day-first timestamp column. Unparsable values abort the load.
pub fn de_dayfirst_datetime<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_dayfirst_datetime(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("unparsable day-first timestamp '{raw}'")))
}

/// Nullable day-first date column. Empty or unparsable values coerce to
/// None — a missing termination date means the employee is still employed.
pub fn de_opt_dayfirst_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(parse_dayfirst_date(&raw))
}
