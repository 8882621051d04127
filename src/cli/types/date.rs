//! Calendar dates for birth dates and fixtures.

use crate::error::{CricketError, Result};
use chrono::NaiveDate;

/// Date format used on the command line and in the database.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|_| CricketError::InvalidDate {
        value: s.to_string(),
    })
}

/// Birth date used when a player is created without one.
pub fn default_birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default()
}

/// Fixture date used when a match is created without one.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
