//! # Time Utilities
//!
//! Time formatting and parsing helpers using chrono.

use chrono::{DateTime, Utc};

/// Get current UTC time.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Format a UTC time as an RFC3339 string.
pub fn format_time(time: DateTime<Utc>) -> String {
    time.to_rfc3339()
}

/// Parse an RFC3339 string into a UTC DateTime.
pub fn parse_utc(moment: &str) -> Result<DateTime<Utc>, Error> {
    DateTime::parse_from_rfc3339(moment)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| Error::FailToDateParse(moment.to_string()))
}

// region:    --- Error
#[derive(Debug)]
pub enum Error {
    FailToDateParse(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error
