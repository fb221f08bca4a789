use chrono::{
    NaiveDate,
    NaiveDateTime,
    NaiveTime
};

use crate::dateerror::DateError;

/// Parses an ISO-8601 date-time (`2025-01-15T09:30:00`) or plain date
/// (`2025-01-15`, taken as midnight). Malformed or impossible dates
/// (`2025-02-30`) are rejected here, at the boundary; values that pass can
/// never be invalid downstream.
pub fn parse_datetime(input: &str) -> Result<NaiveDateTime, DateError> {
    if let Ok(dt) = input.parse::<NaiveDateTime>() {
        return Ok(dt);
    }
    input
        .parse::<NaiveDate>()
        .map(|d| d.and_time(NaiveTime::MIN))
        .map_err(|_| DateError::invalid_date(input))
}

pub fn parse_date(input: &str) -> Result<NaiveDate, DateError> {
    input
        .parse::<NaiveDate>()
        .map_err(|_| DateError::invalid_date(input))
}
