use chrono::NaiveDateTime;
use thiserror::Error;

/// Errors raised at the boundaries of the calendar utilities.
///
/// Every variant carries enough context to name the precondition that was
/// violated. None of these are retried internally; callers either validate
/// upstream or handle the failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("invalid range: start {start} is not strictly before end {end}")]
    InvalidRange {
        start: NaiveDateTime,
        end: NaiveDateTime
    }
}

impl DateError {
    pub fn invalid_date(input: &str) -> DateError {
        DateError::InvalidDate(format!("'{}' is not a valid calendar date", input))
    }

    pub fn invalid_amount(detail: impl Into<String>) -> DateError {
        DateError::InvalidAmount(detail.into())
    }
}
