use std::fmt;

use chrono::{
    Datelike,
    Duration,
    NaiveDate,
    NaiveDateTime
};
use serde::{
    Deserialize,
    Serialize
};
use tracing::trace;

use crate::dateerror::DateError;
use crate::time::utility::days_of_month;

/// Calendar field a signed offset applies to.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum DateUnit {
    Days,
    Months,
    Years
}

impl DateUnit {
    pub fn to_char(&self) -> char {
        match self {
            DateUnit::Days => 'D',
            DateUnit::Months => 'M',
            DateUnit::Years => 'Y'
        }
    }
}

/// A signed calendar offset: an amount of days, months or years.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct DateShift {
    amount: i32,
    unit: DateUnit
}

impl DateShift {
    pub fn new(amount: i32, unit: DateUnit) -> DateShift {
        DateShift { amount, unit }
    }

    pub fn days(amount: i32) -> DateShift {
        DateShift::new(amount, DateUnit::Days)
    }

    pub fn months(amount: i32) -> DateShift {
        DateShift::new(amount, DateUnit::Months)
    }

    pub fn years(amount: i32) -> DateShift {
        DateShift::new(amount, DateUnit::Years)
    }

    /// Parses shift strings of the form `"5D"`, `"-3M"`, `"2Y"`.
    pub fn parse(shift_str: &str) -> Result<DateShift, DateError> {
        let Some(unit_chr) = shift_str.chars().last() else {
            return Err(DateError::invalid_amount("empty shift string"));
        };
        let unit = match unit_chr {
            'D' => DateUnit::Days,
            'M' => DateUnit::Months,
            'Y' => DateUnit::Years,
            _ => {
                return Err(DateError::invalid_amount(format!(
                    "unknown date unit '{}' in '{}'",
                    unit_chr, shift_str
                )));
            }
        };
        let amount = shift_str[..shift_str.len() - unit_chr.len_utf8()]
            .parse::<i32>()
            .map_err(|e| {
                DateError::invalid_amount(format!("cannot parse '{}': {}", shift_str, e))
            })?;
        Ok(DateShift::new(amount, unit))
    }

    pub fn amount(&self) -> i32 {
        self.amount
    }

    pub fn unit(&self) -> DateUnit {
        self.unit
    }

    /// Applies the shift to `horizon`, returning a new value.
    ///
    /// Month and year shifts clamp the day-of-month to the last valid day of
    /// the resulting month (Jan 31 + 1M is Feb 28, or Feb 29 in leap years;
    /// Feb 29 + 1Y is Feb 28). The time-of-day component is carried over
    /// unchanged. A shift that lands outside the supported calendar range
    /// fails with `InvalidAmount`.
    pub fn apply(&self, horizon: NaiveDateTime) -> Result<NaiveDateTime, DateError> {
        trace!(amount = self.amount, unit = ?self.unit, "applying date shift");
        let shifted = match self.unit {
            DateUnit::Days => horizon.checked_add_signed(Duration::days(self.amount as i64)),
            DateUnit::Months => {
                shift_months(horizon.date(), self.amount).map(|d| d.and_time(horizon.time()))
            },
            DateUnit::Years => {
                shift_years(horizon.date(), self.amount).map(|d| d.and_time(horizon.time()))
            }
        };
        shifted.ok_or_else(|| {
            DateError::invalid_amount(format!(
                "offset {} moves {} out of the supported calendar range",
                self, horizon
            ))
        })
    }
}

impl fmt::Display for DateShift {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.unit.to_char())
    }
}

fn shift_months(horizon: NaiveDate, amount: i32) -> Option<NaiveDate> {
    let total = horizon.month0() as i64 + amount as i64;
    let new_year = i32::try_from(horizon.year() as i64 + total.div_euclid(12)).ok()?;
    let new_month = total.rem_euclid(12) as u32 + 1;
    let last = days_of_month(new_year, new_month);
    NaiveDate::from_ymd_opt(new_year, new_month, last.min(horizon.day()))
}

fn shift_years(horizon: NaiveDate, amount: i32) -> Option<NaiveDate> {
    let new_year = horizon.year().checked_add(amount)?;
    let last = days_of_month(new_year, horizon.month());
    NaiveDate::from_ymd_opt(new_year, horizon.month(), last.min(horizon.day()))
}

/// Offsets `date` by `amount` units, without mutating the input.
///
/// The flat entry point over [`DateShift::apply`]; see there for the
/// day-of-month clamp policy and failure conditions.
pub fn add(date: NaiveDateTime, amount: i32, unit: DateUnit) -> Result<NaiveDateTime, DateError> {
    DateShift::new(amount, unit).apply(date)
}
