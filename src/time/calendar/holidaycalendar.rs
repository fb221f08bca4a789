use std::sync::Arc;

use chrono::{
    Datelike,
    NaiveDate,
    NaiveDateTime
};
use tracing::debug;

use crate::time::recurringholiday::recurringholiday::RecurringHoliday;

/// A named, immutable composition of recurring-holiday rules.
///
/// The holiday set for a year is recomputed on every call; nothing is cached
/// across calls, so the result is a deterministic pure function of the year.
#[derive(Clone)]
pub struct HolidayCalendar {
    name: String,
    rules: Vec<Arc<dyn RecurringHoliday>>
}

impl HolidayCalendar {
    pub fn new(name: impl Into<String>, rules: Vec<Arc<dyn RecurringHoliday>>) -> HolidayCalendar {
        HolidayCalendar {
            name: name.into(),
            rules
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// All holidays observed in `year`, ascending and deduplicated.
    ///
    /// Rules may place an occurrence outside the requested year (observance
    /// shifts, Easter offsets); those are filtered so that every returned
    /// date carries `year`.
    pub fn holidays_in_year(&self, year: i32) -> Vec<NaiveDate> {
        let mut holidays: Vec<NaiveDate> = self
            .rules
            .iter()
            .flat_map(|rule| rule.occurrences(year))
            .filter(|d| d.year() == year)
            .collect();
        holidays.sort_unstable();
        holidays.dedup();
        debug!(
            calendar = %self.name,
            year,
            count = holidays.len(),
            "computed holiday set"
        );
        holidays
    }

    pub fn is_holiday_date(&self, d: NaiveDate) -> bool {
        self.rules.iter().any(|rule| rule.occurs_on(d))
    }

    /// Date-only membership: the time-of-day component is ignored.
    pub fn is_holiday(&self, d: NaiveDateTime) -> bool {
        self.is_holiday_date(d.date())
    }
}
