use chrono::{
    Datelike,
    NaiveDate,
    NaiveDateTime
};
use tracing::debug;

use crate::dateerror::DateError;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::unitedstates;

/// Asynchronous source of year-scoped holiday sets.
///
/// The contract is asynchronous even though the built-in provider resolves
/// from local rules: a provider may be backed by a remote or file-based
/// holiday table, and swapping one in must not change the interface. A
/// provider that cannot produce the table for a year must return an error,
/// never an empty set.
#[async_trait::async_trait]
pub trait HolidayProvider: Send + Sync {
    /// All holidays observed in `year`, ascending.
    async fn holidays_in_year(&self, year: i32) -> Result<Vec<NaiveDate>, DateError>;

    /// Whether any holiday of `date`'s year falls on the same calendar day
    /// as `date`; the time-of-day component is ignored.
    async fn is_holiday(&self, date: NaiveDateTime) -> Result<bool, DateError> {
        let holidays = self.holidays_in_year(date.year()).await?;
        Ok(holidays.contains(&date.date()))
    }
}

/// Provider backed by an in-process rule calendar.
pub struct RuleHolidayProvider {
    calendar: HolidayCalendar
}

impl RuleHolidayProvider {
    pub fn new(calendar: HolidayCalendar) -> RuleHolidayProvider {
        RuleHolidayProvider { calendar }
    }

    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }
}

#[async_trait::async_trait]
impl HolidayProvider for RuleHolidayProvider {
    async fn holidays_in_year(&self, year: i32) -> Result<Vec<NaiveDate>, DateError> {
        debug!(calendar = %self.calendar.name(), year, "resolving holidays from rules");
        Ok(self.calendar.holidays_in_year(year))
    }
}

/// Holidays of the default calendar (`unitedstates::federal`) for `year`.
pub async fn get_holidays(year: i32) -> Result<Vec<NaiveDate>, DateError> {
    RuleHolidayProvider::new(unitedstates::federal())
        .holidays_in_year(year)
        .await
}

/// Whether `date` falls on a holiday of the default calendar.
pub async fn is_holiday(date: NaiveDateTime) -> Result<bool, DateError> {
    RuleHolidayProvider::new(unitedstates::federal())
        .is_holiday(date)
        .await
}
