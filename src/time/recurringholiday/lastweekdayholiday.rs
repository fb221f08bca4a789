use chrono::{
    Datelike,
    Days,
    NaiveDate,
    Weekday
};

use crate::time::utility::days_of_month;

use super::recurringholiday::RecurringHoliday;

/// The last occurrence of a weekday within a month.
#[derive(Clone, Copy)]
pub struct LastWeekdayHoliday {
    month: u32,
    weekday: Weekday
}

impl LastWeekdayHoliday {
    pub fn new(month: u32, weekday: Weekday) -> Option<LastWeekdayHoliday> {
        if !(1..=12).contains(&month) {
            None
        } else {
            Some(LastWeekdayHoliday { month, weekday })
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl RecurringHoliday for LastWeekdayHoliday {
    fn occurrences(&self, year: i32) -> Vec<NaiveDate> {
        let Some(end_of_month) =
            NaiveDate::from_ymd_opt(year, self.month, days_of_month(year, self.month))
        else {
            return Vec::new();
        };
        // Walk back from the end of the month to the target weekday.
        let back = end_of_month.weekday().days_since(self.weekday);
        vec![end_of_month - Days::new(back as u64)]
    }
}
