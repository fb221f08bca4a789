use chrono::{
    Duration,
    NaiveDate
};
use serde::{
    Deserialize,
    Serialize
};

use super::recurringholiday::RecurringHoliday;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum EasterType {
    Western,
    Orthodox
}

/// A holiday at a fixed day offset from Easter Sunday (Good Friday is
/// `shift_days = -2`, Easter Monday `+1`).
///
/// The computus is only meaningful for Gregorian-era years; outside
/// 1583..=4099 the rule yields no occurrence.
#[derive(Clone, Copy)]
pub struct EasterRelatedHoliday {
    easter_type: EasterType,
    shift_days: i32
}

impl EasterRelatedHoliday {
    pub fn new(easter_type: EasterType, shift_days: i32) -> EasterRelatedHoliday {
        EasterRelatedHoliday {
            easter_type,
            shift_days
        }
    }

    pub fn easter_type(&self) -> EasterType {
        self.easter_type
    }

    pub fn shift_days(&self) -> i32 {
        self.shift_days
    }

    fn easter_sunday(&self, year: i32) -> Option<NaiveDate> {
        if !(1583..=4099).contains(&year) {
            return None;
        }
        match self.easter_type {
            EasterType::Western => western_easter(year),
            EasterType::Orthodox => orthodox_easter(year)
        }
    }
}

impl RecurringHoliday for EasterRelatedHoliday {
    fn occurrences(&self, year: i32) -> Vec<NaiveDate> {
        self.easter_sunday(year)
            .map(|easter| easter + Duration::days(self.shift_days as i64))
            .into_iter()
            .collect()
    }
}

/// Gregorian Easter Sunday (Meeus/Jones/Butcher).
fn western_easter(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

/// Julian Easter Sunday (Meeus), converted to the Gregorian calendar.
fn orthodox_easter(year: i32) -> Option<NaiveDate> {
    let a = year % 4;
    let b = year % 7;
    let c = year % 19;
    let d = (19 * c + 15) % 30;
    let e = (2 * a + 4 * b - d + 34) % 7;
    let month = (d + e + 114) / 31;
    let day = (d + e + 114) % 31 + 1;
    let julian = NaiveDate::from_ymd_opt(year, month as u32, day as u32)?;
    // Julian-to-Gregorian offset for the year.
    let offset = year / 100 - year / 400 - 2;
    Some(julian + Duration::days(offset as i64))
}
