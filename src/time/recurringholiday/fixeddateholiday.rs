use chrono::{
    Datelike,
    NaiveDate
};

use crate::time::utility::days_of_month;

use super::observance::Observance;
use super::recurringholiday::RecurringHoliday;

// Reference leap year for validating a month/day pair independent of the
// year it is asked for. A Feb 29 rule is legal; it simply has no occurrence
// in common years.
const LEAP_REFERENCE_YEAR: i32 = 2000;

#[derive(PartialEq, Eq, Clone, Copy)]
enum YearBoundaryCheck {
    /// Jan 1 of the following year may be observed on Dec 31 of this one.
    NextYearsDate,
    /// Dec 31 of the previous year may be observed on Jan 1 of this one.
    PreviousYearsDate,
    None
}

/// A holiday on the same month and day every year, observed under a
/// weekend policy.
#[derive(Clone, Copy)]
pub struct FixedDateHoliday {
    month: u32,
    day: u32,
    observance: Observance,
    boundary_check: YearBoundaryCheck
}

impl FixedDateHoliday {
    pub fn new(month: u32, day: u32, observance: Observance) -> Option<FixedDateHoliday> {
        if day == 0 || day > days_of_month(LEAP_REFERENCE_YEAR, month) {
            return None;
        }

        // An observance shift can cross the year boundary only from the
        // first or last days of the year, within the policy's reach.
        let reach = observance.max_shift_days();
        let boundary_check = if month == 1 && day <= reach {
            YearBoundaryCheck::NextYearsDate
        } else if month == 12 && day > 31 - reach {
            YearBoundaryCheck::PreviousYearsDate
        } else {
            YearBoundaryCheck::None
        };

        Some(FixedDateHoliday {
            month,
            day,
            observance,
            boundary_check
        })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn observance(&self) -> Observance {
        self.observance
    }

    fn observed_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
            .map(|d| self.observance.observe(d))
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn occurrences(&self, year: i32) -> Vec<NaiveDate> {
        let mut dates = Vec::with_capacity(1);

        if let Some(d) = self.observed_in(year) {
            if d.year() == year {
                dates.push(d);
            }
        }

        // The adjacent year's occurrence may have been observed into this
        // year, so a single year can carry two observances of the same rule
        // (or none, when this year's date shifted out).
        let adjacent_year = match self.boundary_check {
            YearBoundaryCheck::NextYearsDate => Some(year + 1),
            YearBoundaryCheck::PreviousYearsDate => Some(year - 1),
            YearBoundaryCheck::None => None
        };
        if let Some(adjacent) = adjacent_year {
            if let Some(d) = self.observed_in(adjacent) {
                if d.year() == year {
                    dates.push(d);
                }
            }
        }

        dates.sort_unstable();
        dates
    }
}
