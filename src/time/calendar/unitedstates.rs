use std::sync::Arc;

use chrono::Weekday;

use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::lastweekdayholiday::LastWeekdayHoliday;
use crate::time::recurringholiday::nthweekdayholiday::NthWeekdayHoliday;
use crate::time::recurringholiday::observance::Observance;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;

use super::holidaycalendar::HolidayCalendar;

/// United States federal holidays on their actual calendar dates:
/// * New Year's Day (Jan 1)
/// * Martin Luther King Jr. Day (3rd Monday of January)
/// * Washington's Birthday (3rd Monday of February)
/// * Memorial Day (last Monday of May)
/// * Juneteenth (Jun 19)
/// * Independence Day (Jul 4)
/// * Labor Day (1st Monday of September)
/// * Columbus Day (2nd Monday of October)
/// * Veterans Day (Nov 11)
/// * Thanksgiving (4th Thursday of November)
/// * Christmas Day (Dec 25)
pub fn federal() -> HolidayCalendar {
    HolidayCalendar::new("US federal", rules(Observance::Exact))
}

/// The same holiday set under nearest-weekday observance: a Saturday
/// holiday is taken the preceding Friday, a Sunday holiday the following
/// Monday. Observance can move a date into the adjacent year, so a given
/// year may see a fixed-date holiday twice or not at all.
pub fn federal_observed() -> HolidayCalendar {
    HolidayCalendar::new("US federal (observed)", rules(Observance::NearestWeekday))
}

fn rules(observance: Observance) -> Vec<Arc<dyn RecurringHoliday>> {
    vec![
        Arc::new(FixedDateHoliday::new(1, 1, observance).unwrap()),
        Arc::new(NthWeekdayHoliday::new(1, 3, Weekday::Mon).unwrap()),
        Arc::new(NthWeekdayHoliday::new(2, 3, Weekday::Mon).unwrap()),
        Arc::new(LastWeekdayHoliday::new(5, Weekday::Mon).unwrap()),
        Arc::new(FixedDateHoliday::new(6, 19, observance).unwrap()),
        Arc::new(FixedDateHoliday::new(7, 4, observance).unwrap()),
        Arc::new(NthWeekdayHoliday::new(9, 1, Weekday::Mon).unwrap()),
        Arc::new(NthWeekdayHoliday::new(10, 2, Weekday::Mon).unwrap()),
        Arc::new(FixedDateHoliday::new(11, 11, observance).unwrap()),
        Arc::new(NthWeekdayHoliday::new(11, 4, Weekday::Thu).unwrap()),
        Arc::new(FixedDateHoliday::new(12, 25, observance).unwrap())
    ]
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn federal_holidays_2025() {
        let expected = vec![
            date(2025, 1, 1),
            date(2025, 1, 20),
            date(2025, 2, 17),
            date(2025, 5, 26),
            date(2025, 6, 19),
            date(2025, 7, 4),
            date(2025, 9, 1),
            date(2025, 10, 13),
            date(2025, 11, 11),
            date(2025, 11, 27),
            date(2025, 12, 25)
        ];
        assert_eq!(federal().holidays_in_year(2025), expected);
    }

    #[test]
    fn actual_dates_always_contain_jan_1_and_dec_25() {
        let cal = federal();
        for year in [1995, 2011, 2022, 2025, 2033] {
            let holidays = cal.holidays_in_year(year);
            assert!(holidays.contains(&date(year, 1, 1)), "{} missing Jan 1", year);
            assert!(holidays.contains(&date(year, 12, 25)), "{} missing Dec 25", year);
        }
    }

    #[test]
    fn observed_calendar_shifts_weekend_dates() {
        // 2026-07-04 falls on a Saturday, observed Friday Jul 3.
        let holidays = federal_observed().holidays_in_year(2026);
        assert!(holidays.contains(&date(2026, 7, 3)));
        assert!(!holidays.contains(&date(2026, 7, 4)));
    }

    #[test]
    fn july_15_is_never_a_holiday() {
        let cal = federal();
        for year in [2024, 2025, 2026] {
            assert!(!cal.is_holiday_date(date(year, 7, 15)));
        }
    }
}
