use chrono::{
    NaiveDate,
    Weekday
};

use super::recurringholiday::RecurringHoliday;

/// The nth occurrence of a weekday within a month (n in 1..=5).
///
/// A fifth occurrence does not exist in every month; such years simply have
/// no occurrence.
#[derive(Clone, Copy)]
pub struct NthWeekdayHoliday {
    month: u32,
    n: u8,
    weekday: Weekday
}

impl NthWeekdayHoliday {
    pub fn new(month: u32, n: u8, weekday: Weekday) -> Option<NthWeekdayHoliday> {
        if !(1..=12).contains(&month) || !(1..=5).contains(&n) {
            None
        } else {
            Some(NthWeekdayHoliday { month, n, weekday })
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn n(&self) -> u8 {
        self.n
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl RecurringHoliday for NthWeekdayHoliday {
    fn occurrences(&self, year: i32) -> Vec<NaiveDate> {
        NaiveDate::from_weekday_of_month_opt(year, self.month, self.weekday, self.n)
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn third_monday_of_january() {
        let rule = NthWeekdayHoliday::new(1, 3, Weekday::Mon).unwrap();
        assert_eq!(rule.occurrences(2025), vec![date(2025, 1, 20)]);
        assert_eq!(rule.occurrences(2024), vec![date(2024, 1, 15)]);
    }

    #[test]
    fn fourth_thursday_of_november() {
        let rule = NthWeekdayHoliday::new(11, 4, Weekday::Thu).unwrap();
        assert_eq!(rule.occurrences(2025), vec![date(2025, 11, 27)]);
    }

    #[test]
    fn missing_fifth_occurrence_yields_nothing() {
        // February 2025 has only four Fridays.
        let rule = NthWeekdayHoliday::new(2, 5, Weekday::Fri).unwrap();
        assert!(rule.occurrences(2025).is_empty());
    }

    #[test]
    fn rejects_out_of_range_parameters() {
        assert!(NthWeekdayHoliday::new(0, 1, Weekday::Mon).is_none());
        assert!(NthWeekdayHoliday::new(1, 6, Weekday::Mon).is_none());
    }
}
