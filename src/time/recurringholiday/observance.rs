use chrono::{
    Datelike,
    Days,
    NaiveDate,
    Weekday
};
use serde::{
    Deserialize,
    Serialize
};

/// How a holiday landing on a weekend is observed.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum Observance {
    /// The calendar date itself, whatever weekday it falls on.
    Exact,
    /// Saturday is observed the preceding Friday, Sunday the following
    /// Monday.
    NearestWeekday
}

impl Observance {
    pub fn observe(&self, d: NaiveDate) -> NaiveDate {
        match self {
            Observance::Exact => d,
            Observance::NearestWeekday => match d.weekday() {
                Weekday::Sat => d - Days::new(1),
                Weekday::Sun => d + Days::new(1),
                _ => d
            }
        }
    }

    /// Largest number of days `observe` can move a date, in either direction.
    pub fn max_shift_days(&self) -> u32 {
        match self {
            Observance::Exact => 0,
            Observance::NearestWeekday => 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn exact_never_moves() {
        // 2025-07-05 is a Saturday
        assert_eq!(Observance::Exact.observe(date(2025, 7, 5)), date(2025, 7, 5));
    }

    #[test]
    fn saturday_observed_on_friday() {
        assert_eq!(
            Observance::NearestWeekday.observe(date(2025, 7, 5)),
            date(2025, 7, 4)
        );
    }

    #[test]
    fn sunday_observed_on_monday() {
        // 2025-06-15 is a Sunday
        assert_eq!(
            Observance::NearestWeekday.observe(date(2025, 6, 15)),
            date(2025, 6, 16)
        );
    }

    #[test]
    fn weekdays_unchanged() {
        // 2025-06-19 is a Thursday
        assert_eq!(
            Observance::NearestWeekday.observe(date(2025, 6, 19)),
            date(2025, 6, 19)
        );
    }
}
