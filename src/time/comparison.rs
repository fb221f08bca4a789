use chrono::NaiveDateTime;

/// Returns true iff `date` is strictly earlier than `compare_date`.
/// Equal instants compare false.
pub fn is_date_before(date: NaiveDateTime, compare_date: NaiveDateTime) -> bool {
    date < compare_date
}

/// Returns true iff both instants fall on the same calendar day,
/// ignoring the time-of-day components entirely.
pub fn is_same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn before_is_strict() {
        assert!(is_date_before(at(2025, 1, 1, 0), at(2025, 1, 2, 0)));
        assert!(!is_date_before(at(2025, 1, 2, 0), at(2025, 1, 1, 0)));
        assert!(!is_date_before(at(2025, 1, 1, 0), at(2025, 1, 1, 0)));
    }

    #[test]
    fn same_instant_within_a_day_counts() {
        assert!(is_date_before(at(2025, 1, 1, 8), at(2025, 1, 1, 9)));
    }

    #[test]
    fn same_day_ignores_time_of_day() {
        assert!(is_same_day(at(2025, 3, 14, 1), at(2025, 3, 14, 23)));
        assert!(!is_same_day(at(2025, 3, 14, 23), at(2025, 3, 15, 0)));
    }

    #[test]
    fn same_day_is_symmetric_and_reflexive() {
        let a = at(2025, 3, 14, 1);
        let b = at(2025, 3, 14, 22);
        assert_eq!(is_same_day(a, b), is_same_day(b, a));
        assert!(is_same_day(a, a));
    }
}
