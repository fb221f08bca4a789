use chrono::NaiveDateTime;

use crate::dateerror::DateError;

/// An ordered pair of instants with `start` strictly before `end`.
///
/// Construction enforces the ordering instead of silently swapping the
/// bounds; a reversed or degenerate pair is the caller's bug and surfaces as
/// `InvalidRange`.
pub struct DateRange {
    start: NaiveDateTime,
    end: NaiveDateTime
}

impl DateRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<DateRange, DateError> {
        if start < end {
            Ok(DateRange { start, end })
        } else {
            Err(DateError::InvalidRange { start, end })
        }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Open-interval membership: both endpoints are excluded.
    pub fn contains(&self, d: NaiveDateTime) -> bool {
        (d > self.start) && (d < self.end)
    }
}

/// Returns true iff `date` lies strictly between `from` and `to`.
///
/// Fails with `InvalidRange` unless `from` is strictly before `to`.
pub fn is_within_range(
    date: NaiveDateTime,
    from: NaiveDateTime,
    to: NaiveDateTime
) -> Result<bool, DateError> {
    DateRange::new(from, to).map(|range| range.contains(date))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn dt(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn strictly_between_is_inside() {
        assert!(is_within_range(dt(2025, 6, 15), dt(2025, 6, 1), dt(2025, 7, 1)).unwrap());
    }

    #[test]
    fn endpoints_are_excluded() {
        let from = dt(2025, 6, 1);
        let to = dt(2025, 7, 1);
        assert!(!is_within_range(from, from, to).unwrap());
        assert!(!is_within_range(to, from, to).unwrap());
    }

    #[test]
    fn outside_dates_are_rejected() {
        assert!(!is_within_range(dt(2025, 5, 31), dt(2025, 6, 1), dt(2025, 7, 1)).unwrap());
        assert!(!is_within_range(dt(2025, 7, 2), dt(2025, 6, 1), dt(2025, 7, 1)).unwrap());
    }

    #[test]
    fn reversed_bounds_fail_with_invalid_range() {
        let from = dt(2025, 6, 1);
        let to = dt(2025, 7, 1);
        let err = is_within_range(dt(2025, 6, 15), to, from).unwrap_err();
        assert_eq!(err, DateError::InvalidRange { start: to, end: from });
    }

    #[test]
    fn degenerate_range_fails() {
        let d = dt(2025, 6, 1);
        assert!(DateRange::new(d, d).is_err());
    }
}
