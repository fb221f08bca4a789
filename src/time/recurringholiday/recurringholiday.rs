use chrono::NaiveDate;

/// A holiday defined by a calendar rule rather than a fixed list of dates.
///
/// Implementations compute, for a requested year, every occurrence of the
/// holiday that falls within that year, in ascending order. Most rules yield
/// exactly one date; an observance shift at the year boundary can yield zero
/// or two (see `FixedDateHoliday`).
pub trait RecurringHoliday: Send + Sync {
    fn occurrences(&self, year: i32) -> Vec<NaiveDate>;

    fn occurs_on(&self, d: NaiveDate) -> bool {
        use chrono::Datelike;
        self.occurrences(d.year()).contains(&d)
    }
}
