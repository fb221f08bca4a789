use chrono::{
    Datelike,
    Local,
    NaiveDateTime
};

/// Source of the current wall-clock instant.
///
/// The system clock is a process-wide dependency; abstracting it behind a
/// trait lets tests pin an instant instead of mocking global time. Everything
/// that needs "now" takes a `Clock` (or uses the free functions, which run on
/// `SystemClock`).
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    fn current_year(&self) -> i32 {
        self.now().year()
    }
}

/// The real system clock, in local time.
#[derive(Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at a fixed instant.
#[derive(Clone, Copy)]
pub struct FixedClock {
    instant: NaiveDateTime
}

impl FixedClock {
    pub fn new(instant: NaiveDateTime) -> FixedClock {
        FixedClock { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.instant
    }
}

/// Year component of the current system time.
pub fn current_year() -> i32 {
    SystemClock.current_year()
}
