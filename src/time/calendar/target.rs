use std::sync::Arc;

use crate::time::recurringholiday::easterrelatedholiday::{
    EasterRelatedHoliday,
    EasterType
};
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::observance::Observance;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;

use super::holidaycalendar::HolidayCalendar;

/// The TARGET interbank calendar:
/// * New Year's Day (Jan 1)
/// * Good Friday (Easter - 2)
/// * Easter Monday (Easter + 1)
/// * Labour Day (May 1)
/// * Christmas Day (Dec 25)
/// * Boxing Day (Dec 26)
pub fn target() -> HolidayCalendar {
    let rules: Vec<Arc<dyn RecurringHoliday>> = vec![
        Arc::new(FixedDateHoliday::new(1, 1, Observance::Exact).unwrap()),
        Arc::new(EasterRelatedHoliday::new(EasterType::Western, -2)),
        Arc::new(EasterRelatedHoliday::new(EasterType::Western, 1)),
        Arc::new(FixedDateHoliday::new(5, 1, Observance::Exact).unwrap()),
        Arc::new(FixedDateHoliday::new(12, 25, Observance::Exact).unwrap()),
        Arc::new(FixedDateHoliday::new(12, 26, Observance::Exact).unwrap())
    ];
    HolidayCalendar::new("TARGET", rules)
}
