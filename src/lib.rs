pub mod clock;
pub mod dateerror;

pub mod time {
    pub mod comparison;
    pub mod dateshift;
    pub mod daterange;
    pub mod parse;
    pub mod utility;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod observance;
        pub mod fixeddateholiday;
        pub mod nthweekdayholiday;
        pub mod lastweekdayholiday;
        pub mod easterrelatedholiday;
    }

    pub mod calendar {
        pub mod holidaycalendar;
        pub mod holidayprovider;
        pub mod target;
        pub mod unitedstates;
    }
}
