//! Core value types of the recurrence engine.

mod date;
mod limits;
mod rule;

pub use date::{
    CalendarDate, DATE_TEXT_LEN, DateError, MAX_YEAR, MIN_YEAR, days_in_month, is_leap_year,
};
pub use limits::SearchLimits;
pub use rule::{
    MAX_DAILY_INTERVAL, MAX_MONTH_DAY, MONTH_RANGE, RecurrenceRule, RuleKind, WEEKDAY_RANGE,
};
