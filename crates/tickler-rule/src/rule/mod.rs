//! Recurrence rules: value types, text parsing and next-date computation.

pub mod advance;
pub mod core;
pub mod parse;

pub use advance::{Advancer, next_date_text, next_occurrence};
pub use core::{CalendarDate, RecurrenceRule, SearchLimits};
pub use parse::parse;
