//! Set-based kinds: walk forward from the first candidate until a date
//! matches.

use std::collections::BTreeSet;

use super::error::{AdvanceError, AdvanceResult};
use crate::rule::core::{CalendarDate, MAX_YEAR, SearchLimits, days_in_month};

/// First date on or after `start` whose ISO weekday is in `days`.
///
/// Returns `Ok(None)` if no weekday in the following seven days matches.
pub(super) fn weekly(
    start: CalendarDate,
    days: &BTreeSet<u32>,
) -> AdvanceResult<Option<CalendarDate>> {
    for offset in 0..7 {
        let date = start.add_days(offset).ok_or(AdvanceError::OutOfRange)?;
        if days.contains(&date.weekday()) {
            return Ok(Some(date));
        }
    }
    Ok(None)
}

/// First date on or after `start` whose day matches an entry of `days` in a
/// month allowed by `months` (empty = all months).
///
/// Returns `Ok(None)` if nothing matches within `limits`.
pub(super) fn monthly(
    start: CalendarDate,
    days: &BTreeSet<i32>,
    months: &BTreeSet<u32>,
    limits: SearchLimits,
) -> AdvanceResult<Option<CalendarDate>> {
    let (mut year, mut month) = (start.year(), start.month());

    for _ in 0..limits.max_months() {
        if months.is_empty() || months.contains(&month) {
            let last = days_in_month(year, month);
            let earliest = if (year, month) == (start.year(), start.month()) {
                start.day()
            } else {
                1
            };

            let found = days
                .iter()
                .filter_map(|&entry| resolve_month_day(entry, last))
                .filter(|&day| day >= earliest)
                .min();

            if let Some(day) = found {
                return Ok(CalendarDate::from_ymd(year, month, day));
            }
        }

        (year, month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        if year > MAX_YEAR {
            return Err(AdvanceError::OutOfRange);
        }
    }

    Ok(None)
}

/// Resolves a day-of-month entry against a month with `last` days.
///
/// Positive entries are taken as-is, negative ones count back from the end
/// (`-1` is `last`). Entries that do not exist in the month yield `None`.
pub(super) fn resolve_month_day(entry: i32, last: u32) -> Option<u32> {
    let magnitude = entry.unsigned_abs();
    if magnitude == 0 || magnitude > last {
        return None;
    }
    if entry > 0 {
        Some(magnitude)
    } else {
        Some(last + 1 - magnitude)
    }
}
