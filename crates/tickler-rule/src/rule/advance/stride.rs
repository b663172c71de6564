//! Fixed-stride kinds: the next date is computed directly from the gap
//! between anchor and reference.

use super::error::{AdvanceError, AdvanceResult};
use crate::rule::core::CalendarDate;

/// Smallest `anchor + k * interval` (k >= 0) strictly after `reference`.
pub(super) fn daily(
    reference: CalendarDate,
    anchor: CalendarDate,
    interval: u32,
) -> AdvanceResult<CalendarDate> {
    if anchor > reference {
        return Ok(anchor);
    }

    let behind = u64::try_from(reference.days_since(anchor)).unwrap_or(0);
    let interval = u64::from(interval.max(1));
    let steps = behind / interval + 1;

    anchor
        .add_days(steps * interval)
        .ok_or(AdvanceError::OutOfRange)
}

/// Anchor's month and day in the first year that lands strictly after
/// `reference`. The leap-day clamp is applied per year, so a February 29
/// anchor comes back on February 29 in every leap year.
pub(super) fn yearly(
    reference: CalendarDate,
    anchor: CalendarDate,
) -> AdvanceResult<CalendarDate> {
    // Any year before the reference year lands before the reference.
    let year = anchor.year().max(reference.year());
    let candidate = anchor.in_year(year).ok_or(AdvanceError::OutOfRange)?;
    if candidate > reference {
        return Ok(candidate);
    }

    anchor.in_year(year + 1).ok_or(AdvanceError::OutOfRange)
}
