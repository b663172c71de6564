//! Next-occurrence computation.
//!
//! Every kind answers the same question: the earliest date produced by the
//! rule, counting from the anchor, that lies strictly after the reference.
//! - `Once`: the anchor itself if it is after the reference, else nothing
//! - `Daily`/`Yearly`: closed-form stride from the anchor
//! - `Weekly`/`Monthly`: forward scan from the first candidate,
//!   `max(reference + 1 day, anchor)`, bounded by [`SearchLimits`]

mod error;
mod scan;
mod stride;

pub use error::{AdvanceError, AdvanceResult};

use crate::error::RuleResult;
use crate::rule::core::{CalendarDate, RecurrenceRule, SearchLimits};
use crate::rule::parse::parse;

/// Evaluates rules against a fixed set of search limits.
#[derive(Debug, Clone, Copy, Default)]
pub struct Advancer {
    limits: SearchLimits,
}

impl Advancer {
    #[must_use]
    pub const fn new(limits: SearchLimits) -> Self {
        Self { limits }
    }

    #[must_use]
    pub const fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// ## Summary
    /// Computes the next date `rule` produces after `reference`, counting
    /// from `anchor`.
    ///
    /// `Ok(None)` means the rule is valid but nothing is left to schedule:
    /// a `Once` rule whose anchor is not after the reference.
    ///
    /// ## Errors
    /// - `SearchExhausted` if a weekly or monthly scan finds no match within
    ///   the configured limits
    /// - `OutOfRange` if the next occurrence would fall after 9999-12-31
    pub fn next_occurrence(
        &self,
        reference: CalendarDate,
        anchor: CalendarDate,
        rule: &RecurrenceRule,
    ) -> AdvanceResult<Option<CalendarDate>> {
        let next = match rule {
            RecurrenceRule::Once => (anchor > reference).then_some(anchor),
            RecurrenceRule::Daily { interval } => {
                Some(stride::daily(reference, anchor, *interval)?)
            }
            RecurrenceRule::Yearly => Some(stride::yearly(reference, anchor)?),
            RecurrenceRule::Weekly { days } => {
                let start = first_candidate(reference, anchor)?;
                let found = scan::weekly(start, days)?;
                Some(found.ok_or_else(|| self.exhausted(rule, start))?)
            }
            RecurrenceRule::Monthly { days, months } => {
                let start = first_candidate(reference, anchor)?;
                let found = scan::monthly(start, days, months, self.limits)?;
                Some(found.ok_or_else(|| self.exhausted(rule, start))?)
            }
        };

        tracing::trace!(
            rule = %rule,
            %anchor,
            %reference,
            next = ?next.map(|date| date.to_string()),
            "Computed next occurrence"
        );
        Ok(next)
    }

    /// ## Summary
    /// Text-level entry point working on the 8-digit date form.
    ///
    /// Returns the next date as `YYYYMMDD`, or an empty string when there is
    /// no further occurrence. The rule is parsed before either date, so an
    /// invalid rule is always reported as such.
    ///
    /// ## Errors
    /// - `RuleError::Parse` if the rule text is invalid
    /// - `RuleError::Advance` for malformed dates or a failed computation
    pub fn next_date_text(&self, reference: &str, anchor: &str, rule: &str) -> RuleResult<String> {
        let rule = parse(rule)?;
        let anchor = CalendarDate::parse(anchor).map_err(|source| {
            AdvanceError::MalformedAnchor {
                text: anchor.to_string(),
                source,
            }
        })?;
        let reference = CalendarDate::parse(reference).map_err(|source| {
            AdvanceError::MalformedReference {
                text: reference.to_string(),
                source,
            }
        })?;

        Ok(self
            .next_occurrence(reference, anchor, &rule)?
            .map(|date| date.to_string())
            .unwrap_or_default())
    }

    fn exhausted(&self, rule: &RecurrenceRule, from: CalendarDate) -> AdvanceError {
        tracing::warn!(rule = %rule, %from, years = self.limits.max_search_years, "Forward search exhausted");
        AdvanceError::SearchExhausted {
            rule: rule.to_string(),
            from,
            years: self.limits.max_search_years,
        }
    }
}

/// Earliest date a weekly or monthly scan may return.
fn first_candidate(
    reference: CalendarDate,
    anchor: CalendarDate,
) -> AdvanceResult<CalendarDate> {
    let after_reference = reference.succ().ok_or(AdvanceError::OutOfRange)?;
    Ok(after_reference.max(anchor))
}

/// [`Advancer::next_occurrence`] with the default search limits.
///
/// ## Errors
/// See [`Advancer::next_occurrence`].
pub fn next_occurrence(
    reference: CalendarDate,
    anchor: CalendarDate,
    rule: &RecurrenceRule,
) -> AdvanceResult<Option<CalendarDate>> {
    Advancer::default().next_occurrence(reference, anchor, rule)
}

/// [`Advancer::next_date_text`] with the default search limits.
///
/// ## Errors
/// See [`Advancer::next_date_text`].
pub fn next_date_text(reference: &str, anchor: &str, rule: &str) -> RuleResult<String> {
    Advancer::default().next_date_text(reference, anchor, rule)
}
