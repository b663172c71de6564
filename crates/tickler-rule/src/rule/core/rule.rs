//! Recurrence rule value type.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::rule::parse::{ParseError, parse};

/// Largest interval accepted by a daily rule.
pub const MAX_DAILY_INTERVAL: u32 = 400;

/// ISO weekday numbers, 1 = Monday through 7 = Sunday.
pub const WEEKDAY_RANGE: RangeInclusive<u32> = 1..=7;

/// Largest day-of-month magnitude; negative entries count from the month end.
pub const MAX_MONTH_DAY: i32 = 31;

pub const MONTH_RANGE: RangeInclusive<u32> = 1..=12;

/// Discriminant of a [`RecurrenceRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Once,
    Daily,
    Yearly,
    Weekly,
    Monthly,
}

impl RuleKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Once => "once",
            Self::Daily => "daily",
            Self::Yearly => "yearly",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated recurrence rule.
///
/// Values built through [`parse`] always satisfy the documented ranges. The
/// text form produced by `Display` is canonical: lists are sorted and
/// de-duplicated, and parsing it yields an equal rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecurrenceRule {
    /// No repetition (empty rule text).
    Once,
    /// `d <interval>`: every `interval` days, `interval` in `1..=400`.
    Daily { interval: u32 },
    /// `y`: same month and day every year.
    Yearly,
    /// `w <days>`: on the listed ISO weekdays.
    Weekly { days: BTreeSet<u32> },
    /// `m <days> [<months>]`: on the listed days of the listed months.
    /// An empty month set means every month.
    Monthly {
        days: BTreeSet<i32>,
        months: BTreeSet<u32>,
    },
}

impl RecurrenceRule {
    #[must_use]
    pub const fn kind(&self) -> RuleKind {
        match self {
            Self::Once => RuleKind::Once,
            Self::Daily { .. } => RuleKind::Daily,
            Self::Yearly => RuleKind::Yearly,
            Self::Weekly { .. } => RuleKind::Weekly,
            Self::Monthly { .. } => RuleKind::Monthly,
        }
    }

    #[must_use]
    pub const fn is_once(&self) -> bool {
        matches!(self, Self::Once)
    }
}

fn write_list<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    values: impl IntoIterator<Item = T>,
) -> fmt::Result {
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{value}")?;
    }
    Ok(())
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Once => Ok(()),
            Self::Daily { interval } => write!(f, "d {interval}"),
            Self::Yearly => f.write_str("y"),
            Self::Weekly { days } => {
                f.write_str("w ")?;
                write_list(f, days)
            }
            Self::Monthly { days, months } => {
                f.write_str("m ")?;
                write_list(f, days)?;
                if !months.is_empty() {
                    f.write_str(" ")?;
                    write_list(f, months)?;
                }
                Ok(())
            }
        }
    }
}

impl FromStr for RecurrenceRule {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_text_sorts_and_dedups() {
        let rule: RecurrenceRule = "w 3,1,3".parse().unwrap();
        assert_eq!(rule.to_string(), "w 1,3");

        let rule: RecurrenceRule = "m 15,-1,15 12,1".parse().unwrap();
        assert_eq!(rule.to_string(), "m -1,15 1,12");
    }

    #[test]
    fn canonical_text_reparses_to_same_rule() {
        for text in ["", "d 7", "y", "w 1,2,7", "m -2,-1,1", "m 29 2"] {
            let rule: RecurrenceRule = text.parse().unwrap();
            let again: RecurrenceRule = rule.to_string().parse().unwrap();
            assert_eq!(rule, again, "{text}");
        }
    }

    #[test]
    fn kind_names() {
        assert_eq!(RecurrenceRule::Once.kind(), RuleKind::Once);
        assert_eq!(RecurrenceRule::Daily { interval: 1 }.kind().as_str(), "daily");
        assert!(RecurrenceRule::Once.is_once());
        assert!(!RecurrenceRule::Yearly.is_once());
    }
}
