use std::collections::BTreeSet;
use std::str::FromStr;

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::rule::core::{
    MAX_DAILY_INTERVAL, MAX_MONTH_DAY, MONTH_RANGE, RecurrenceRule, WEEKDAY_RANGE,
};

/// Parses rule text into a [`RecurrenceRule`].
///
/// Empty or whitespace-only text is [`RecurrenceRule::Once`]. All range
/// checks happen here, so an `Ok` rule never fails validation later.
///
/// ## Errors
/// Returns a `ParseError` whose kind names the first rejected token.
pub fn parse(text: &str) -> ParseResult<RecurrenceRule> {
    let mut tokens = text.split_whitespace();

    let Some(kind) = tokens.next() else {
        return Ok(RecurrenceRule::Once);
    };

    let rule = match kind {
        "d" => parse_daily(tokens.next())?,
        "y" => RecurrenceRule::Yearly,
        "w" => parse_weekly(tokens.next())?,
        "m" => parse_monthly(tokens.next(), tokens.next())?,
        other => {
            return Err(ParseError::new(ParseErrorKind::UnknownRuleKind).with_token(other));
        }
    };

    if let Some(extra) = tokens.next() {
        return Err(ParseError::new(ParseErrorKind::UnexpectedArgument).with_token(extra));
    }

    tracing::trace!(rule = %rule, kind = %rule.kind(), "Parsed recurrence rule");
    Ok(rule)
}

/// Parses `d <interval>`.
fn parse_daily(arg: Option<&str>) -> ParseResult<RecurrenceRule> {
    let kind = ParseErrorKind::InvalidInterval;
    let arg = arg.ok_or(ParseError::new(kind))?;
    let interval = parse_value(arg, kind, |n: &u32| (1..=MAX_DAILY_INTERVAL).contains(n))?;
    Ok(RecurrenceRule::Daily { interval })
}

/// Parses `w <weekdays>`.
fn parse_weekly(arg: Option<&str>) -> ParseResult<RecurrenceRule> {
    let kind = ParseErrorKind::InvalidWeekday;
    let arg = arg.ok_or(ParseError::new(kind))?;
    let days = parse_list(arg, kind, |n: &u32| WEEKDAY_RANGE.contains(n))?;
    Ok(RecurrenceRule::Weekly { days })
}

/// Parses `m <days> [<months>]`.
fn parse_monthly(days: Option<&str>, months: Option<&str>) -> ParseResult<RecurrenceRule> {
    let kind = ParseErrorKind::InvalidMonthDay;
    let days = days.ok_or(ParseError::new(kind))?;
    let days = parse_list(days, kind, |n: &i32| {
        *n != 0 && (-MAX_MONTH_DAY..=MAX_MONTH_DAY).contains(n)
    })?;

    let months = match months {
        Some(list) => parse_list(list, ParseErrorKind::InvalidMonth, |n: &u32| {
            MONTH_RANGE.contains(n)
        })?,
        None => BTreeSet::new(),
    };

    Ok(RecurrenceRule::Monthly { days, months })
}

/// Parses one integer and checks it with `valid`.
fn parse_value<T: FromStr>(
    token: &str,
    kind: ParseErrorKind,
    valid: impl Fn(&T) -> bool,
) -> ParseResult<T> {
    token
        .parse::<T>()
        .ok()
        .filter(|value| valid(value))
        .ok_or_else(|| ParseError::new(kind).with_token(token))
}

/// Parses a comma-separated list; duplicates collapse into the set.
fn parse_list<T: FromStr + Ord>(
    list: &str,
    kind: ParseErrorKind,
    valid: impl Fn(&T) -> bool,
) -> ParseResult<BTreeSet<T>> {
    list.split(',')
        .map(|item| parse_value(item, kind, &valid))
        .collect()
}
