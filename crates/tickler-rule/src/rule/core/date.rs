//! Calendar date value type and its 8-digit `YYYYMMDD` text form.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Length of the canonical text form.
pub const DATE_TEXT_LEN: usize = 8;

/// Earliest year representable in the 8-digit form.
pub const MIN_YEAR: i32 = 1;

/// Latest year representable in the 8-digit form.
pub const MAX_YEAR: i32 = 9999;

/// Rejection reasons for date text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("expected {DATE_TEXT_LEN} digits (YYYYMMDD), got `{0}`")]
    Format(String),

    #[error("`{0}` is not a valid calendar date")]
    Calendar(String),
}

/// A date without time of day, proleptic Gregorian, years 1 through 9999.
///
/// Serialized as `YYYYMMDD`; the invariant (month in 1..=12, day within the
/// month's length) is enforced by every constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Creates a date from its components, or `None` if it is not calendar-valid.
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).and_then(Self::from_naive)
    }

    /// Wraps a chrono date if it falls inside the representable year range.
    #[must_use]
    pub fn from_naive(date: NaiveDate) -> Option<Self> {
        (MIN_YEAR..=MAX_YEAR)
            .contains(&date.year())
            .then_some(Self(date))
    }

    /// Today's date in the local time zone.
    #[must_use]
    pub fn today() -> Self {
        Self(chrono::Local::now().date_naive())
    }

    /// Parses the 8-digit `YYYYMMDD` form.
    ///
    /// ## Errors
    /// Returns `DateError::Format` unless the text is exactly eight ASCII
    /// digits, and `DateError::Calendar` if the digits do not name a real date.
    pub fn parse(text: &str) -> Result<Self, DateError> {
        if text.len() != DATE_TEXT_LEN || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateError::Format(text.to_string()));
        }

        let calendar_err = || DateError::Calendar(text.to_string());
        let year = text[0..4].parse::<i32>().ok().ok_or_else(calendar_err)?;
        let month = text[4..6].parse::<u32>().ok().ok_or_else(calendar_err)?;
        let day = text[6..8].parse::<u32>().ok().ok_or_else(calendar_err)?;

        Self::from_ymd(year, month, day).ok_or_else(calendar_err)
    }

    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    #[must_use]
    pub fn month(self) -> u32 {
        self.0.month()
    }

    #[must_use]
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// ISO weekday number: 1 = Monday through 7 = Sunday.
    #[must_use]
    pub fn weekday(self) -> u32 {
        self.0.weekday().number_from_monday()
    }

    /// Number of days in this date's month.
    #[must_use]
    pub fn days_in_month(self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Returns the date `days` later, or `None` past 9999-12-31.
    #[must_use]
    pub fn add_days(self, days: u64) -> Option<Self> {
        self.0
            .checked_add_days(Days::new(days))
            .and_then(Self::from_naive)
    }

    /// The following day, or `None` past 9999-12-31.
    #[must_use]
    pub fn succ(self) -> Option<Self> {
        self.add_days(1)
    }

    /// Signed number of days from `earlier` to `self`.
    #[must_use]
    pub fn days_since(self, earlier: Self) -> i64 {
        self.0.signed_duration_since(earlier.0).num_days()
    }

    /// Same month and day in `year`. February 29 becomes February 28 when
    /// `year` is not a leap year.
    #[must_use]
    pub fn in_year(self, year: i32) -> Option<Self> {
        let day = if self.month() == 2 && self.day() == 29 && !is_leap_year(year) {
            28
        } else {
            self.day()
        };
        Self::from_ymd(year, self.month(), day)
    }

    #[must_use]
    pub const fn as_naive(self) -> NaiveDate {
        self.0
    }
}

/// Whether `year` has a February 29 in the proleptic Gregorian calendar.
#[must_use]
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Number of days in `month` of `year`, or 0 for a month outside 1..=12.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}{:02}", self.year(), self.month(), self.day())
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
