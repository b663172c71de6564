//! Rule parsing error types.

use std::fmt;

/// Result type for rule parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Error type for rule parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Kind of error.
    pub kind: ParseErrorKind,
    /// The token that was rejected, if there was one.
    pub token: Option<String>,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub const fn new(kind: ParseErrorKind) -> Self {
        Self { kind, token: None }
    }

    /// Records the offending token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        match self.token.as_deref() {
            Some("") => write!(f, ": empty value"),
            Some(token) => write!(f, ": `{token}`"),
            None => write!(f, ": {}", self.kind.missing_hint()),
        }
    }
}

impl std::error::Error for ParseError {}

/// Kinds of parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Leading token is not `d`, `y`, `w` or `m`.
    UnknownRuleKind,
    /// Daily interval missing, not an integer, or outside 1..=400.
    InvalidInterval,
    /// More arguments than the rule kind accepts.
    UnexpectedArgument,
    /// Weekday list missing, or a value outside 1..=7.
    InvalidWeekday,
    /// Day-of-month list missing, or a value outside -31..=-1 and 1..=31.
    InvalidMonthDay,
    /// Month value outside 1..=12.
    InvalidMonth,
}

impl ParseErrorKind {
    const fn missing_hint(self) -> &'static str {
        match self {
            Self::InvalidInterval => "interval required",
            Self::InvalidWeekday => "weekday list required",
            Self::InvalidMonthDay => "day-of-month list required",
            Self::UnknownRuleKind | Self::UnexpectedArgument | Self::InvalidMonth => {
                "missing value"
            }
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownRuleKind => write!(f, "unknown rule kind"),
            Self::InvalidInterval => write!(f, "invalid interval"),
            Self::UnexpectedArgument => write!(f, "unexpected argument"),
            Self::InvalidWeekday => write!(f, "invalid weekday"),
            Self::InvalidMonthDay => write!(f, "invalid day of month"),
            Self::InvalidMonth => write!(f, "invalid month"),
        }
    }
}
