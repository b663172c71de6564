use thiserror::Error;

use crate::rule::core::{CalendarDate, DateError};

/// Failures while computing a next occurrence from a valid rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdvanceError {
    #[error("malformed anchor date `{text}`: {source}")]
    MalformedAnchor {
        text: String,
        #[source]
        source: DateError,
    },

    #[error("malformed reference date `{text}`: {source}")]
    MalformedReference {
        text: String,
        #[source]
        source: DateError,
    },

    #[error("no occurrence of `{rule}` within {years} years from {from}")]
    SearchExhausted {
        rule: String,
        from: CalendarDate,
        years: u16,
    },

    #[error("next occurrence falls after 99991231")]
    OutOfRange,
}

pub type AdvanceResult<T> = std::result::Result<T, AdvanceError>;
