use thiserror::Error;

use crate::rule::advance::AdvanceError;
use crate::rule::parse::ParseError;

/// Recurrence rule parsing and evaluation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("Invalid rule: {0}")]
    Parse(#[from] ParseError),

    #[error("Cannot compute next date: {0}")]
    Advance(#[from] AdvanceError),
}

pub type RuleResult<T> = std::result::Result<T, RuleError>;
