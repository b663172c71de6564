use thiserror::Error;

use tickler_core::error::CoreError;
use tickler_rule::error::RuleError;
use tickler_rule::rule::advance::AdvanceError;
use tickler_rule::rule::parse::ParseError;

/// Service layer errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error(transparent)]
    RuleError(#[from] RuleError),

    #[error(transparent)]
    CoreError(#[from] CoreError),

    #[error("Task title is required")]
    MissingTitle,

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

impl From<ParseError> for ServiceError {
    fn from(err: ParseError) -> Self {
        Self::RuleError(err.into())
    }
}

impl From<AdvanceError> for ServiceError {
    fn from(err: AdvanceError) -> Self {
        Self::RuleError(err.into())
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
