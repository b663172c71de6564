use thiserror::Error;

/// Application-level errors (command-line layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] tickler_service::error::ServiceError),

    #[error(transparent)]
    RuleError(#[from] tickler_rule::error::RuleError),

    #[error(transparent)]
    CoreError(#[from] tickler_core::error::CoreError),

    #[error("Invalid task JSON: {0}")]
    TaskJson(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
