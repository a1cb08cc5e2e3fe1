use thiserror::Error;

/// Domain-level errors for building and composing payoff positions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PayoffError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Type mismatch: {0}")]
    TypeMismatch(String),
}

pub type PayoffResult<T> = std::result::Result<T, PayoffError>;
