use opdiag_core::PayoffError;
use thiserror::Error;

/// Errors crossing the rendering boundary
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Payoff error: {0}")]
    Payoff(#[from] PayoffError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization failed: {0}")]
    Serialization(String),
}

pub type RenderResult<T> = std::result::Result<T, RenderError>;
