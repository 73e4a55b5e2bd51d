//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// These are recoverable input failures: the caller reports them and the
/// aggregate is left untouched. Storage concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Required input was empty.
    #[error("{0}")]
    Validation(String),

    /// Input that should be an integer could not be parsed as one.
    #[error("{0}")]
    Parse(String),

    /// A well-formed value fell outside the accepted range.
    #[error("{0}")]
    Range(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn range(msg: impl Into<String>) -> Self {
        Self::Range(msg.into())
    }
}
