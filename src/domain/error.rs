use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Required field missing: {0}")]
    MissingField(&'static str),

    #[error("Invalid project state: {0}")]
    InvalidState(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(i64),
}

pub type DomainResult<T> = Result<T, DomainError>;
