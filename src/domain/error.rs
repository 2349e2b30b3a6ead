use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Priority must be in range of 1-4, got {0}")]
    PriorityOutOfRange(u8),

    #[error("Invalid date expression: {0}")]
    InvalidDate(String),

    #[error("Malformed {resource} payload: {reason}")]
    MalformedPayload {
        resource: &'static str,
        reason: String,
    },
}

pub type DomainResult<T> = Result<T, DomainError>;
