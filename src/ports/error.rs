use std::path::PathBuf;

use thiserror::Error;

use crate::domain::DomainError;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Rate limit exceeded")]
    RateLimited {
        status: u16,
        retry_after: Option<u64>,
    },

    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        message: String,
        code: Option<String>,
    },

    #[error("Unexpected HTTP status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Attachment not found: {}", .0.display())]
    AttachmentNotFound(PathBuf),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ClientError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClientError::RateLimited { status, .. }
            | ClientError::Api { status, .. }
            | ClientError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The server-provided message for API errors, the display text otherwise.
    pub fn message(&self) -> String {
        match self {
            ClientError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_and_message() {
        let err = ClientError::Api {
            status: 401,
            message: "Token invalid".to_string(),
            code: Some("OAUTH_025".to_string()),
        };
        assert_eq!(err.status_code(), Some(401));
        assert_eq!(err.message(), "Token invalid");
        assert_eq!(err.to_string(), "API error (401): Token invalid");

        let err = ClientError::RateLimited { status: 429, retry_after: None };
        assert_eq!(err.status_code(), Some(429));
        assert_eq!(err.message(), "Rate limit exceeded");
    }

    #[test]
    fn test_domain_errors_carry_no_status() {
        let err: ClientError = DomainError::PriorityOutOfRange(7).into();
        assert_eq!(err.status_code(), None);
        assert_eq!(err.message(), "Priority must be in range of 1-4, got 7");
    }
}
