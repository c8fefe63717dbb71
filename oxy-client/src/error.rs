//! Client error types

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend rejected the request; `message` is the backend's own text
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Authentication required
    #[error("Authentication required: {0}")]
    Unauthorized(String),

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Local required-field check failed before sending
    #[error("{0}")]
    Validation(#[from] AppError),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Local file error (token store, attachments)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Stable error code for this failure
    pub fn code(&self) -> ErrorCode {
        match self {
            ClientError::Http(e) if e.is_timeout() => ErrorCode::TimeoutError,
            ClientError::Http(_) => ErrorCode::NetworkError,
            ClientError::Api { status, .. } => http::StatusCode::from_u16(*status)
                .map(ErrorCode::from_http_status)
                .unwrap_or(ErrorCode::Unknown),
            ClientError::Unauthorized(_) => ErrorCode::NotAuthenticated,
            ClientError::Forbidden(_) => ErrorCode::PermissionDenied,
            ClientError::NotFound(_) => ErrorCode::NotFound,
            ClientError::Validation(e) => e.code,
            ClientError::InvalidResponse(_) | ClientError::Serialization(_) => {
                ErrorCode::InvalidResponse
            }
            ClientError::Io(_) => ErrorCode::StorageError,
            ClientError::Config(_) => ErrorCode::ConfigError,
        }
    }

    /// True for failures a user can fix by correcting input
    pub fn is_user_correctable(&self) -> bool {
        self.code().category().is_user_correctable()
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_shows_backend_message() {
        let err = ClientError::Api {
            status: 409,
            message: "Serial number already exists".into(),
        };
        assert_eq!(err.to_string(), "Serial number already exists");
        assert_eq!(err.code(), ErrorCode::AlreadyExists);
    }

    #[test]
    fn test_validation_keeps_code() {
        let err = ClientError::from(AppError::required_field("name"));
        assert_eq!(err.to_string(), "name is required");
        assert_eq!(err.code(), ErrorCode::RequiredField);
        assert!(err.is_user_correctable());
    }

    #[test]
    fn test_codes() {
        assert_eq!(
            ClientError::Unauthorized("expired".into()).code(),
            ErrorCode::NotAuthenticated
        );
        assert_eq!(
            ClientError::InvalidResponse("bad".into()).code(),
            ErrorCode::InvalidResponse
        );
        assert_eq!(ClientError::Config("x".into()).code(), ErrorCode::ConfigError);
    }
}
