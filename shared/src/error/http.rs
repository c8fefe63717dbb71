//! Error codes for HTTP statuses returned by the backend

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Best-effort code for a non-success HTTP status returned by the backend
    pub fn from_http_status(status: StatusCode) -> Self {
        match status {
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => Self::ValidationFailed,
            StatusCode::UNAUTHORIZED => Self::NotAuthenticated,
            StatusCode::FORBIDDEN => Self::PermissionDenied,
            StatusCode::NOT_FOUND => Self::NotFound,
            StatusCode::CONFLICT => Self::AlreadyExists,
            StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => Self::TimeoutError,
            StatusCode::BAD_GATEWAY | StatusCode::SERVICE_UNAVAILABLE => Self::NetworkError,
            s if s.is_success() => Self::Success,
            s if s.is_server_error() => Self::InternalError,
            _ => Self::Unknown,
        }
    }
}
