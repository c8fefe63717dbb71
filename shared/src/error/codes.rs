//! Unified error codes for the portal
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Checklist errors
//! - 4xxx: Issue errors
//! - 5xxx: Resource errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for compact serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// Session has expired
    SessionExpired = 1005,
    /// Signup was rejected
    SignupRejected = 1006,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Specific role required
    RoleRequired = 2002,
    /// Admin role required
    AdminRequired = 2003,
    /// Role name is not one of the known roles
    UnknownRole = 2004,

    // ==================== 3xxx: Checklist ====================
    /// No checklist template has been loaded
    TemplateNotLoaded = 3001,
    /// Checklist template could not be fetched or parsed
    TemplateLoadFailed = 3002,
    /// A checklist item has no response
    ItemUnanswered = 3003,
    /// A failed item requires photo evidence
    PhotoRequired = 3004,
    /// Monthly checklist requires a video
    VideoRequired = 3005,
    /// Declaration was not accepted
    DeclarationRequired = 3006,
    /// Signature name is missing
    SignatureRequired = 3007,
    /// Item id is not part of the active template
    UnknownChecklistItem = 3008,
    /// Checklist submission was rejected or failed
    SubmissionFailed = 3009,

    // ==================== 4xxx: Issue ====================
    /// Issue not found
    IssueNotFound = 4001,
    /// Issue already has an engineer assigned
    IssueAlreadyAssigned = 4002,
    /// Engineer is not in the known engineer list
    EngineerNotFound = 4003,
    /// Issue report was rejected or failed
    IssueReportFailed = 4004,

    // ==================== 5xxx: Resource ====================
    /// Customer not found
    CustomerNotFound = 5001,
    /// Chamber not found
    ChamberNotFound = 5002,
    /// User not found
    UserNotFound = 5003,
    /// Chamber serial number already exists
    ChamberSerialExists = 5004,
    /// Username or email already exists
    UserExists = 5005,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Unexpected response body from backend
    InvalidResponse = 9002,
    /// Network error
    NetworkError = 9003,
    /// Timeout error
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
    /// Local storage error (token file)
    StorageError = 9006,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::InvalidCredentials => "Login failed. Please check your credentials.",
            ErrorCode::TokenExpired => "Authentication token has expired",
            ErrorCode::TokenInvalid => "Authentication token is invalid",
            ErrorCode::SessionExpired => "Session has expired",
            ErrorCode::SignupRejected => "Signup failed",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::RoleRequired => "Specific role is required",
            ErrorCode::AdminRequired => "Administrator role is required",
            ErrorCode::UnknownRole => "Unknown role",

            // Checklist
            ErrorCode::TemplateNotLoaded => "No checklist template loaded",
            ErrorCode::TemplateLoadFailed => "Failed to load checklist template",
            ErrorCode::ItemUnanswered => "Checklist item is not completed",
            ErrorCode::PhotoRequired => "Photo required for failed item",
            ErrorCode::VideoRequired => "Monthly checklist requires video upload",
            ErrorCode::DeclarationRequired => "You must accept the declaration",
            ErrorCode::SignatureRequired => "Signature name is required",
            ErrorCode::UnknownChecklistItem => "Item is not part of the checklist",
            ErrorCode::SubmissionFailed => "Submission failed",

            // Issue
            ErrorCode::IssueNotFound => "Issue not found",
            ErrorCode::IssueAlreadyAssigned => "Issue is already assigned",
            ErrorCode::EngineerNotFound => "Engineer not found",
            ErrorCode::IssueReportFailed => "Failed to report issue.",

            // Resource
            ErrorCode::CustomerNotFound => "Customer not found",
            ErrorCode::ChamberNotFound => "Chamber not found",
            ErrorCode::UserNotFound => "User not found",
            ErrorCode::ChamberSerialExists => "Chamber serial number already exists",
            ErrorCode::UserExists => "User already exists",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::InvalidResponse => "Invalid response from server",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Request timed out",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::StorageError => "Local storage error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),
            1005 => Ok(ErrorCode::SessionExpired),
            1006 => Ok(ErrorCode::SignupRejected),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2002 => Ok(ErrorCode::RoleRequired),
            2003 => Ok(ErrorCode::AdminRequired),
            2004 => Ok(ErrorCode::UnknownRole),

            // Checklist
            3001 => Ok(ErrorCode::TemplateNotLoaded),
            3002 => Ok(ErrorCode::TemplateLoadFailed),
            3003 => Ok(ErrorCode::ItemUnanswered),
            3004 => Ok(ErrorCode::PhotoRequired),
            3005 => Ok(ErrorCode::VideoRequired),
            3006 => Ok(ErrorCode::DeclarationRequired),
            3007 => Ok(ErrorCode::SignatureRequired),
            3008 => Ok(ErrorCode::UnknownChecklistItem),
            3009 => Ok(ErrorCode::SubmissionFailed),

            // Issue
            4001 => Ok(ErrorCode::IssueNotFound),
            4002 => Ok(ErrorCode::IssueAlreadyAssigned),
            4003 => Ok(ErrorCode::EngineerNotFound),
            4004 => Ok(ErrorCode::IssueReportFailed),

            // Resource
            5001 => Ok(ErrorCode::CustomerNotFound),
            5002 => Ok(ErrorCode::ChamberNotFound),
            5003 => Ok(ErrorCode::UserNotFound),
            5004 => Ok(ErrorCode::ChamberSerialExists),
            5005 => Ok(ErrorCode::UserExists),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::InvalidResponse),
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),
            9006 => Ok(ErrorCode::StorageError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::RequiredField.code(), 7);
        assert_eq!(ErrorCode::NotAuthenticated.code(), 1001);
        assert_eq!(ErrorCode::PermissionDenied.code(), 2001);
        assert_eq!(ErrorCode::PhotoRequired.code(), 3004);
        assert_eq!(ErrorCode::VideoRequired.code(), 3005);
        assert_eq!(ErrorCode::IssueAlreadyAssigned.code(), 4002);
        assert_eq!(ErrorCode::ChamberNotFound.code(), 5002);
        assert_eq!(ErrorCode::NetworkError.code(), 9003);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::Unknown.is_success());
        assert!(!ErrorCode::SubmissionFailed.is_success());
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(0), Ok(ErrorCode::Success));
        assert_eq!(ErrorCode::try_from(3003), Ok(ErrorCode::ItemUnanswered));
        assert_eq!(ErrorCode::try_from(4003), Ok(ErrorCode::EngineerNotFound));
        assert_eq!(ErrorCode::try_from(9006), Ok(ErrorCode::StorageError));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(42), Err(InvalidErrorCode(42)));
        assert_eq!(ErrorCode::try_from(6001), Err(InvalidErrorCode(6001)));
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&ErrorCode::PhotoRequired).unwrap();
        assert_eq!(json, "3004");
    }

    #[test]
    fn test_deserialize() {
        let code: ErrorCode = serde_json::from_str("3006").unwrap();
        assert_eq!(code, ErrorCode::DeclarationRequired);
    }

    #[test]
    fn test_deserialize_invalid() {
        let result: Result<ErrorCode, _> = serde_json::from_str("7777");
        assert!(result.is_err());
    }

    #[test]
    fn test_message() {
        assert_eq!(
            ErrorCode::VideoRequired.message(),
            "Monthly checklist requires video upload"
        );
        assert_eq!(
            ErrorCode::SignatureRequired.message(),
            "Signature name is required"
        );
    }

    #[test]
    fn test_roundtrip() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::SignupRejected,
            ErrorCode::UnknownRole,
            ErrorCode::UnknownChecklistItem,
            ErrorCode::IssueReportFailed,
            ErrorCode::UserExists,
            ErrorCode::InvalidResponse,
        ];
        for code in codes {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }
}
