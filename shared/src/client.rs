//! Auth DTOs shared between the client and the CLI
//!
//! Request/response types of the `/auth` endpoints.

use crate::error::AppError;
use crate::models::User;
use crate::validation::{MAX_NAME_LEN, MAX_PASSWORD_LEN, validate_email, validate_required_text};
use serde::{Deserialize, Serialize};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_required_text(&self.email, "email", MAX_NAME_LEN)?;
        validate_required_text(&self.password, "password", MAX_PASSWORD_LEN)
    }
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Signup request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl SignupRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_required_text(&self.username, "username", MAX_NAME_LEN)?;
        validate_email(&self.email, "email")?;
        validate_required_text(&self.password, "password", MAX_PASSWORD_LEN)
    }
}

/// Signup response; the backend answers with a message and possibly the user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignupResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

/// Generic `{ "message": ... }` acknowledgement
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}
