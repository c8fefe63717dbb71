//! Shared types for the oxygen chamber portal
//!
//! Wire models for every backend domain, auth DTOs, the unified error
//! system and a few pagination / validation helpers used by the client
//! and the CLI.

pub mod client;
pub mod error;
pub mod models;
pub mod response;
pub mod validation;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use response::{PaginatedResponse, Pagination};
