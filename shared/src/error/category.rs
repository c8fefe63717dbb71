//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Authentication errors
/// - 2xxx: Permission errors
/// - 3xxx: Checklist errors
/// - 4xxx: Issue errors
/// - 5xxx: Resource errors
/// - everything else: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Authentication errors (1xxx)
    Auth,
    /// Permission errors (2xxx)
    Permission,
    /// Checklist errors (3xxx)
    Checklist,
    /// Issue errors (4xxx)
    Issue,
    /// Resource errors (5xxx)
    Resource,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            2000..3000 => Self::Permission,
            3000..4000 => Self::Checklist,
            4000..5000 => Self::Issue,
            5000..6000 => Self::Resource,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Permission => "permission",
            Self::Checklist => "checklist",
            Self::Issue => "issue",
            Self::Resource => "resource",
            Self::System => "system",
        }
    }

    /// Whether errors of this category are corrected by the user rather
    /// than by retrying the request
    pub fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            Self::General | Self::Checklist | Self::Issue | Self::Resource
        )
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
