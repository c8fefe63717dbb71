//! Checklist engine
//!
//! Drives one operator through a server-supplied inspection template for a
//! chamber: per-item Pass/Fail/NA answers with conditional photo evidence,
//! the Monthly video, declaration and signature, then a single submission.

mod engine;
mod submission;

pub use engine::{ChecklistEngine, EnginePhase, ItemResponse, TemplateTicket};
pub use submission::{ChecklistSubmission, SubmittedResponse};
pub(crate) use submission::SubmissionBody;

use crate::error::ClientError;
use shared::error::{AppError, ErrorCode};
use shared::models::{CheckType, ItemId};
use thiserror::Error;

/// First rule a checklist breaks, in evaluation order
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChecklistViolation {
    #[error("Checklist template is not loaded")]
    NoTemplate,

    #[error("Please complete item: {title}")]
    Unanswered { item_id: ItemId, title: String },

    #[error("Photo required for failed item: {title}")]
    PhotoRequired { item_id: ItemId, title: String },

    #[error("Monthly checklist requires video upload")]
    VideoRequired,

    #[error("You must accept the declaration")]
    DeclarationRequired,

    #[error("Signature name is required")]
    SignatureRequired,
}

impl ChecklistViolation {
    pub fn code(&self) -> ErrorCode {
        match self {
            ChecklistViolation::NoTemplate => ErrorCode::TemplateNotLoaded,
            ChecklistViolation::Unanswered { .. } => ErrorCode::ItemUnanswered,
            ChecklistViolation::PhotoRequired { .. } => ErrorCode::PhotoRequired,
            ChecklistViolation::VideoRequired => ErrorCode::VideoRequired,
            ChecklistViolation::DeclarationRequired => ErrorCode::DeclarationRequired,
            ChecklistViolation::SignatureRequired => ErrorCode::SignatureRequired,
        }
    }

    /// Item the violation points at, if any
    pub fn item_id(&self) -> Option<&ItemId> {
        match self {
            ChecklistViolation::Unanswered { item_id, .. }
            | ChecklistViolation::PhotoRequired { item_id, .. } => Some(item_id),
            _ => None,
        }
    }
}

impl From<ChecklistViolation> for AppError {
    fn from(v: ChecklistViolation) -> Self {
        let err = AppError::with_message(v.code(), v.to_string());
        match v.item_id() {
            Some(id) => err.with_detail("itemId", id.to_string()),
            None => err,
        }
    }
}

/// Checklist engine errors
#[derive(Debug, Error)]
pub enum ChecklistError {
    /// Template fetch failed (network or parse)
    #[error("Failed to load checklist template: {0}")]
    TemplateLoad(#[source] ClientError),

    /// A newer template load was started; this result was discarded
    #[error("Discarded stale {0} template load")]
    StaleTemplate(CheckType),

    #[error("No checklist template loaded")]
    NoTemplate,

    #[error("Item {0} is not part of the loaded checklist")]
    UnknownItem(ItemId),

    #[error("Item {0} has no result yet")]
    NotAnswered(ItemId),

    #[error("{0}")]
    Invalid(#[from] ChecklistViolation),

    /// Backend rejected or never received the submission; state is kept
    #[error("{0}")]
    Submit(#[source] ClientError),
}

impl ChecklistError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ChecklistError::TemplateLoad(_) | ChecklistError::StaleTemplate(_) => {
                ErrorCode::TemplateLoadFailed
            }
            ChecklistError::NoTemplate => ErrorCode::TemplateNotLoaded,
            ChecklistError::UnknownItem(_) => ErrorCode::UnknownChecklistItem,
            ChecklistError::NotAnswered(_) => ErrorCode::ItemUnanswered,
            ChecklistError::Invalid(v) => v.code(),
            ChecklistError::Submit(_) => ErrorCode::SubmissionFailed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_messages() {
        let v = ChecklistViolation::Unanswered {
            item_id: ItemId::Numeric(2),
            title: "Door seal".into(),
        };
        assert_eq!(v.to_string(), "Please complete item: Door seal");
        let v = ChecklistViolation::PhotoRequired {
            item_id: ItemId::Numeric(2),
            title: "Door seal".into(),
        };
        assert_eq!(v.to_string(), "Photo required for failed item: Door seal");
        assert_eq!(
            ChecklistViolation::VideoRequired.to_string(),
            "Monthly checklist requires video upload"
        );
        assert_eq!(
            ChecklistViolation::DeclarationRequired.to_string(),
            "You must accept the declaration"
        );
        assert_eq!(
            ChecklistViolation::SignatureRequired.to_string(),
            "Signature name is required"
        );
    }

    #[test]
    fn test_violation_into_app_error() {
        let err: AppError = ChecklistViolation::PhotoRequired {
            item_id: ItemId::Numeric(7),
            title: "Valves".into(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::PhotoRequired);
        assert_eq!(err.details.unwrap().get("itemId").unwrap(), "7");
    }

    #[test]
    fn test_error_codes() {
        let err = ChecklistError::from(ChecklistViolation::VideoRequired);
        assert_eq!(err.code(), ErrorCode::VideoRequired);
        assert_eq!(err.to_string(), "Monthly checklist requires video upload");
        assert_eq!(
            ChecklistError::UnknownItem(ItemId::Numeric(3)).code(),
            ErrorCode::UnknownChecklistItem
        );
    }
}
