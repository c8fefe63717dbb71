//! Issue workflows: reporting faults and assigning engineers

mod board;
mod report;

pub use board::{IssueBoard, IssueScope};
pub use report::IssueReport;

use crate::error::ClientError;
use shared::error::ErrorCode;
use shared::models::{Issue, IssueCategory, IssueStatus, Severity};
use thiserror::Error;

/// Why an assignment was refused or failed
#[derive(Debug, Error)]
pub enum AssignError {
    #[error("Issue {0} is not in the current list")]
    UnknownIssue(i64),

    #[error("Issue {issue_id} is already assigned to {engineer}")]
    AlreadyAssigned { issue_id: i64, engineer: String },

    #[error("Engineer {0} is not in the engineer list")]
    UnknownEngineer(i64),

    /// The assign request itself failed; the list was not refreshed
    #[error("Failed to assign engineer: {0}")]
    Request(#[source] ClientError),

    /// Assignment went through but the follow-up fetch failed
    #[error("Engineer assigned, but refreshing issues failed: {0}")]
    Refresh(#[source] ClientError),
}

impl AssignError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AssignError::UnknownIssue(_) => ErrorCode::IssueNotFound,
            AssignError::AlreadyAssigned { .. } => ErrorCode::IssueAlreadyAssigned,
            AssignError::UnknownEngineer(_) => ErrorCode::EngineerNotFound,
            AssignError::Request(e) | AssignError::Refresh(e) => e.code(),
        }
    }
}

/// List filter; unset fields match everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueFilter {
    pub status: Option<IssueStatus>,
    pub severity: Option<Severity>,
    pub category: Option<IssueCategory>,
    /// Only issues without an engineer
    pub unassigned_only: bool,
}

impl IssueFilter {
    pub fn matches(&self, issue: &Issue) -> bool {
        self.status.is_none_or(|s| issue.status == s)
            && self.severity.is_none_or(|s| issue.severity == s)
            && self.category.is_none_or(|c| issue.category == c)
            && (!self.unassigned_only || !issue.is_assigned())
    }
}
