//! Issue Model

use super::chamber::ChamberRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fault category picked when reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IssueCategory {
    Leak,
    Zip,
    Door,
    Window,
    Valves,
    Gauge,
    Electrical,
    Noise,
    #[default]
    Other,
}

impl IssueCategory {
    pub const ALL: [IssueCategory; 9] = [
        IssueCategory::Leak,
        IssueCategory::Zip,
        IssueCategory::Door,
        IssueCategory::Window,
        IssueCategory::Valves,
        IssueCategory::Gauge,
        IssueCategory::Electrical,
        IssueCategory::Noise,
        IssueCategory::Other,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            IssueCategory::Leak => "Leak",
            IssueCategory::Zip => "Zip",
            IssueCategory::Door => "Door",
            IssueCategory::Window => "Window",
            IssueCategory::Valves => "Valves",
            IssueCategory::Gauge => "Gauge",
            IssueCategory::Electrical => "Electrical",
            IssueCategory::Noise => "Noise",
            IssueCategory::Other => "Other",
        }
    }
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IssueCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IssueCategory::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown issue category: {s}"))
    }
}

/// Severity, ordered from least to most severe
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum Severity {
    Info,
    #[default]
    Minor,
    Urgent,
    SafetyCritical,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Info,
        Severity::Minor,
        Severity::Urgent,
        Severity::SafetyCritical,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Minor => "Minor",
            Severity::Urgent => "Urgent",
            Severity::SafetyCritical => "SafetyCritical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s.chars().filter(|c| !c.is_whitespace() && *c != '-').collect();
        Severity::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| format!("unknown severity: {s}"))
    }
}

/// Workflow status; values the client does not know are kept as `Unknown`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IssueStatus {
    #[default]
    New,
    InProgress,
    Resolved,
    Closed,
    #[serde(other)]
    Unknown,
}

impl IssueStatus {
    pub const fn name(&self) -> &'static str {
        match self {
            IssueStatus::New => "New",
            IssueStatus::InProgress => "InProgress",
            IssueStatus::Resolved => "Resolved",
            IssueStatus::Closed => "Closed",
            IssueStatus::Unknown => "Unknown",
        }
    }

    /// Still needs engineering work
    pub const fn is_open(&self) -> bool {
        !matches!(self, IssueStatus::Resolved | IssueStatus::Closed)
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IssueStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        [
            IssueStatus::New,
            IssueStatus::InProgress,
            IssueStatus::Resolved,
            IssueStatus::Closed,
        ]
        .into_iter()
        .find(|v| v.name().eq_ignore_ascii_case(&wanted))
        .ok_or_else(|| format!("unknown issue status: {s}"))
    }
}

/// Engineer attached to an issue
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EngineerRef {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Reported fault against a chamber
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub issue_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: IssueCategory,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default)]
    pub status: IssueStatus,
    #[serde(default)]
    pub do_not_operate_recommended: bool,
    #[serde(default, rename = "Chamber")]
    pub chamber: Option<ChamberRef>,
    #[serde(default)]
    pub engineer: Option<EngineerRef>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Issue {
    /// Username of the assigned engineer, if any
    pub fn assignee(&self) -> Option<&str> {
        self.engineer
            .as_ref()
            .and_then(|e| e.username.as_deref())
            .filter(|u| !u.is_empty())
    }

    pub fn is_assigned(&self) -> bool {
        self.assignee().is_some()
    }
}

/// `POST /ops/issues/assign` body
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AssignIssueRequest {
    pub issue_id: i64,
    pub engineer_id: i64,
}
