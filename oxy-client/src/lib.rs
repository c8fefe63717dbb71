//! Oxy Client - portal core for the oxygen chamber maintenance backend
//!
//! Provides the typed REST client, the persisted session, the role guard
//! and the operator/admin workflows (checklist engine, issue board,
//! dashboards) on top of it.

pub mod api;
pub mod attachment;
pub mod checklist;
pub mod config;
pub mod credential;
pub mod dashboard;
pub mod error;
pub mod guard;
pub mod http;
pub mod issues;
pub mod session;

pub use api::{AdminApi, AuthApi, ChamberApi, ChecklistApi, IssueApi, ProfileApi};
pub use attachment::Attachment;
pub use checklist::{
    ChecklistEngine, ChecklistError, ChecklistSubmission, ChecklistViolation, EnginePhase,
    ItemResponse, TemplateTicket,
};
pub use config::ClientConfig;
pub use credential::{StoredToken, TokenStore};
pub use dashboard::{DashboardSummary, load_dashboard};
pub use error::{ClientError, ClientResult};
pub use guard::{Access, RouteTable};
pub use http::NetworkHttpClient;
pub use issues::{AssignError, IssueBoard, IssueFilter, IssueReport, IssueScope};
pub use session::Session;

// Re-export shared types for convenience
pub use shared::client::{LoginRequest, LoginResponse, SignupRequest, SignupResponse};
pub use shared::models::{Role, User};
