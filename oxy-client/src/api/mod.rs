//! Resource services
//!
//! One trait per backend domain. Every method is a direct pass-through to
//! one endpoint: no caching, no optimistic updates. Create/update payloads
//! run their required-field checks before anything is sent.
//!
//! [`NetworkHttpClient`](crate::NetworkHttpClient) implements all of them;
//! workflows take the narrowest trait they need so tests can swap in fakes.

mod admin;
mod auth;
mod ops;
mod profile;

use crate::attachment::Attachment;
use crate::checklist::ChecklistSubmission;
use crate::error::ClientResult;
use crate::issues::IssueReport;
use async_trait::async_trait;
use shared::client::{LoginRequest, LoginResponse, MessageResponse, SignupRequest, SignupResponse};
use shared::models::{
    Chamber, ChamberCreate, ChamberUpdate, CheckType, ChecklistTemplate, Customer,
    CustomerCreate, CustomerUpdate, DashboardStats, Issue, ProfileUpdate, ProfileView,
    SubmissionReceipt, SubmissionRecord, User, UserCreate, UserUpdate,
};

/// `/auth` endpoints plus access to the bearer token they produce
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse>;
    async fn signup(&self, request: &SignupRequest) -> ClientResult<SignupResponse>;
    /// Resolve the identity behind the current token
    async fn me(&self) -> ClientResult<User>;
    fn token(&self) -> Option<String>;
    fn set_token(&self, token: Option<String>);
}

/// `/admin` customer, chamber and user management
#[async_trait]
pub trait AdminApi: Send + Sync {
    async fn customers(&self) -> ClientResult<Vec<Customer>>;
    async fn create_customer(&self, customer: &CustomerCreate) -> ClientResult<Customer>;
    async fn update_customer(&self, id: i64, update: &CustomerUpdate) -> ClientResult<Customer>;
    async fn delete_customer(&self, id: i64) -> ClientResult<()>;

    async fn chambers(&self) -> ClientResult<Vec<Chamber>>;
    async fn create_chamber(&self, chamber: &ChamberCreate) -> ClientResult<Chamber>;
    async fn update_chamber(&self, id: i64, update: &ChamberUpdate) -> ClientResult<Chamber>;
    async fn delete_chamber(&self, id: i64) -> ClientResult<()>;

    async fn users(&self) -> ClientResult<Vec<User>>;
    async fn create_user(&self, user: &UserCreate) -> ClientResult<User>;
    async fn update_user(&self, id: i64, update: &UserUpdate) -> ClientResult<User>;
    async fn delete_user(&self, id: i64) -> ClientResult<()>;

    async fn dashboard_stats(&self) -> ClientResult<DashboardStats>;
}

/// `/ops/checklists`
#[async_trait]
pub trait ChecklistApi: Send + Sync {
    async fn checklist_template(&self, check_type: CheckType) -> ClientResult<ChecklistTemplate>;
    async fn submit_checklist(
        &self,
        submission: &ChecklistSubmission,
    ) -> ClientResult<SubmissionReceipt>;
    async fn my_submissions(&self) -> ClientResult<Vec<SubmissionRecord>>;
}

/// `/ops/chambers`, scoped server-side to the caller
#[async_trait]
pub trait ChamberApi: Send + Sync {
    async fn my_chambers(&self) -> ClientResult<Vec<Chamber>>;
    async fn chamber(&self, id: i64) -> ClientResult<Chamber>;
}

/// `/ops/issues` and the engineer directory used for assignment
#[async_trait]
pub trait IssueApi: Send + Sync {
    async fn report_issue(&self, report: &IssueReport) -> ClientResult<MessageResponse>;
    /// Issues visible to the caller (`GET /ops/issues`)
    async fn issues(&self) -> ClientResult<Vec<Issue>>;
    /// Issues for the caller's work queue (`GET /ops/issues/my`)
    async fn my_issues(&self) -> ClientResult<Vec<Issue>>;
    async fn engineers(&self) -> ClientResult<Vec<User>>;
    async fn assign_issue(&self, issue_id: i64, engineer_id: i64) -> ClientResult<MessageResponse>;
}

/// `/profile`
#[async_trait]
pub trait ProfileApi: Send + Sync {
    async fn profile(&self) -> ClientResult<ProfileView>;
    async fn update_profile(&self, update: &ProfileUpdate) -> ClientResult<ProfileView>;
    async fn upload_profile_image(&self, image: &Attachment) -> ClientResult<ProfileView>;
}
