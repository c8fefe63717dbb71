use super::{ChamberApi, ChecklistApi, IssueApi};
use crate::checklist::{ChecklistSubmission, SubmissionBody};
use crate::error::ClientResult;
use crate::http::NetworkHttpClient;
use crate::issues::IssueReport;
use async_trait::async_trait;
use shared::client::MessageResponse;
use shared::models::{
    AssignIssueRequest, Chamber, CheckType, ChecklistTemplate, Issue, SubmissionReceipt,
    SubmissionRecord, User,
};

#[async_trait]
impl ChecklistApi for NetworkHttpClient {
    async fn checklist_template(&self, check_type: CheckType) -> ClientResult<ChecklistTemplate> {
        self.get(&format!("/ops/checklists/template/{check_type}"))
            .await
    }

    async fn submit_checklist(
        &self,
        submission: &ChecklistSubmission,
    ) -> ClientResult<SubmissionReceipt> {
        const PATH: &str = "/ops/checklists/submit";
        match submission.encode()? {
            SubmissionBody::Json(body) => self.post(PATH, &body).await,
            SubmissionBody::Multipart(form) => self.post_multipart(PATH, form).await,
        }
    }

    async fn my_submissions(&self) -> ClientResult<Vec<SubmissionRecord>> {
        self.get("/ops/checklists/my-submissions").await
    }
}

#[async_trait]
impl ChamberApi for NetworkHttpClient {
    async fn my_chambers(&self) -> ClientResult<Vec<Chamber>> {
        self.get("/ops/chambers").await
    }

    async fn chamber(&self, id: i64) -> ClientResult<Chamber> {
        self.get(&format!("/ops/chambers/{id}")).await
    }
}

#[async_trait]
impl IssueApi for NetworkHttpClient {
    async fn report_issue(&self, report: &IssueReport) -> ClientResult<MessageResponse> {
        report.validate()?;
        self.post_multipart("/ops/issues", report.to_form()?).await
    }

    async fn issues(&self) -> ClientResult<Vec<Issue>> {
        self.get("/ops/issues").await
    }

    async fn my_issues(&self) -> ClientResult<Vec<Issue>> {
        self.get("/ops/issues/my").await
    }

    async fn engineers(&self) -> ClientResult<Vec<User>> {
        self.get("/admin/users/engineers").await
    }

    async fn assign_issue(&self, issue_id: i64, engineer_id: i64) -> ClientResult<MessageResponse> {
        let body = AssignIssueRequest {
            issue_id,
            engineer_id,
        };
        self.post("/ops/issues/assign", &body).await
    }
}
