use super::{AssignError, IssueFilter};
use crate::api::IssueApi;
use crate::error::ClientResult;
use shared::models::{Issue, User};
use shared::response::PaginatedResponse;
use tracing::info;

/// Which issue collection a board shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IssueScope {
    /// `GET /ops/issues`
    All,
    /// `GET /ops/issues/my`, scoped server-side to the caller
    #[default]
    Mine,
}

/// Fetched issues and engineers behind the assignment view
///
/// Holds only what the last fetch returned. Every mutation is followed by a
/// full re-fetch; nothing is patched locally.
pub struct IssueBoard<B: IssueApi> {
    api: B,
    scope: IssueScope,
    issues: Vec<Issue>,
    engineers: Vec<User>,
}

impl<B: IssueApi> IssueBoard<B> {
    pub fn new(api: B, scope: IssueScope) -> Self {
        Self {
            api,
            scope,
            issues: Vec::new(),
            engineers: Vec::new(),
        }
    }

    pub fn scope(&self) -> IssueScope {
        self.scope
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn engineers(&self) -> &[User] {
        &self.engineers
    }

    pub fn issue(&self, issue_id: i64) -> Option<&Issue> {
        self.issues.iter().find(|i| i.issue_id == issue_id)
    }

    /// Re-fetch issues and engineers
    pub async fn refresh(&mut self) -> ClientResult<()> {
        self.refresh_issues().await?;
        self.engineers = self.api.engineers().await?;
        Ok(())
    }

    /// Re-fetch only the issue list
    pub async fn refresh_issues(&mut self) -> ClientResult<()> {
        self.issues = match self.scope {
            IssueScope::All => self.api.issues().await?,
            IssueScope::Mine => self.api.my_issues().await?,
        };
        Ok(())
    }

    /// Whether the view offers assignment for this issue
    ///
    /// Based only on the last fetched list, not on the server's current state.
    pub fn can_assign(&self, issue_id: i64) -> bool {
        self.issue(issue_id).is_some_and(|i| !i.is_assigned())
    }

    /// Attach an engineer from the fetched list to an unassigned issue, then
    /// re-fetch the issue list
    pub async fn assign(&mut self, issue_id: i64, engineer_id: i64) -> Result<(), AssignError> {
        let issue = self
            .issue(issue_id)
            .ok_or(AssignError::UnknownIssue(issue_id))?;
        if let Some(engineer) = issue.assignee() {
            return Err(AssignError::AlreadyAssigned {
                issue_id,
                engineer: engineer.to_string(),
            });
        }
        let engineer = self
            .engineers
            .iter()
            .find(|e| e.id == engineer_id)
            .ok_or(AssignError::UnknownEngineer(engineer_id))?;
        info!(issue_id, engineer_id, engineer = %engineer.username, "assigning engineer");

        self.api
            .assign_issue(issue_id, engineer_id)
            .await
            .map_err(AssignError::Request)?;
        self.refresh_issues().await.map_err(AssignError::Refresh)
    }

    /// Issues matching `filter`, in fetched order
    pub fn filtered(&self, filter: &IssueFilter) -> Vec<&Issue> {
        self.issues.iter().filter(|i| filter.matches(i)).collect()
    }

    /// One page (1-based) of the filtered list
    pub fn page(&self, filter: &IssueFilter, page: u32, per_page: u32) -> PaginatedResponse<Issue> {
        let matching: Vec<Issue> = self
            .issues
            .iter()
            .filter(|i| filter.matches(i))
            .cloned()
            .collect();
        PaginatedResponse::from_items(matching, page, per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::issues::IssueReport;
    use async_trait::async_trait;
    use shared::client::MessageResponse;
    use shared::models::{EngineerRef, IssueStatus, Severity};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Backend {
        issues: Vec<Issue>,
        engineers: Vec<User>,
        assign_calls: Vec<(i64, i64)>,
        fetches: usize,
        fail_assign: bool,
    }

    #[derive(Clone, Default)]
    struct FakeIssues(Arc<Mutex<Backend>>);

    fn user(id: i64, name: &str) -> User {
        serde_json::from_value(serde_json::json!({
            "id": id, "username": name, "Role": {"name": "Engineer"}
        }))
        .unwrap()
    }

    fn issue(id: i64, severity: Severity) -> Issue {
        serde_json::from_value(serde_json::json!({
            "issueId": id,
            "title": format!("Issue {id}"),
            "severity": severity.name(),
            "status": "New",
            "engineer": null
        }))
        .unwrap()
    }

    #[async_trait]
    impl IssueApi for FakeIssues {
        async fn report_issue(&self, _report: &IssueReport) -> ClientResult<MessageResponse> {
            Ok(MessageResponse::default())
        }

        async fn issues(&self) -> ClientResult<Vec<Issue>> {
            let mut b = self.0.lock().unwrap();
            b.fetches += 1;
            Ok(b.issues.clone())
        }

        async fn my_issues(&self) -> ClientResult<Vec<Issue>> {
            self.issues().await
        }

        async fn engineers(&self) -> ClientResult<Vec<User>> {
            Ok(self.0.lock().unwrap().engineers.clone())
        }

        async fn assign_issue(&self, issue_id: i64, engineer_id: i64) -> ClientResult<MessageResponse> {
            let mut b = self.0.lock().unwrap();
            if b.fail_assign {
                return Err(ClientError::Api {
                    status: 500,
                    message: "assignment store offline".into(),
                });
            }
            b.assign_calls.push((issue_id, engineer_id));
            let engineer = b.engineers.iter().find(|e| e.id == engineer_id).cloned();
            if let Some(issue) = b.issues.iter_mut().find(|i| i.issue_id == issue_id) {
                issue.engineer = engineer.map(|e| EngineerRef {
                    id: Some(e.id),
                    username: Some(e.username),
                    email: None,
                });
                issue.status = IssueStatus::InProgress;
            }
            Ok(MessageResponse::default())
        }
    }

    fn backend() -> FakeIssues {
        let fake = FakeIssues::default();
        {
            let mut b = fake.0.lock().unwrap();
            b.issues = vec![issue(5, Severity::Urgent)];
            b.engineers = vec![user(7, "E7"), user(8, "E8")];
        }
        fake
    }

    #[tokio::test]
    async fn test_assign_then_refetch_shows_engineer() {
        let api = backend();
        let mut board = IssueBoard::new(api.clone(), IssueScope::Mine);
        board.refresh().await.unwrap();

        assert!(board.can_assign(5));
        board.assign(5, 7).await.unwrap();

        let issue = board.issue(5).unwrap();
        assert_eq!(issue.assignee(), Some("E7"));
        assert!(!board.can_assign(5));

        let b = api.0.lock().unwrap();
        assert_eq!(b.assign_calls, vec![(5, 7)]);
        // initial fetch + refetch after assign
        assert_eq!(b.fetches, 2);
    }

    #[tokio::test]
    async fn test_assign_rejections_send_nothing() {
        let api = backend();
        let mut board = IssueBoard::new(api.clone(), IssueScope::All);
        board.refresh().await.unwrap();

        assert!(matches!(
            board.assign(5, 99).await,
            Err(AssignError::UnknownEngineer(99))
        ));
        assert!(matches!(
            board.assign(6, 7).await,
            Err(AssignError::UnknownIssue(6))
        ));

        board.assign(5, 8).await.unwrap();
        assert!(matches!(
            board.assign(5, 7).await,
            Err(AssignError::AlreadyAssigned { .. })
        ));
        assert_eq!(api.0.lock().unwrap().assign_calls, vec![(5, 8)]);
    }

    #[tokio::test]
    async fn test_failed_assign_keeps_list() {
        let api = backend();
        let mut board = IssueBoard::new(api.clone(), IssueScope::Mine);
        board.refresh().await.unwrap();
        api.0.lock().unwrap().fail_assign = true;

        let err = board.assign(5, 7).await.unwrap_err();
        assert!(matches!(err, AssignError::Request(_)));
        assert!(board.can_assign(5));
        assert_eq!(api.0.lock().unwrap().fetches, 1);
    }

    #[tokio::test]
    async fn test_filter_and_page() {
        let api = FakeIssues::default();
        api.0.lock().unwrap().issues = (1..=7)
            .map(|id| issue(id, if id % 2 == 0 { Severity::Minor } else { Severity::Urgent }))
            .collect();
        let mut board = IssueBoard::new(api, IssueScope::All);
        board.refresh_issues().await.unwrap();

        let urgent = IssueFilter {
            severity: Some(Severity::Urgent),
            ..Default::default()
        };
        assert_eq!(board.filtered(&urgent).len(), 4);

        let page = board.page(&urgent, 2, 3);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].issue_id, 7);
        assert_eq!(page.pagination.total, 4);
        assert_eq!(page.pagination.total_pages, 2);
    }
}
