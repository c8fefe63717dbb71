//! Per-role dashboard summaries

use crate::api::{AdminApi, ChamberApi, ChecklistApi, IssueApi};
use crate::error::ClientResult;
use shared::models::{DashboardStats, Role};
use std::fmt;

/// What each role's landing page shows
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardSummary {
    Admin(DashboardStats),
    Operator { chambers: usize, submissions: usize },
    SiteManager { chambers: usize },
    Engineer { assigned: usize, open: usize },
}

impl DashboardSummary {
    pub fn role(&self) -> Role {
        match self {
            DashboardSummary::Admin(_) => Role::Admin,
            DashboardSummary::Operator { .. } => Role::Operator,
            DashboardSummary::SiteManager { .. } => Role::SiteManager,
            DashboardSummary::Engineer { .. } => Role::Engineer,
        }
    }

    /// Label/value rows in display order
    pub fn entries(&self) -> Vec<(String, String)> {
        let row = |label: &str, n: usize| (label.to_string(), n.to_string());
        match self {
            DashboardSummary::Admin(stats) => stats.entries(),
            DashboardSummary::Operator {
                chambers,
                submissions,
            } => vec![
                row("Assigned Chambers", *chambers),
                row("My Submissions", *submissions),
            ],
            DashboardSummary::SiteManager { chambers } => vec![row("Chambers", *chambers)],
            DashboardSummary::Engineer { assigned, open } => {
                vec![row("Assigned Issues", *assigned), row("Open Issues", *open)]
            }
        }
    }
}

impl fmt::Display for DashboardSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} dashboard", self.role())?;
        for (label, value) in self.entries() {
            writeln!(f, "  {label}: {value}")?;
        }
        Ok(())
    }
}

/// Fetch the summary for `role`'s dashboard
pub async fn load_dashboard<S>(role: Role, services: &S) -> ClientResult<DashboardSummary>
where
    S: AdminApi + ChamberApi + ChecklistApi + IssueApi,
{
    let summary = match role {
        Role::Admin => DashboardSummary::Admin(services.dashboard_stats().await?),
        Role::Operator => DashboardSummary::Operator {
            chambers: services.my_chambers().await?.len(),
            submissions: services.my_submissions().await?.len(),
        },
        Role::SiteManager => DashboardSummary::SiteManager {
            chambers: services.my_chambers().await?.len(),
        },
        Role::Engineer => {
            let issues = services.my_issues().await?;
            DashboardSummary::Engineer {
                assigned: issues.len(),
                open: issues.iter().filter(|i| i.status.is_open()).count(),
            }
        }
    };
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_per_role() {
        let summary = DashboardSummary::Engineer {
            assigned: 4,
            open: 1,
        };
        assert_eq!(summary.role(), Role::Engineer);
        assert_eq!(
            summary.entries(),
            vec![
                ("Assigned Issues".to_string(), "4".to_string()),
                ("Open Issues".to_string(), "1".to_string()),
            ]
        );

        let admin = DashboardSummary::Admin(DashboardStats {
            total_users: Some(9),
            ..Default::default()
        });
        assert_eq!(admin.entries(), vec![("Total Users".to_string(), "9".to_string())]);
    }

    #[test]
    fn test_display() {
        let summary = DashboardSummary::SiteManager { chambers: 3 };
        assert_eq!(summary.to_string(), "Site Manager dashboard\n  Chambers: 3\n");
    }
}
