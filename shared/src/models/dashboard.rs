//! Dashboard statistics

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// `GET /admin/dashboard-stats` body
///
/// Known counters are typed; anything else the backend adds is kept in
/// `extra` so it can still be displayed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_customers: Option<u64>,
    #[serde(default)]
    pub total_chambers: Option<u64>,
    #[serde(default)]
    pub active_chambers: Option<u64>,
    #[serde(default)]
    pub total_users: Option<u64>,
    #[serde(default)]
    pub open_issues: Option<u64>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl DashboardStats {
    /// Label/value pairs in display order
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        let typed = [
            ("Total Customers", self.total_customers),
            ("Total Chambers", self.total_chambers),
            ("Active Chambers", self.active_chambers),
            ("Total Users", self.total_users),
            ("Open Issues", self.open_issues),
        ];
        for (label, value) in typed {
            if let Some(v) = value {
                out.push((label.to_string(), v.to_string()));
            }
        }
        for (key, value) in &self.extra {
            let rendered = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            out.push((key.clone(), rendered));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_keep_unknown_counters() {
        let json = r#"{"totalCustomers":12,"openIssues":7,"systemHealth":"99%"}"#;
        let stats: DashboardStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_customers, Some(12));
        assert_eq!(stats.open_issues, Some(7));

        let entries = stats.entries();
        assert_eq!(entries[0], ("Total Customers".to_string(), "12".to_string()));
        assert_eq!(entries[1], ("Open Issues".to_string(), "7".to_string()));
        assert_eq!(entries[2], ("systemHealth".to_string(), "99%".to_string()));
    }
}
