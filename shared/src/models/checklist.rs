//! Checklist Models
//!
//! Templates are fetched per [`CheckType`] and never mutated client-side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Inspection periodicity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckType {
    Daily,
    Weekly,
    Monthly,
}

impl CheckType {
    pub const ALL: [CheckType; 3] = [CheckType::Daily, CheckType::Weekly, CheckType::Monthly];

    pub const fn name(&self) -> &'static str {
        match self {
            CheckType::Daily => "Daily",
            CheckType::Weekly => "Weekly",
            CheckType::Monthly => "Monthly",
        }
    }

    /// Monthly checks carry exactly one video
    pub const fn requires_video(&self) -> bool {
        matches!(self, CheckType::Monthly)
    }
}

impl fmt::Display for CheckType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CheckType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CheckType::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown check type: {s}"))
    }
}

/// Result chosen for one checklist item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckResult {
    Pass,
    Fail,
    #[serde(rename = "NA")]
    NotApplicable,
}

impl CheckResult {
    pub const fn name(&self) -> &'static str {
        match self {
            CheckResult::Pass => "Pass",
            CheckResult::Fail => "Fail",
            CheckResult::NotApplicable => "NA",
        }
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CheckResult {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pass" => Ok(CheckResult::Pass),
            "fail" => Ok(CheckResult::Fail),
            "na" | "n/a" => Ok(CheckResult::NotApplicable),
            _ => Err(format!("unknown check result: {s}")),
        }
    }
}

/// Stable checklist item identifier
///
/// The backend may key items numerically or by string; the original form
/// is kept so it serializes back unchanged. Identity is the text form, so
/// `12` and `"12"` name the same item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Numeric(i64),
    Text(String),
}

impl ItemId {
    /// Text form used for identity
    pub fn key(&self) -> Cow<'_, str> {
        match self {
            ItemId::Numeric(n) => Cow::Owned(n.to_string()),
            ItemId::Text(s) => Cow::Borrowed(s),
        }
    }
}

impl PartialEq for ItemId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ItemId::Numeric(a), ItemId::Numeric(b)) => a == b,
            _ => self.key() == other.key(),
        }
    }
}

impl Eq for ItemId {}

impl Hash for ItemId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        ItemId::Numeric(value)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        match value.parse::<i64>() {
            Ok(n) => ItemId::Numeric(n),
            Err(_) => ItemId::Text(value.to_string()),
        }
    }
}

/// One inspection item of a template
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub item_id: ItemId,
    pub title: String,
    #[serde(default)]
    pub instruction: String,
    #[serde(default)]
    pub requires_photo_on_fail: bool,
}

/// Item template for one check type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistTemplate {
    #[serde(default)]
    pub template_id: Option<i64>,
    #[serde(default)]
    pub check_type: Option<CheckType>,
    #[serde(default)]
    pub name: Option<String>,
    /// Ordered items
    #[serde(rename = "ChecklistItems", default)]
    pub items: Vec<ChecklistItem>,
}

/// Backend acknowledgement of a submitted checklist
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    #[serde(default, alias = "id")]
    pub submission_id: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub overall_result: Option<String>,
}

/// One answered item of a past submission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecordedResponse {
    #[serde(default)]
    pub item_id: Option<ItemId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub attachment_path: Option<String>,
}

/// A past submission (`GET /ops/checklists/my-submissions`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub submission_id: i64,
    #[serde(default)]
    pub chamber_serial_number: Option<String>,
    #[serde(default)]
    pub chamber_model_name: Option<String>,
    #[serde(default)]
    pub check_type: Option<String>,
    #[serde(default)]
    pub overall_result: Option<String>,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub signature_name: Option<String>,
    #[serde(default)]
    pub notes_general: Option<String>,
    #[serde(default)]
    pub responses: Vec<RecordedResponse>,
    #[serde(default)]
    pub video_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_deserialize() {
        let json = r#"{
            "templateId": 4,
            "checkType": "Daily",
            "ChecklistItems": [
                {"itemId": 1, "title": "Door seal", "instruction": "Inspect seal", "requiresPhotoOnFail": true},
                {"itemId": "valve-2", "title": "Valves", "instruction": "Open/close"}
            ]
        }"#;
        let template: ChecklistTemplate = serde_json::from_str(json).unwrap();
        assert_eq!(template.check_type, Some(CheckType::Daily));
        assert_eq!(template.items.len(), 2);
        assert_eq!(template.items[0].item_id, ItemId::Numeric(1));
        assert!(template.items[0].requires_photo_on_fail);
        assert_eq!(template.items[1].item_id, ItemId::Text("valve-2".into()));
        assert!(!template.items[1].requires_photo_on_fail);
    }

    #[test]
    fn test_check_result_wire_names() {
        assert_eq!(serde_json::to_string(&CheckResult::NotApplicable).unwrap(), "\"NA\"");
        let r: CheckResult = serde_json::from_str("\"Fail\"").unwrap();
        assert_eq!(r, CheckResult::Fail);
        assert_eq!("n/a".parse::<CheckResult>(), Ok(CheckResult::NotApplicable));
    }

    #[test]
    fn test_check_type_parse() {
        assert_eq!("monthly".parse::<CheckType>(), Ok(CheckType::Monthly));
        assert!("yearly".parse::<CheckType>().is_err());
        assert!(CheckType::Monthly.requires_video());
        assert!(!CheckType::Weekly.requires_video());
    }

    #[test]
    fn test_item_id_from_str() {
        assert_eq!(ItemId::from("12"), ItemId::Numeric(12));
        assert_eq!(ItemId::from("seal"), ItemId::Text("seal".into()));
        assert_eq!(ItemId::Numeric(12).to_string(), "12");
    }

    #[test]
    fn test_item_id_numeric_and_text_forms_are_one_item() {
        use std::collections::HashSet;

        let from_text: ItemId = serde_json::from_str("\"12\"").unwrap();
        assert_eq!(from_text, ItemId::Text("12".into()));
        assert_eq!(from_text, ItemId::Numeric(12));
        assert_ne!(ItemId::Text("012".into()), ItemId::Numeric(12));

        let mut seen = HashSet::new();
        seen.insert(ItemId::Numeric(12));
        assert!(seen.contains(&from_text));

        // wire form is unchanged
        assert_eq!(serde_json::to_string(&from_text).unwrap(), "\"12\"");
        assert_eq!(serde_json::to_string(&ItemId::Numeric(12)).unwrap(), "12");
    }

    #[test]
    fn test_submission_record_deserialize() {
        let json = r#"{
            "submissionId": 10,
            "chamberSerialNumber": "OX-1",
            "checkType": "Weekly",
            "overallResult": "Pass",
            "submittedAt": "2025-01-02T10:00:00Z",
            "responses": [{"itemId": 1, "result": "Pass"}]
        }"#;
        let record: SubmissionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.submission_id, 10);
        assert_eq!(record.responses.len(), 1);
        assert!(record.submitted_at.is_some());
    }
}
