use crate::attachment::Attachment;
use crate::error::ClientResult;
use reqwest::multipart::Form;
use shared::error::AppError;
use shared::models::{IssueCategory, Severity};
use shared::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_required_ref, validate_required_text,
};

/// Multipart field carrying each evidence file
pub const UPLOADS_PART: &str = "uploads";

/// Fault report filed by an operator against a chamber
#[derive(Debug, Clone, Default)]
pub struct IssueReport {
    pub chamber_id: i64,
    pub title: String,
    pub description: String,
    pub category: IssueCategory,
    pub severity: Severity,
    pub do_not_operate_recommended: bool,
    pub uploads: Vec<Attachment>,
}

impl IssueReport {
    pub fn new(chamber_id: i64, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            chamber_id,
            title: title.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn with_category(mut self, category: IssueCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn do_not_operate(mut self, recommended: bool) -> Self {
        self.do_not_operate_recommended = recommended;
        self
    }

    pub fn with_upload(mut self, file: Attachment) -> Self {
        self.uploads.push(file);
        self
    }

    /// Required-field checks of the report form
    pub fn validate(&self) -> Result<(), AppError> {
        validate_required_ref(Some(self.chamber_id), "chamberId")?;
        validate_required_text(&self.title, "title", MAX_NAME_LEN)?;
        validate_required_text(&self.description, "description", MAX_NOTE_LEN)
    }

    pub(crate) fn to_form(&self) -> ClientResult<Form> {
        let mut form = Form::new()
            .text("chamberId", self.chamber_id.to_string())
            .text("title", self.title.trim().to_string())
            .text("description", self.description.clone())
            .text("category", self.category.to_string())
            .text("severity", self.severity.to_string())
            .text(
                "doNotOperateRecommended",
                self.do_not_operate_recommended.to_string(),
            );
        for file in &self.uploads {
            form = form.part(UPLOADS_PART, file.to_part()?);
        }
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let report = IssueReport::new(3, "Door sticks", "Hard to close");
        assert_eq!(report.category, IssueCategory::Other);
        assert_eq!(report.severity, Severity::Minor);
        assert!(!report.do_not_operate_recommended);
        assert!(report.validate().is_ok());
    }

    #[test]
    fn test_required_fields() {
        let report = IssueReport::new(3, " ", "Hard to close");
        assert_eq!(report.validate().unwrap_err().message, "title is required");

        let report = IssueReport::new(3, "Door", "");
        assert_eq!(
            report.validate().unwrap_err().message,
            "description is required"
        );

        let report = IssueReport::new(0, "Door", "Sticks");
        assert_eq!(report.validate().unwrap_err().message, "chamberId is required");
    }

    #[test]
    fn test_form_builds_with_uploads() {
        let report = IssueReport::new(3, "Leak", "Hissing at valve")
            .with_category(IssueCategory::Valves)
            .with_severity(Severity::SafetyCritical)
            .do_not_operate(true)
            .with_upload(Attachment::new("a.jpg", vec![1]))
            .with_upload(Attachment::new("b.jpg", vec![2]));
        assert_eq!(report.uploads.len(), 2);
        assert!(report.to_form().is_ok());
    }
}
