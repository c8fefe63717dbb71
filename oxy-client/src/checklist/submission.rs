//! Submission payload and its wire encoding
//!
//! Without binary parts the payload goes out as a JSON body. With any
//! attachment or a video it becomes `multipart/form-data`: scalar keys as
//! text fields, `responses` as a JSON text field, one file part per
//! attachment named `attachment_<itemId>`, and the video as `videoUpload`.

use crate::attachment::Attachment;
use crate::error::ClientResult;
use reqwest::multipart::Form;
use serde::Serialize;
use serde_json::Value;
use shared::models::{CheckResult, CheckType, ItemId};

/// Name of the multipart file part holding the video
pub const VIDEO_PART: &str = "videoUpload";

/// One answered template item as sent to the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedResponse {
    pub item_id: ItemId,
    pub result: CheckResult,
    pub notes: Option<String>,
    pub attachment: Option<Attachment>,
}

impl SubmittedResponse {
    /// Multipart file part name for this item's attachment
    pub fn attachment_part_name(&self) -> String {
        format!("attachment_{}", self.item_id)
    }
}

/// Complete, validated checklist ready to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistSubmission {
    pub chamber_id: i64,
    pub check_type: CheckType,
    pub declaration_accepted: bool,
    pub signature_name: String,
    pub notes_general: String,
    /// One entry per template item, in template order
    pub responses: Vec<SubmittedResponse>,
    /// Only ever set for Monthly checks
    pub video: Option<Attachment>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireResponse<'a> {
    item_id: &'a ItemId,
    result: CheckResult,
    notes: Option<&'a str>,
    attachment: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireSubmission<'a> {
    chamber_id: i64,
    check_type: CheckType,
    declaration_accepted: bool,
    signature_name: &'a str,
    notes_general: &'a str,
    responses: Vec<WireResponse<'a>>,
    video_upload: Option<&'a str>,
}

/// Encoded request body
pub(crate) enum SubmissionBody {
    Json(Value),
    Multipart(Form),
}

impl ChecklistSubmission {
    /// Whether any attachment or a video has to travel as a file part
    pub fn has_binary_parts(&self) -> bool {
        self.video.is_some() || self.responses.iter().any(|r| r.attachment.is_some())
    }

    pub fn attachment_count(&self) -> usize {
        self.responses
            .iter()
            .filter(|r| r.attachment.is_some())
            .count()
    }

    fn wire_responses(&self) -> Vec<WireResponse<'_>> {
        self.responses
            .iter()
            .map(|r| WireResponse {
                item_id: &r.item_id,
                result: r.result,
                notes: r.notes.as_deref(),
                attachment: r.attachment.as_ref().map(|_| r.attachment_part_name()),
            })
            .collect()
    }

    /// JSON view of the payload; file parts are referenced by part name
    pub fn to_json(&self) -> ClientResult<Value> {
        let wire = WireSubmission {
            chamber_id: self.chamber_id,
            check_type: self.check_type,
            declaration_accepted: self.declaration_accepted,
            signature_name: &self.signature_name,
            notes_general: &self.notes_general,
            responses: self.wire_responses(),
            video_upload: self.video.as_ref().map(|_| VIDEO_PART),
        };
        Ok(serde_json::to_value(wire)?)
    }

    pub(crate) fn encode(&self) -> ClientResult<SubmissionBody> {
        if !self.has_binary_parts() {
            return Ok(SubmissionBody::Json(self.to_json()?));
        }

        let mut form = Form::new()
            .text("chamberId", self.chamber_id.to_string())
            .text("checkType", self.check_type.to_string())
            .text("declarationAccepted", self.declaration_accepted.to_string())
            .text("signatureName", self.signature_name.clone())
            .text("notesGeneral", self.notes_general.clone())
            .text("responses", serde_json::to_string(&self.wire_responses())?);

        for response in &self.responses {
            if let Some(attachment) = &response.attachment {
                form = form.part(response.attachment_part_name(), attachment.to_part()?);
            }
        }
        if let Some(video) = &self.video {
            form = form.part(VIDEO_PART, video.to_part()?);
        }
        Ok(SubmissionBody::Multipart(form))
    }
}
