use super::submission::{ChecklistSubmission, SubmittedResponse};
use super::{ChecklistError, ChecklistViolation};
use crate::api::ChecklistApi;
use crate::attachment::Attachment;
use crate::error::ClientResult;
use shared::models::{CheckResult, CheckType, ChecklistTemplate, ItemId, SubmissionReceipt};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Per-item entry state
///
/// The evidence file is independent of the result: it can be attached
/// before the result is chosen and survives result changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemResponse {
    result: Option<CheckResult>,
    notes: Option<String>,
    attachment: Option<Attachment>,
}

impl ItemResponse {
    pub fn result(&self) -> Option<CheckResult> {
        self.result
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    pub fn is_answered(&self) -> bool {
        self.result.is_some()
    }
}

/// Where the current submission attempt stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnginePhase {
    /// No template, or a template with nothing entered yet
    Empty,
    InProgress,
    Validated,
    Submitting,
    Succeeded,
    /// Last submission failed; everything entered is still there
    Failed,
}

/// Handle for a template load started with [`ChecklistEngine::begin_template_load`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct TemplateTicket {
    generation: u64,
    check_type: CheckType,
}

impl TemplateTicket {
    pub fn check_type(&self) -> CheckType {
        self.check_type
    }
}

/// Checklist state for one chamber
///
/// All mutation goes through `&mut self`, so a single engine never runs two
/// loads or two submissions at once.
pub struct ChecklistEngine<C: ChecklistApi> {
    api: C,
    chamber_id: i64,
    check_type: Option<CheckType>,
    template: Option<ChecklistTemplate>,
    responses: HashMap<ItemId, ItemResponse>,
    video: Option<Attachment>,
    notes_general: String,
    declaration_accepted: bool,
    signature_name: String,
    phase: EnginePhase,
    generation: u64,
}

impl<C: ChecklistApi> ChecklistEngine<C> {
    pub fn new(api: C, chamber_id: i64) -> Self {
        Self {
            api,
            chamber_id,
            check_type: None,
            template: None,
            responses: HashMap::new(),
            video: None,
            notes_general: String::new(),
            declaration_accepted: false,
            signature_name: String::new(),
            phase: EnginePhase::Empty,
            generation: 0,
        }
    }

    // ========== Accessors ==========

    pub fn chamber_id(&self) -> i64 {
        self.chamber_id
    }

    pub fn check_type(&self) -> Option<CheckType> {
        self.check_type
    }

    pub fn template(&self) -> Option<&ChecklistTemplate> {
        self.template.as_ref()
    }

    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    /// Answer state of a template item; `None` for ids outside the template
    pub fn response(&self, item_id: &ItemId) -> Option<&ItemResponse> {
        self.responses.get(item_id)
    }

    pub fn video(&self) -> Option<&Attachment> {
        self.video.as_ref()
    }

    pub fn notes_general(&self) -> &str {
        &self.notes_general
    }

    pub fn declaration_accepted(&self) -> bool {
        self.declaration_accepted
    }

    pub fn signature_name(&self) -> &str {
        &self.signature_name
    }

    /// (answered, total) over the template items
    pub fn progress(&self) -> (usize, usize) {
        let answered = self.responses.values().filter(|r| r.is_answered()).count();
        (answered, self.responses.len())
    }

    // ========== Template loading ==========

    /// Switch to `check_type`: clears everything entered so far, then loads
    /// its template. On failure the engine stays empty with no template.
    pub async fn select_check_type(
        &mut self,
        check_type: CheckType,
    ) -> Result<&ChecklistTemplate, ChecklistError> {
        let ticket = self.begin_template_load(check_type);
        let result = self.api.checklist_template(check_type).await;
        self.finish_template_load(ticket, result)?;
        self.template.as_ref().ok_or(ChecklistError::NoTemplate)
    }

    /// Load the template for `check_type`
    ///
    /// Asking again for the type already selected is a retry (see
    /// [`reload_template`](Self::reload_template)); any other type is a
    /// switch (see [`select_check_type`](Self::select_check_type)).
    pub async fn load_template(
        &mut self,
        check_type: CheckType,
    ) -> Result<&ChecklistTemplate, ChecklistError> {
        if self.check_type == Some(check_type) {
            self.reload_template().await
        } else {
            self.select_check_type(check_type).await
        }
    }

    /// Re-fetch the selected type's template. Failure leaves all state as it was.
    ///
    /// On success, answers for items that are still in the template are kept.
    pub async fn reload_template(&mut self) -> Result<&ChecklistTemplate, ChecklistError> {
        let check_type = self.check_type.ok_or(ChecklistError::NoTemplate)?;
        self.generation += 1;
        let template = self
            .api
            .checklist_template(check_type)
            .await
            .map_err(|e| {
                warn!(chamber_id = self.chamber_id, %check_type, error = %e, "template reload failed");
                ChecklistError::TemplateLoad(e)
            })?;

        let mut responses: HashMap<ItemId, ItemResponse> = template
            .items
            .iter()
            .map(|item| (item.item_id.clone(), ItemResponse::default()))
            .collect();
        for (id, slot) in responses.iter_mut() {
            if let Some(previous) = self.responses.remove(id) {
                *slot = previous;
            }
        }
        info!(chamber_id = self.chamber_id, %check_type, items = template.items.len(), "checklist template reloaded");
        self.responses = responses;
        self.template = Some(template);
        self.template.as_ref().ok_or(ChecklistError::NoTemplate)
    }

    /// First half of a type switch for callers that cannot hold the engine
    /// across the fetch: clears state immediately and returns a ticket.
    ///
    /// Only the ticket from the most recent call is accepted by
    /// [`finish_template_load`](Self::finish_template_load); results for
    /// superseded requests are dropped, so the last requested type wins.
    pub fn begin_template_load(&mut self, check_type: CheckType) -> TemplateTicket {
        self.generation += 1;
        self.check_type = Some(check_type);
        self.template = None;
        self.responses.clear();
        self.clear_entries();
        self.phase = EnginePhase::Empty;
        debug!(chamber_id = self.chamber_id, %check_type, generation = self.generation, "template load started");
        TemplateTicket {
            generation: self.generation,
            check_type,
        }
    }

    /// Second half of a type switch
    pub fn finish_template_load(
        &mut self,
        ticket: TemplateTicket,
        result: ClientResult<ChecklistTemplate>,
    ) -> Result<(), ChecklistError> {
        if ticket.generation != self.generation {
            debug!(check_type = %ticket.check_type, "discarding stale template load");
            return Err(ChecklistError::StaleTemplate(ticket.check_type));
        }
        match result {
            Ok(template) => {
                info!(
                    chamber_id = self.chamber_id,
                    check_type = %ticket.check_type,
                    items = template.items.len(),
                    "checklist template loaded"
                );
                self.responses = template
                    .items
                    .iter()
                    .map(|item| (item.item_id.clone(), ItemResponse::default()))
                    .collect();
                self.template = Some(template);
                Ok(())
            }
            Err(e) => {
                warn!(chamber_id = self.chamber_id, check_type = %ticket.check_type, error = %e, "template load failed");
                Err(ChecklistError::TemplateLoad(e))
            }
        }
    }

    // ========== Data entry ==========

    fn slot_mut(&mut self, item_id: &ItemId) -> Result<&mut ItemResponse, ChecklistError> {
        if self.template.is_none() {
            return Err(ChecklistError::NoTemplate);
        }
        self.responses
            .get_mut(item_id)
            .ok_or_else(|| ChecklistError::UnknownItem(item_id.clone()))
    }

    fn touch(&mut self) {
        self.phase = EnginePhase::InProgress;
    }

    /// Record or overwrite the result for one item; notes and evidence stay
    pub fn set_response(
        &mut self,
        item_id: impl Into<ItemId>,
        result: CheckResult,
    ) -> Result<(), ChecklistError> {
        let item_id = item_id.into();
        self.slot_mut(&item_id)?.result = Some(result);
        self.touch();
        Ok(())
    }

    /// Free-form notes for an answered item; empty text clears them
    pub fn set_item_notes(
        &mut self,
        item_id: impl Into<ItemId>,
        text: impl Into<String>,
    ) -> Result<(), ChecklistError> {
        let item_id = item_id.into();
        let text = text.into();
        let slot = self.slot_mut(&item_id)?;
        if !slot.is_answered() {
            return Err(ChecklistError::NotAnswered(item_id));
        }
        slot.notes = (!text.trim().is_empty()).then_some(text);
        self.touch();
        Ok(())
    }

    /// Record or overwrite the evidence file for an item, answered or not
    pub fn set_attachment(
        &mut self,
        item_id: impl Into<ItemId>,
        file: Attachment,
    ) -> Result<(), ChecklistError> {
        let item_id = item_id.into();
        self.slot_mut(&item_id)?.attachment = Some(file);
        self.touch();
        Ok(())
    }

    pub fn clear_attachment(&mut self, item_id: impl Into<ItemId>) -> Result<(), ChecklistError> {
        let item_id = item_id.into();
        self.slot_mut(&item_id)?.attachment = None;
        self.touch();
        Ok(())
    }

    /// The single video of a Monthly check; kept but not sent for other types
    pub fn set_video(&mut self, file: Attachment) {
        self.video = Some(file);
        self.touch();
    }

    pub fn clear_video(&mut self) {
        self.video = None;
        self.touch();
    }

    pub fn set_general_notes(&mut self, notes: impl Into<String>) {
        self.notes_general = notes.into();
        self.touch();
    }

    pub fn set_declaration_accepted(&mut self, accepted: bool) {
        self.declaration_accepted = accepted;
        self.touch();
    }

    pub fn set_signature_name(&mut self, name: impl Into<String>) {
        self.signature_name = name.into();
        self.touch();
    }

    fn clear_entries(&mut self) {
        self.video = None;
        self.notes_general.clear();
        self.declaration_accepted = false;
        self.signature_name.clear();
    }

    // ========== Validation and submission ==========

    /// First broken rule, checked in order: each item (answered, then photo
    /// on a flagged failure), Monthly video, declaration, signature.
    pub fn first_violation(&self) -> Option<ChecklistViolation> {
        let Some(template) = &self.template else {
            return Some(ChecklistViolation::NoTemplate);
        };

        for item in &template.items {
            let answered = self
                .responses
                .get(&item.item_id)
                .and_then(|r| r.result.map(|result| (result, r)));
            let Some((result, response)) = answered else {
                return Some(ChecklistViolation::Unanswered {
                    item_id: item.item_id.clone(),
                    title: item.title.clone(),
                });
            };
            let has_photo = response.attachment.as_ref().is_some_and(|a| !a.is_empty());
            if result == CheckResult::Fail && item.requires_photo_on_fail && !has_photo {
                return Some(ChecklistViolation::PhotoRequired {
                    item_id: item.item_id.clone(),
                    title: item.title.clone(),
                });
            }
        }

        let check_type = self.check_type.or(template.check_type);
        if check_type.is_some_and(|t| t.requires_video())
            && !self.video.as_ref().is_some_and(|v| !v.is_empty())
        {
            return Some(ChecklistViolation::VideoRequired);
        }
        if !self.declaration_accepted {
            return Some(ChecklistViolation::DeclarationRequired);
        }
        if self.signature_name.trim().is_empty() {
            return Some(ChecklistViolation::SignatureRequired);
        }
        None
    }

    /// Fail-fast validation; success moves the attempt to `Validated`
    pub fn validate(&mut self) -> Result<(), ChecklistViolation> {
        match self.first_violation() {
            Some(violation) => {
                if self.phase == EnginePhase::Validated {
                    self.phase = EnginePhase::InProgress;
                }
                Err(violation)
            }
            None => {
                self.phase = EnginePhase::Validated;
                Ok(())
            }
        }
    }

    /// Build the payload: one response per template item, in template order
    pub fn assemble_submission(&self) -> Result<ChecklistSubmission, ChecklistError> {
        if let Some(violation) = self.first_violation() {
            return Err(violation.into());
        }
        let template = self.template.as_ref().ok_or(ChecklistError::NoTemplate)?;
        let check_type = self
            .check_type
            .or(template.check_type)
            .ok_or(ChecklistError::NoTemplate)?;

        let responses = template
            .items
            .iter()
            .map(|item| {
                let response = self.responses.get(&item.item_id);
                match response.and_then(|r| r.result) {
                    Some(result) => Ok(SubmittedResponse {
                        item_id: item.item_id.clone(),
                        result,
                        notes: response.and_then(|r| r.notes.clone()),
                        attachment: response.and_then(|r| r.attachment.clone()),
                    }),
                    None => Err(ChecklistError::NotAnswered(item.item_id.clone())),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ChecklistSubmission {
            chamber_id: self.chamber_id,
            check_type,
            declaration_accepted: self.declaration_accepted,
            signature_name: self.signature_name.trim().to_string(),
            notes_general: self.notes_general.clone(),
            responses,
            video: if check_type.requires_video() {
                self.video.clone()
            } else {
                None
            },
        })
    }

    /// Validate, assemble and send
    ///
    /// Success clears every answer (the template stays loaded). Failure keeps
    /// all state so the same data can be resubmitted.
    pub async fn submit(&mut self) -> Result<SubmissionReceipt, ChecklistError> {
        self.validate()?;
        let submission = self.assemble_submission()?;
        self.phase = EnginePhase::Submitting;
        info!(
            chamber_id = self.chamber_id,
            check_type = %submission.check_type,
            responses = submission.responses.len(),
            attachments = submission.attachment_count(),
            video = submission.video.is_some(),
            "submitting checklist"
        );

        match self.api.submit_checklist(&submission).await {
            Ok(receipt) => {
                info!(chamber_id = self.chamber_id, submission_id = ?receipt.submission_id, "checklist submitted");
                for slot in self.responses.values_mut() {
                    *slot = ItemResponse::default();
                }
                self.clear_entries();
                self.phase = EnginePhase::Succeeded;
                Ok(receipt)
            }
            Err(e) => {
                warn!(chamber_id = self.chamber_id, error = %e, "checklist submission failed");
                self.phase = EnginePhase::Failed;
                Err(ChecklistError::Submit(e))
            }
        }
    }
}
