use super::Context;
use crate::cli::ChecklistCommand;
use anyhow::Context as _;
use oxy_client::{Attachment, ChecklistApi, ChecklistEngine, NetworkHttpClient};
use serde::Deserialize;
use shared::models::{CheckResult, CheckType, ItemId};
use std::path::{Path, PathBuf};

/// Answers for one checklist, as written by the operator
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnswerSheet {
    check_type: CheckType,
    #[serde(default)]
    responses: Vec<Answer>,
    /// Monthly walk-around video
    #[serde(default)]
    video: Option<PathBuf>,
    #[serde(default)]
    notes_general: String,
    #[serde(default)]
    declaration_accepted: bool,
    #[serde(default)]
    signature_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Answer {
    item_id: ItemId,
    result: CheckResult,
    #[serde(default)]
    notes: Option<String>,
    /// Evidence photo for a failed item
    #[serde(default)]
    photo: Option<PathBuf>,
}

impl AnswerSheet {
    fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read answer sheet {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Invalid answer sheet {}", path.display()))
    }

    /// Enter every answer into the engine; the template must be loaded
    async fn apply(&self, engine: &mut ChecklistEngine<NetworkHttpClient>) -> anyhow::Result<()> {
        for answer in &self.responses {
            engine
                .set_response(answer.item_id.clone(), answer.result)
                .with_context(|| format!("Item {}", answer.item_id))?;
            if let Some(notes) = &answer.notes {
                engine.set_item_notes(answer.item_id.clone(), notes.as_str())?;
            }
            if let Some(photo) = &answer.photo {
                engine.set_attachment(answer.item_id.clone(), Attachment::from_path(photo).await?)?;
            }
        }
        if let Some(video) = &self.video {
            engine.set_video(Attachment::from_path(video).await?);
        }
        engine.set_general_notes(self.notes_general.as_str());
        engine.set_declaration_accepted(self.declaration_accepted);
        engine.set_signature_name(self.signature_name.as_str());
        Ok(())
    }
}

pub async fn run(ctx: &mut Context, command: ChecklistCommand) -> anyhow::Result<()> {
    match command {
        ChecklistCommand::Template {
            chamber_id,
            check_type,
        } => template(ctx, chamber_id, check_type).await,
        ChecklistCommand::Submit {
            chamber_id,
            answers,
            dry_run,
        } => submit(ctx, chamber_id, &answers, dry_run).await,
        ChecklistCommand::Submissions => submissions(ctx).await,
    }
}

async fn template(ctx: &mut Context, chamber_id: i64, check_type: CheckType) -> anyhow::Result<()> {
    ctx.authorize(&format!("/operator/checklist/{chamber_id}"))?;
    let mut engine = ChecklistEngine::new(ctx.client.clone(), chamber_id);
    let template = engine.load_template(check_type).await?;

    ctx.emit(template, || {
        println!(
            "{} checklist{}",
            check_type,
            template
                .name
                .as_deref()
                .map(|n| format!(": {n}"))
                .unwrap_or_default()
        );
        for item in &template.items {
            let photo = if item.requires_photo_on_fail {
                " [photo on fail]"
            } else {
                ""
            };
            println!("  {:>4}  {}{photo}", item.item_id.to_string(), item.title);
            if !item.instruction.is_empty() {
                println!("        {}", item.instruction);
            }
        }
        if check_type.requires_video() {
            println!("  A walk-around video is required.");
        }
    })
}

async fn submit(
    ctx: &mut Context,
    chamber_id: i64,
    answers: &Path,
    dry_run: bool,
) -> anyhow::Result<()> {
    ctx.authorize(&format!("/operator/checklist/{chamber_id}"))?;
    let sheet = AnswerSheet::load(answers)?;

    let mut engine = ChecklistEngine::new(ctx.client.clone(), chamber_id);
    engine.load_template(sheet.check_type).await?;
    sheet.apply(&mut engine).await?;

    let (answered, total) = engine.progress();
    if let Err(violation) = engine.validate() {
        anyhow::bail!("{violation} ({answered}/{total} items answered)");
    }
    if dry_run {
        println!("Checklist is complete ({answered}/{total} items); not sent");
        return Ok(());
    }

    let receipt = engine.submit().await?;
    audit_log!(
        ctx.user_id(),
        "submit",
        format!("chamber:{chamber_id}"),
        format!("{} checklist, submission {:?}", sheet.check_type, receipt.submission_id)
    );
    ctx.emit(&receipt, || {
        println!(
            "{}",
            receipt.message.as_deref().unwrap_or("Checklist submitted")
        );
        if let Some(result) = &receipt.overall_result {
            println!("Overall result: {result}");
        }
    })
}

async fn submissions(ctx: &mut Context) -> anyhow::Result<()> {
    ctx.authorize("/operator/submissions")?;
    let records = ctx.client.my_submissions().await?;
    ctx.emit(&records, || {
        if records.is_empty() {
            println!("No submissions yet");
        }
        for record in &records {
            println!(
                "#{:<5} {:<8} {:<10} {} {} ({})",
                record.submission_id,
                record.check_type.as_deref().unwrap_or("-"),
                record.overall_result.as_deref().unwrap_or("-"),
                record.chamber_model_name.as_deref().unwrap_or("-"),
                record.chamber_serial_number.as_deref().unwrap_or("-"),
                record
                    .submitted_at
                    .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| "-".to_string()),
            );
        }
    })
}
