use super::Context;
use crate::cli::{IssueCommand, IssueListArgs, IssueReportArgs};
use oxy_client::{Attachment, IssueApi, IssueBoard, IssueFilter, IssueReport, IssueScope};
use shared::models::{Issue, Role};

pub async fn run(ctx: &mut Context, command: IssueCommand) -> anyhow::Result<()> {
    match command {
        IssueCommand::List(args) => list(ctx, args).await,
        IssueCommand::Engineers => engineers(ctx).await,
        IssueCommand::Assign {
            issue_id,
            engineer_id,
        } => assign(ctx, issue_id, engineer_id).await,
        IssueCommand::Report(args) => report(ctx, args).await,
    }
}

/// Issue list page of the current role
fn list_route(ctx: &Context) -> &'static str {
    match ctx.session.role() {
        Some(Role::Engineer) => "/engineer/my-issues",
        _ => "/admin/issues",
    }
}

fn print_issue(issue: &Issue) {
    println!(
        "#{:<5} {:<14} {:<10} {:<12} {}{}",
        issue.issue_id,
        issue.severity.to_string(),
        issue.status.to_string(),
        issue.category.to_string(),
        issue.title,
        if issue.do_not_operate_recommended {
            "  [DO NOT OPERATE]"
        } else {
            ""
        },
    );
    println!(
        "       chamber: {}  engineer: {}",
        issue
            .chamber
            .as_ref()
            .map(|c| c.label())
            .unwrap_or_else(|| "-".to_string()),
        issue.assignee().unwrap_or("unassigned"),
    );
}

async fn list(ctx: &mut Context, args: IssueListArgs) -> anyhow::Result<()> {
    ctx.authorize(list_route(ctx))?;
    let scope = if args.all {
        IssueScope::All
    } else {
        IssueScope::Mine
    };
    let mut board = IssueBoard::new(ctx.client.clone(), scope);
    board.refresh_issues().await?;

    let filter = IssueFilter {
        status: args.status,
        severity: args.severity,
        category: args.category,
        unassigned_only: args.unassigned,
    };
    let page = board.page(&filter, args.page, args.per_page);
    ctx.emit(&page, || {
        if page.items.is_empty() {
            println!("No issues");
        }
        page.items.iter().for_each(print_issue);
        println!(
            "Page {}/{} ({} issues)",
            page.pagination.page,
            page.pagination.total_pages.max(1),
            page.pagination.total
        );
    })
}

async fn engineers(ctx: &mut Context) -> anyhow::Result<()> {
    ctx.authorize("/admin/issues")?;
    let engineers = ctx.client.engineers().await?;
    ctx.emit(&engineers, || {
        for engineer in &engineers {
            println!(
                "#{:<5} {} <{}>",
                engineer.id,
                engineer.username,
                engineer.email.as_deref().unwrap_or("-")
            );
        }
    })
}

async fn assign(ctx: &mut Context, issue_id: i64, engineer_id: i64) -> anyhow::Result<()> {
    ctx.authorize("/admin/issues")?;
    let mut board = IssueBoard::new(ctx.client.clone(), IssueScope::Mine);
    board.refresh().await?;
    board.assign(issue_id, engineer_id).await?;
    audit_log!(
        ctx.user_id(),
        "assign",
        format!("issue:{issue_id}"),
        format!("engineer:{engineer_id}")
    );

    match board.issue(issue_id) {
        Some(issue) => ctx.emit(issue, || {
            println!(
                "Issue #{issue_id} assigned to {}",
                issue.assignee().unwrap_or("?")
            );
        }),
        None => {
            println!("Issue #{issue_id} assigned");
            Ok(())
        }
    }
}

async fn report(ctx: &mut Context, args: IssueReportArgs) -> anyhow::Result<()> {
    ctx.authorize(&format!("/operator/report-issue/{}", args.chamber_id))?;

    let mut report = IssueReport::new(args.chamber_id, args.title, args.description)
        .with_category(args.category)
        .with_severity(args.severity)
        .do_not_operate(args.do_not_operate);
    for path in &args.uploads {
        report = report.with_upload(Attachment::from_path(path).await?);
    }

    let ack = ctx.client.report_issue(&report).await?;
    audit_log!(
        ctx.user_id(),
        "report",
        format!("chamber:{}", args.chamber_id),
        report.title.clone()
    );
    ctx.emit(&ack, || {
        println!("{}", ack.message.as_deref().unwrap_or("Issue reported"));
    })
}
