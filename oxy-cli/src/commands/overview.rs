use super::Context;
use oxy_client::{Access, ChamberApi, load_dashboard};
use serde_json::json;
use shared::models::Chamber;

pub fn route(ctx: &mut Context, path: &str) -> anyhow::Result<()> {
    let access = ctx.routes.check_session(&ctx.session, path);
    let (allowed, target) = match &access {
        Access::Allow => (true, path),
        Access::Redirect(to) => (false, *to),
    };
    ctx.emit(&json!({ "path": path, "allowed": allowed, "route": target }), || {
        if allowed {
            println!("{path}: allowed");
        } else {
            println!("{path}: redirect to {target}");
        }
    })
}

pub async fn dashboard(ctx: &mut Context) -> anyhow::Result<()> {
    let route = ctx.own_route("")?;
    ctx.authorize(&route)?;
    let Some(role) = ctx.session.role() else {
        anyhow::bail!("Not logged in");
    };
    let summary = load_dashboard(role, &ctx.client).await?;
    let entries = summary.entries();
    ctx.emit(&json!({ "role": role, "entries": entries }), || print!("{summary}"))
}

fn print_chamber(chamber: &Chamber) {
    println!(
        "#{:<5} {:<28} customer={} installed={} warranty={}",
        chamber.id,
        chamber.label(),
        chamber
            .customer
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or("-"),
        chamber.installation_date.as_deref().unwrap_or("-"),
        chamber.warranty_expiry_date.as_deref().unwrap_or("-"),
    );
}

pub async fn chambers(ctx: &mut Context, id: Option<i64>) -> anyhow::Result<()> {
    let route = ctx.own_route("")?;
    ctx.authorize(&route)?;
    match id {
        Some(id) => {
            let chamber = ctx.client.chamber(id).await?;
            ctx.emit(&chamber, || print_chamber(&chamber))
        }
        None => {
            let chambers = ctx.client.my_chambers().await?;
            ctx.emit(&chambers, || {
                if chambers.is_empty() {
                    println!("No chambers assigned");
                }
                chambers.iter().for_each(print_chamber);
            })
        }
    }
}
