use super::Context;
use crate::cli::{AdminCommand, ChamberCommand, CustomerCommand, UserCommand};
use oxy_client::AdminApi;
use serde_json::json;
use shared::models::{
    ChamberCreate, ChamberUpdate, CustomerCreate, CustomerUpdate, UserCreate, UserUpdate,
};

pub async fn run(ctx: &mut Context, command: AdminCommand) -> anyhow::Result<()> {
    match command {
        AdminCommand::Stats => {
            ctx.authorize("/admin")?;
            let stats = ctx.client.dashboard_stats().await?;
            ctx.emit(&stats, || {
                for (label, value) in stats.entries() {
                    println!("{label}: {value}");
                }
            })
        }
        AdminCommand::Customers { command } => {
            ctx.authorize("/admin/customers")?;
            customers(ctx, command).await
        }
        AdminCommand::Chambers { command } => {
            ctx.authorize("/admin/chambers")?;
            chambers(ctx, command).await
        }
        AdminCommand::Users { command } => {
            ctx.authorize("/admin/users")?;
            users(ctx, command).await
        }
    }
}

fn deleted(ctx: &Context, kind: &str, id: i64) -> anyhow::Result<()> {
    audit_log!(ctx.user_id(), "delete", format!("{kind}:{id}"));
    ctx.emit(&json!({ "deleted": id }), || println!("Deleted {kind} #{id}"))
}

async fn customers(ctx: &mut Context, command: CustomerCommand) -> anyhow::Result<()> {
    match command {
        CustomerCommand::List => {
            let customers = ctx.client.customers().await?;
            ctx.emit(&customers, || {
                for c in &customers {
                    println!(
                        "#{:<5} {:<30} {} <{}> {}",
                        c.id,
                        c.name,
                        c.contact_person.as_deref().unwrap_or("-"),
                        c.contact_email.as_deref().unwrap_or("-"),
                        c.contact_phone.as_deref().unwrap_or("-"),
                    );
                }
            })
        }
        CustomerCommand::Create {
            name,
            address,
            contact_person,
            contact_email,
            contact_phone,
        } => {
            let customer = ctx
                .client
                .create_customer(&CustomerCreate {
                    name,
                    address,
                    contact_person,
                    contact_email,
                    contact_phone,
                })
                .await?;
            audit_log!(ctx.user_id(), "create", format!("customer:{}", customer.id));
            ctx.emit(&customer, || {
                println!("Created customer #{} {}", customer.id, customer.name)
            })
        }
        CustomerCommand::Update {
            id,
            name,
            address,
            contact_person,
            contact_email,
            contact_phone,
        } => {
            let customer = ctx
                .client
                .update_customer(
                    id,
                    &CustomerUpdate {
                        name,
                        address,
                        contact_person,
                        contact_email,
                        contact_phone,
                    },
                )
                .await?;
            audit_log!(ctx.user_id(), "update", format!("customer:{id}"));
            ctx.emit(&customer, || println!("Updated customer #{id}"))
        }
        CustomerCommand::Delete { id } => {
            ctx.client.delete_customer(id).await?;
            deleted(ctx, "customer", id)
        }
    }
}

async fn chambers(ctx: &mut Context, command: ChamberCommand) -> anyhow::Result<()> {
    match command {
        ChamberCommand::List => {
            let chambers = ctx.client.chambers().await?;
            ctx.emit(&chambers, || {
                for c in &chambers {
                    println!(
                        "#{:<5} {:<28} customer={}",
                        c.id,
                        c.label(),
                        c.customer
                            .as_ref()
                            .map(|cust| cust.name.clone())
                            .or_else(|| c.customer_id.map(|id| format!("#{id}")))
                            .unwrap_or_else(|| "-".to_string()),
                    );
                }
            })
        }
        ChamberCommand::Create {
            serial_number,
            model_name,
            customer_id,
            installation_date,
            warranty_expiry_date,
        } => {
            let chamber = ctx
                .client
                .create_chamber(&ChamberCreate {
                    serial_number,
                    model_name,
                    customer_id,
                    installation_date,
                    warranty_expiry_date,
                })
                .await?;
            audit_log!(ctx.user_id(), "create", format!("chamber:{}", chamber.id));
            ctx.emit(&chamber, || {
                println!("Created chamber #{} {}", chamber.id, chamber.label())
            })
        }
        ChamberCommand::Update {
            id,
            serial_number,
            model_name,
            customer_id,
            installation_date,
            warranty_expiry_date,
        } => {
            let chamber = ctx
                .client
                .update_chamber(
                    id,
                    &ChamberUpdate {
                        serial_number,
                        model_name,
                        customer_id,
                        installation_date,
                        warranty_expiry_date,
                    },
                )
                .await?;
            audit_log!(ctx.user_id(), "update", format!("chamber:{id}"));
            ctx.emit(&chamber, || println!("Updated chamber #{id}"))
        }
        ChamberCommand::Delete { id } => {
            ctx.client.delete_chamber(id).await?;
            deleted(ctx, "chamber", id)
        }
    }
}

async fn users(ctx: &mut Context, command: UserCommand) -> anyhow::Result<()> {
    match command {
        UserCommand::List => {
            let users = ctx.client.users().await?;
            ctx.emit(&users, || {
                for u in &users {
                    println!(
                        "#{:<5} {:<20} {:<14} {}",
                        u.id,
                        u.username,
                        u.role_name().unwrap_or("-"),
                        u.email.as_deref().unwrap_or("-"),
                    );
                }
            })
        }
        UserCommand::Create {
            username,
            email,
            password,
            role,
            customer_id,
        } => {
            let user = ctx
                .client
                .create_user(&UserCreate {
                    username,
                    email,
                    password,
                    role,
                    customer_id,
                })
                .await?;
            audit_log!(ctx.user_id(), "create", format!("user:{}", user.id), role.name());
            ctx.emit(&user, || {
                println!("Created {} #{} {}", role, user.id, user.username)
            })
        }
        UserCommand::Update {
            id,
            username,
            email,
            password,
            role,
            customer_id,
        } => {
            let user = ctx
                .client
                .update_user(
                    id,
                    &UserUpdate {
                        username,
                        email,
                        password,
                        role,
                        customer_id,
                    },
                )
                .await?;
            audit_log!(ctx.user_id(), "update", format!("user:{id}"));
            ctx.emit(&user, || println!("Updated user #{id}"))
        }
        UserCommand::Delete { id } => {
            ctx.client.delete_user(id).await?;
            deleted(ctx, "user", id)
        }
    }
}
