use super::Context;
use anyhow::Context as _;
use serde_json::json;

pub async fn login(ctx: &mut Context, email: &str, password: &str) -> anyhow::Result<()> {
    let user = ctx
        .session
        .login(email, password)
        .await
        .context("Login failed")?
        .clone();
    let landing = ctx.routes.landing_route(user.role_name());
    audit_log!(user.id, "login", format!("user:{}", user.id));

    ctx.emit(&json!({ "user": user, "landingRoute": landing }), || {
        println!(
            "Logged in as {} ({})",
            user.username,
            user.role_name().unwrap_or("no role")
        );
        println!("Dashboard: {landing}");
    })
}

pub async fn signup(
    ctx: &mut Context,
    username: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<()> {
    let response = ctx
        .session
        .signup(username, email, password)
        .await
        .context("Signup failed")?;
    ctx.emit(&response, || {
        println!(
            "{}",
            response
                .message
                .as_deref()
                .unwrap_or("Account created. You can log in now.")
        );
    })
}

pub fn logout(ctx: &mut Context) -> anyhow::Result<()> {
    let was_logged_in = ctx.session.is_authenticated();
    ctx.session.logout()?;
    if was_logged_in {
        println!("Logged out");
    } else {
        println!("No active session");
    }
    Ok(())
}

pub fn whoami(ctx: &mut Context) -> anyhow::Result<()> {
    let Some(user) = ctx.session.user() else {
        println!("Not logged in");
        return Ok(());
    };
    ctx.emit(user, || {
        println!("{} <{}>", user.username, user.email.as_deref().unwrap_or("-"));
        println!("Role: {}", user.role_name().unwrap_or("-"));
        if let Some(customer) = &user.customer {
            println!("Customer: {}", customer.name);
        }
    })
}
