//! Command handlers
//!
//! Every command that maps to a portal page is checked against the role
//! route table first, so the CLI refuses exactly what the portal would.

mod account;
mod admin;
mod checklist;
mod issues;
mod overview;
mod profile;

use crate::cli::Command;
use anyhow::bail;
use oxy_client::guard::LOGIN_ROUTE;
use oxy_client::{Access, NetworkHttpClient, RouteTable, Session};
use serde::Serialize;

const NOT_LOGGED_IN: &str = "Not logged in. Run `oxy login` first.";

/// Everything a command needs: the client, the restored session and the
/// route table
pub struct Context {
    pub client: NetworkHttpClient,
    pub session: Session<NetworkHttpClient>,
    pub routes: RouteTable,
    pub json: bool,
}

impl Context {
    /// Refuse unless the current session may open `path`
    pub fn authorize(&self, path: &str) -> anyhow::Result<()> {
        match self.routes.check_session(&self.session, path) {
            Access::Allow => Ok(()),
            Access::Redirect(LOGIN_ROUTE) if !self.session.is_authenticated() => {
                bail!(NOT_LOGGED_IN)
            }
            Access::Redirect(to) => bail!(
                "{} may not open {path} (portal redirects to {to})",
                self.session.role_name().unwrap_or("this account")
            ),
        }
    }

    /// Portal route under the user's own dashboard, e.g. `/engineer/profile`
    pub fn own_route(&self, suffix: &str) -> anyhow::Result<String> {
        if !self.session.is_authenticated() {
            bail!(NOT_LOGGED_IN);
        }
        let Some(base) = self.session.role().and_then(|r| self.routes.default_route(r)) else {
            bail!(
                "Unrecognized role {:?}",
                self.session.role_name().unwrap_or_default()
            );
        };
        Ok(format!("{base}{suffix}"))
    }

    pub fn user_id(&self) -> i64 {
        self.session.user().map(|u| u.id).unwrap_or_default()
    }

    /// Print `value` as JSON when `--json` was given, else run `human`
    pub fn emit<T: Serialize + ?Sized>(&self, value: &T, human: impl FnOnce()) -> anyhow::Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            human();
        }
        Ok(())
    }
}

pub async fn run(ctx: &mut Context, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Login { email, password } => account::login(ctx, &email, &password).await,
        Command::Signup {
            username,
            email,
            password,
        } => account::signup(ctx, &username, &email, &password).await,
        Command::Logout => account::logout(ctx),
        Command::Whoami => account::whoami(ctx),
        Command::Route { path } => overview::route(ctx, &path),
        Command::Dashboard => overview::dashboard(ctx).await,
        Command::Chambers { id } => overview::chambers(ctx, id).await,
        Command::Checklist { command } => checklist::run(ctx, command).await,
        Command::Issues { command } => issues::run(ctx, command).await,
        Command::Admin { command } => admin::run(ctx, command).await,
        Command::Profile { command } => profile::run(ctx, command).await,
    }
}
