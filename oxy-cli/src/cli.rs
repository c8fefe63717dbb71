//! Command-line definitions

use clap::{Args, Parser, Subcommand};
use shared::models::{CheckType, IssueCategory, IssueStatus, Role, Severity};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "oxy")]
#[command(version, about = "Oxygen chamber maintenance portal client")]
pub struct Cli {
    /// Backend base URL (default from OXY_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Token file (default from OXY_TOKEN_PATH)
    #[arg(long, global = true)]
    pub token_path: Option<PathBuf>,

    /// Request timeout in seconds (default from OXY_TIMEOUT_SECS)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[arg(long, global = true, env = "OXY_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// JSON log lines on stderr
    #[arg(long, global = true, default_value_t = false)]
    pub json_logs: bool,

    /// Also write rotating log files here
    #[arg(long, global = true, env = "OXY_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and store the token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "OXY_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account
    Signup {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "OXY_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored token
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Check whether the current user may open a portal route
    Route { path: String },
    /// Role dashboard summary
    Dashboard,
    /// Chambers assigned to the current user
    Chambers {
        /// Show one chamber
        id: Option<i64>,
    },
    /// Checklist templates and submissions
    Checklist {
        #[command(subcommand)]
        command: ChecklistCommand,
    },
    /// Issue reporting and assignment
    Issues {
        #[command(subcommand)]
        command: IssueCommand,
    },
    /// Administration
    Admin {
        #[command(subcommand)]
        command: AdminCommand,
    },
    /// Own profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum ChecklistCommand {
    /// Show the item template of a check type
    Template {
        chamber_id: i64,
        #[arg(long = "type", default_value = "Daily")]
        check_type: CheckType,
    },
    /// Fill and submit a checklist from an answer sheet (JSON)
    Submit {
        chamber_id: i64,
        /// Answer sheet; file paths inside it are relative to the working directory
        answers: PathBuf,
        /// Only validate, do not send
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
    /// Own past submissions
    Submissions,
}

#[derive(Debug, Subcommand)]
pub enum IssueCommand {
    /// List issues
    List(IssueListArgs),
    /// Engineers available for assignment
    Engineers,
    /// Assign an engineer to an unassigned issue
    Assign { issue_id: i64, engineer_id: i64 },
    /// Report a fault against a chamber
    Report(IssueReportArgs),
}

#[derive(Debug, Args)]
pub struct IssueListArgs {
    /// Every issue instead of the caller's own list
    #[arg(long, default_value_t = false)]
    pub all: bool,
    #[arg(long)]
    pub status: Option<IssueStatus>,
    #[arg(long)]
    pub severity: Option<Severity>,
    #[arg(long)]
    pub category: Option<IssueCategory>,
    #[arg(long, default_value_t = false)]
    pub unassigned: bool,
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    #[arg(long, default_value_t = 20)]
    pub per_page: u32,
}

#[derive(Debug, Args)]
pub struct IssueReportArgs {
    pub chamber_id: i64,
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: String,
    #[arg(long, default_value = "Other")]
    pub category: IssueCategory,
    #[arg(long, default_value = "Minor")]
    pub severity: Severity,
    #[arg(long, default_value_t = false)]
    pub do_not_operate: bool,
    /// Evidence files, repeatable
    #[arg(long = "upload")]
    pub uploads: Vec<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Portal-wide counters
    Stats,
    Customers {
        #[command(subcommand)]
        command: CustomerCommand,
    },
    Chambers {
        #[command(subcommand)]
        command: ChamberCommand,
    },
    Users {
        #[command(subcommand)]
        command: UserCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum CustomerCommand {
    List,
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        contact_person: Option<String>,
        #[arg(long)]
        contact_email: Option<String>,
        #[arg(long)]
        contact_phone: Option<String>,
    },
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        contact_person: Option<String>,
        #[arg(long)]
        contact_email: Option<String>,
        #[arg(long)]
        contact_phone: Option<String>,
    },
    Delete { id: i64 },
}

#[derive(Debug, Subcommand)]
pub enum ChamberCommand {
    List,
    Create {
        #[arg(long)]
        serial_number: String,
        #[arg(long)]
        model_name: String,
        #[arg(long)]
        customer_id: Option<i64>,
        /// YYYY-MM-DD
        #[arg(long)]
        installation_date: Option<String>,
        /// YYYY-MM-DD
        #[arg(long)]
        warranty_expiry_date: Option<String>,
    },
    Update {
        id: i64,
        #[arg(long)]
        serial_number: Option<String>,
        #[arg(long)]
        model_name: Option<String>,
        #[arg(long)]
        customer_id: Option<i64>,
        #[arg(long)]
        installation_date: Option<String>,
        #[arg(long)]
        warranty_expiry_date: Option<String>,
    },
    Delete { id: i64 },
}

#[derive(Debug, Subcommand)]
pub enum UserCommand {
    List,
    Create {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "OXY_NEW_USER_PASSWORD", hide_env_values = true)]
        password: String,
        /// Operator, "Site Manager", "Oxygens Admin" or Engineer
        #[arg(long)]
        role: Role,
        #[arg(long)]
        customer_id: Option<i64>,
    },
    Update {
        id: i64,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        role: Option<Role>,
        #[arg(long)]
        customer_id: Option<i64>,
    },
    Delete { id: i64 },
}

#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    Show,
    Update {
        #[arg(long)]
        full_name: Option<String>,
        #[arg(long)]
        bio: Option<String>,
    },
    /// Upload a profile image
    Image { path: PathBuf },
}
