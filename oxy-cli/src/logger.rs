//! Logging Infrastructure
//!
//! Console logs go to stderr so command output on stdout stays clean.
//! With a log directory:
//! - Daily rotating application logs (deleted after [`APP_LOG_RETENTION_DAYS`])
//! - Daily rotating audit logs for portal mutations (never deleted)

use chrono::{Local, NaiveDate};
use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, filter::filter_fn, fmt, prelude::*};

pub const APP_LOG_RETENTION_DAYS: i64 = 14;

/// Remove `app-YYYY-MM-DD.log` files older than the retention window
pub fn cleanup_old_logs(log_dir: &Path) -> anyhow::Result<usize> {
    let app_log_dir = log_dir.join("app");
    if !app_log_dir.exists() {
        return Ok(0);
    }
    let cutoff = (Local::now() - chrono::Duration::days(APP_LOG_RETENTION_DAYS)).date_naive();

    let mut removed = 0;
    for entry in fs::read_dir(app_log_dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if let Some(date_part) = name
            .strip_prefix("app.")
            .or_else(|| name.strip_prefix("app-"))
            .map(|d| d.trim_end_matches(".log"))
            && let Ok(date) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            && date < cutoff
        {
            fs::remove_file(&path)?;
            removed += 1;
        }
    }
    Ok(removed)
}

/// Initialize logging
///
/// # Arguments
/// * `level` - Log level (e.g., "info", "debug"); `RUST_LOG` overrides it
/// * `json_format` - JSON console output instead of the human format
/// * `log_dir` - Optional directory for rotating file logs
pub fn init_logger(level: &str, json_format: bool, log_dir: Option<&Path>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        fmt::layer()
            .with_target(false)
            .without_time()
            .with_writer(std::io::stderr)
            .boxed()
    };

    let (app_layer, audit_layer) = match log_dir {
        Some(dir) => {
            let app_dir = dir.join("app");
            let audit_dir = dir.join("audit");
            fs::create_dir_all(&app_dir)?;
            fs::create_dir_all(&audit_dir)?;
            cleanup_old_logs(dir)?;

            let app_log = RollingFileAppender::new(Rotation::DAILY, app_dir, "app");
            let app_layer = fmt::layer()
                .json()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_writer(std::sync::Mutex::new(app_log))
                .with_filter(filter_fn(|meta| meta.target() != "audit"));

            let audit_log = RollingFileAppender::new(Rotation::DAILY, audit_dir, "audit");
            let audit_layer = fmt::layer()
                .json()
                .with_target(true)
                .with_writer(std::sync::Mutex::new(audit_log))
                .with_filter(filter_fn(|meta| meta.target() == "audit"));

            (Some(app_layer), Some(audit_layer))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(app_layer)
        .with(audit_layer)
        .try_init()?;
    Ok(())
}

/// Audit log helper - records portal mutations made from the CLI
///
/// ```ignore
/// audit_log!(user_id, "assign", "issue:5", "engineer:7");
/// ```
macro_rules! audit_log {
    ($user_id:expr, $action:expr, $resource:expr) => {
        tracing::info!(
            target: "audit",
            user_id = $user_id,
            action = $action,
            resource = $resource,
            timestamp = chrono::Local::now().to_rfc3339(),
            "AUDIT"
        );
    };
    ($user_id:expr, $action:expr, $resource:expr, $details:expr) => {
        tracing::info!(
            target: "audit",
            user_id = $user_id,
            action = $action,
            resource = $resource,
            details = $details,
            timestamp = chrono::Local::now().to_rfc3339(),
            "AUDIT"
        );
    };
}
