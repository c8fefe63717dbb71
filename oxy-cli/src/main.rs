#[macro_use]
mod logger;
mod cli;
mod commands;

use clap::Parser;
use cli::Cli;
use commands::Context;
use oxy_client::{ClientConfig, NetworkHttpClient, RouteTable, Session, TokenStore};
use std::process::ExitCode;

fn client_config(cli: &Cli) -> ClientConfig {
    let mut config = ClientConfig::from_env();
    if let Some(url) = &cli.api_url {
        config = config.with_base_url(url.as_str());
    }
    if let Some(path) = &cli.token_path {
        config = config.with_token_path(path.as_path());
    }
    if let Some(seconds) = cli.timeout {
        config = config.with_timeout(seconds);
    }
    config
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = client_config(&cli);
    tracing::debug!(base_url = %config.base_url, token_path = %config.token_path.display(), "client configured");

    let client = NetworkHttpClient::new(&config)?;
    let session = Session::init(client.clone(), TokenStore::new(config.token_path.clone())).await;

    let mut ctx = Context {
        client,
        session,
        routes: RouteTable::standard(),
        json: cli.json,
    };
    commands::run(&mut ctx, cli.command).await
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if let Err(e) = logger::init_logger(&cli.log_level, cli.json_logs, cli.log_dir.as_deref()) {
        eprintln!("Failed to initialize logging: {e:#}");
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
