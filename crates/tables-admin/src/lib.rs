// ABOUTME: Library exports for tables-admin functionality
// ABOUTME: Resolves settings, connects the client, and dispatches commands

use anyhow::{Context, Result};
use tables_client::TablesClient;
use tracing::{debug, warn};

pub mod commands;
pub mod config;
pub mod output;

pub use commands::{Cli, Command, RowsCommand, TablesCommand, WorkspacesCommand};
pub use config::{AdminConfig, Overrides};

use output::Printer;

/// Run the command parsed from the command line.
pub async fn run_command(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => AdminConfig::load_from(path)?,
        None => AdminConfig::load()?,
    };

    let overrides = Overrides {
        endpoint: cli.endpoint,
        token: cli.token,
        timeout_secs: cli.timeout,
        retries: cli.retries,
    };
    let client_config = config::resolve(overrides, config);
    if client_config.token.is_none() {
        warn!("No access token configured; requests will be unauthenticated");
    }
    debug!(
        endpoint = %client_config.channel.address,
        timeout = ?client_config.settings.timeout,
        "resolved client settings"
    );

    let address = client_config.channel.address.clone();
    let client = TablesClient::connect(client_config)
        .await
        .with_context(|| format!("Failed to connect to {}", address))?;

    let printer = Printer::new(cli.json);
    match cli.command {
        Command::Tables(cmd) => commands::tables::run(&client, printer, cmd).await,
        Command::Workspaces(cmd) => commands::workspaces::run(&client, printer, cmd).await,
        Command::Rows(cmd) => commands::rows::run(&client, printer, cmd).await,
    }
}
