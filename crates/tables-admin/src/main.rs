// ABOUTME: Entry point for tables-admin CLI
// ABOUTME: Loads .env, sets up logging, and runs the parsed command

use anyhow::Result;
use clap::Parser;
use tables_admin::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let level = tables_log::level_for_verbosity(cli.verbose);
    match &cli.log_file {
        Some(path) => tables_log::init_file(path, level),
        None => tables_log::init_with_level(level),
    }

    tables_admin::run_command(cli).await
}
