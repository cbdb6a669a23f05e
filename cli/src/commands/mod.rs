//! Command implementations, one module per top-level subcommand.

pub mod api;
pub mod dashboard;
pub mod init;

use anyhow::Result;

use crate::cli::{Cli, Commands};

/// Dispatches a parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init {
            db_path,
        } => init::run(&db_path).await,
        Commands::Api {
            db_path,
            command,
        } => api::run(&db_path, command).await,
        Commands::Dashboard {
            api_base,
            admin_token,
            command,
        } => dashboard::run(&api_base, admin_token, command).await,
    }
}
