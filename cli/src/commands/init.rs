//! `init` subcommand.

use std::path::Path;

use anyhow::Result;
use culture_archive_shared::archive_store::{SqliteArchiveStore, ARCHIVE_TABLE};

/// Creates the database file and its table if missing.
pub async fn run(db_path: &Path) -> Result<()> {
    // Opening the store creates the table when it is missing.
    SqliteArchiveStore::open(db_path)?;
    tracing::info!("Table `{ARCHIVE_TABLE}` ready in {}", db_path.display());
    Ok(())
}
