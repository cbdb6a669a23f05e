//! `api` subcommands: archive index rows read and written in place.

use std::path::Path;

use anyhow::{bail, Result};
use culture_archive_shared::{
    archive_store::{ArchiveRepository, SqliteArchiveStore},
    messages, ArchiveFields, ArchiveIndexInput, Envelope,
};
use serde::Serialize;

use crate::cli::{ApiCommands, ArchiveFieldArgs};

/// Runs one archive operation against the database at `db_path` and
/// prints the resulting envelope as pretty JSON.
pub async fn run(db_path: &Path, command: ApiCommands) -> Result<()> {
    let store = SqliteArchiveStore::open(db_path)?;

    match command {
        ApiCommands::ListArchives => print_json(&Envelope::data(store.list().await?)),
        ApiCommands::GetArchive {
            id,
        } => match store.find(id).await? {
            Some(archive) => print_json(&Envelope::data(archive)),
            None => bail!("{} (id {id})", messages::NOT_FOUND),
        },
        ApiCommands::CreateArchive {
            fields,
        } => {
            let archive = store.create(validate(fields)?).await?;
            tracing::info!("Created archive index {}", archive.id);
            print_json(&Envelope::data(archive))
        },
        ApiCommands::UpdateArchive {
            id,
            fields,
        } => {
            let fields = validate(fields)?;
            match store.update(id, fields).await? {
                Some(archive) => print_json(&Envelope::data(archive)),
                None => bail!("{} (id {id})", messages::NOT_FOUND),
            }
        },
        ApiCommands::DeleteArchive {
            id,
        } => {
            if !store.delete(id).await? {
                bail!("{} (id {id})", messages::NOT_FOUND);
            }
            print_json(&Envelope::message(messages::DELETED))
        },
    }
}

fn validate(args: ArchiveFieldArgs) -> Result<ArchiveFields> {
    ArchiveIndexInput::from(args)
        .validate()
        .map_err(|err| anyhow::anyhow!("{}: {}", messages::FIELDS_REQUIRED, err.missing.join(", ")))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
