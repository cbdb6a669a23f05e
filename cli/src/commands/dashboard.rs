//! `dashboard` subcommands over the content APIs.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use culture_archive_shared::{ContentItem, ContentKind, DashboardState};

use crate::{
    cli::DashboardCommands,
    feed_client::FeedClient,
    render::{content_table, kind_label},
};

/// Runs one dashboard operation against the APIs under `api_base`.
pub async fn run(api_base: &str, admin_token: Option<String>, command: DashboardCommands) -> Result<()> {
    let client = FeedClient::new(api_base, admin_token)?;

    match command {
        DashboardCommands::List => {
            let items = load_items(&client).await?;
            print_items(&items);
            Ok(())
        },
        DashboardCommands::Delete {
            kind,
            id,
            yes,
        } => {
            let kind = ContentKind::from(kind);
            let items = load_items(&client).await?;
            let Some(item) = items
                .iter()
                .find(|item| item.kind() == kind && item.id() == id)
            else {
                bail!("{kind} {id} is not in the current feed");
            };

            if !yes && !confirm(&delete_prompt(item))? {
                tracing::info!("Delete cancelled");
                return Ok(());
            }

            match client.delete(kind, &id).await {
                Ok(message) => {
                    let message = message.unwrap_or_else(|| format!("{} 已成功刪除", kind_label(kind)));
                    tracing::info!("{message}");
                },
                Err(err) => bail!("刪除失敗：{err}"),
            }

            let items = load_items(&client).await?;
            print_items(&items);
            Ok(())
        },
    }
}

/// One full load cycle through the dashboard state machine.
async fn load_items(client: &FeedClient) -> Result<Vec<ContentItem>> {
    let mut state = DashboardState::default();
    state.begin_load();
    state.finish_load(client.load().await);

    match state {
        DashboardState::Ready(items) => Ok(items),
        DashboardState::Errored(reason) => bail!("載入內容時發生錯誤: {reason}"),
        DashboardState::Idle | DashboardState::Loading => bail!("feed load did not complete"),
    }
}

fn print_items(items: &[ContentItem]) {
    if items.is_empty() {
        println!("尚無內容");
    } else {
        print!("{}", content_table(items));
    }
}

/// Confirmation question naming the item about to be deleted.
pub fn delete_prompt(item: &ContentItem) -> String {
    let noun = match item.kind() {
        ContentKind::Article => "文章",
        ContentKind::Photograph => "照片",
    };
    format!("確定要刪除{noun}「{}」嗎？此操作無法復原。", item.title())
}

fn confirm(prompt: &str) -> Result<bool> {
    let mut stdout = io::stdout();
    write!(stdout, "{prompt} [y/N] ")?;
    stdout.flush()?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("failed to read confirmation")?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
