//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use culture_archive_shared::{ArchiveIndexInput, ContentKind};

/// Top-level arguments.
#[derive(Parser)]
#[command(name = "ca-cli", version, about = "Cultural archive operator CLI", long_about = None)]
pub struct Cli {
    /// Command to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Create the archive index schema.
    Init {
        /// SQLite database path.
        #[arg(long, env = "DB_PATH", default_value = "./data/archive.db")]
        db_path: PathBuf,
    },
    /// Read and write archive index rows directly in the database, printing
    /// JSON.
    Api {
        /// SQLite database path.
        #[arg(long, env = "DB_PATH", default_value = "./data/archive.db")]
        db_path: PathBuf,
        /// Archive operation.
        #[command(subcommand)]
        command: ApiCommands,
    },
    /// Aggregated article and photograph feed from the content APIs.
    Dashboard {
        /// API base URL, e.g. `http://localhost:3000/api`.
        #[arg(long, env = "ARCHIVE_API_BASE", default_value = "http://localhost:3000/api")]
        api_base: String,
        /// Bearer token forwarded on delete requests.
        #[arg(long, env = "ADMIN_TOKEN", hide_env_values = true)]
        admin_token: Option<String>,
        /// Dashboard operation.
        #[command(subcommand)]
        command: DashboardCommands,
    },
}

/// Direct archive index operations.
#[derive(Subcommand)]
pub enum ApiCommands {
    /// List archive index rows, newest first.
    ListArchives,
    /// Show one archive index row.
    GetArchive {
        /// Row id.
        #[arg(long)]
        id: i64,
    },
    /// Insert an archive index row.
    CreateArchive {
        /// Field values.
        #[command(flatten)]
        fields: ArchiveFieldArgs,
    },
    /// Overwrite the four fields of an archive index row.
    UpdateArchive {
        /// Row id.
        #[arg(long)]
        id: i64,
        /// Replacement field values.
        #[command(flatten)]
        fields: ArchiveFieldArgs,
    },
    /// Delete an archive index row.
    DeleteArchive {
        /// Row id.
        #[arg(long)]
        id: i64,
    },
}

/// The four archive fields. All are required by validation; they are
/// optional here so the error names every missing field at once.
#[derive(Args, Debug, Clone)]
pub struct ArchiveFieldArgs {
    /// Category, e.g. `museum`.
    #[arg(long = "class")]
    pub class: Option<String>,
    /// Site name.
    #[arg(long)]
    pub web_name: Option<String>,
    /// Organization name.
    #[arg(long)]
    pub org_name: Option<String>,
    /// Organization website URL.
    #[arg(long)]
    pub org_web_link: Option<String>,
}

impl From<ArchiveFieldArgs> for ArchiveIndexInput {
    fn from(args: ArchiveFieldArgs) -> Self {
        Self {
            class: args.class,
            web_name: args.web_name,
            org_name: args.org_name,
            org_web_link: args.org_web_link,
        }
    }
}

/// Operations on the aggregated content feed.
#[derive(Subcommand)]
pub enum DashboardCommands {
    /// Print articles and photographs merged by last update.
    List,
    /// Delete one article or photograph, then print the refreshed feed.
    Delete {
        /// Source API of the item.
        #[arg(long, value_enum)]
        kind: KindArg,
        /// Item id within its source.
        #[arg(long)]
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

/// Command-line spelling of [`ContentKind`].
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    /// An item of the Article API.
    Article,
    /// An item of the Photograph API.
    Photograph,
}

impl From<KindArg> for ContentKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Article => ContentKind::Article,
            KindArg::Photograph => ContentKind::Photograph,
        }
    }
}
