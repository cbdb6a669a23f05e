//! Records, response envelope and content aggregation shared by the archive
//! backend, the dashboard frontend and the operator CLI.
//!
//! The SQLite-backed [`archive_store`] is only compiled for native targets;
//! everything else also builds for `wasm32`.

pub mod archive;
pub mod content;
pub mod dashboard;
pub mod envelope;
pub mod messages;

#[cfg(not(target_arch = "wasm32"))]
pub mod archive_store;

pub use archive::{ArchiveFields, ArchiveIndex, ArchiveIndexInput, ValidationError};
pub use content::{merge_feeds, Article, ContentItem, ContentKind, Photograph};
pub use dashboard::{DashboardState, FeedOutcome};
pub use envelope::Envelope;
