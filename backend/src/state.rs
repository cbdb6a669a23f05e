use std::sync::Arc;

use anyhow::Result;
use culture_archive_shared::archive_store::{ArchiveRepository, SqliteArchiveStore};

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    archives: Arc<dyn ArchiveRepository>,
    admin_token: Option<Arc<str>>,
}

impl AppState {
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        let store = SqliteArchiveStore::open(&config.db_path)?;
        Ok(Self::new(Arc::new(store), config.admin_token.as_deref()))
    }

    pub fn new(archives: Arc<dyn ArchiveRepository>, admin_token: Option<&str>) -> Self {
        Self {
            archives,
            admin_token: admin_token.map(Arc::from),
        }
    }

    pub fn archives(&self) -> &dyn ArchiveRepository {
        self.archives.as_ref()
    }

    pub fn admin_token(&self) -> Option<&str> {
        self.admin_token.as_deref()
    }
}
