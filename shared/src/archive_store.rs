//! SQLite persistence for archive index rows.

use std::{path::Path, sync::Arc};

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::archive::{ArchiveFields, ArchiveIndex};

/// SQLite table holding archive index rows.
pub const ARCHIVE_TABLE: &str = "archive_index";

const SELECT_COLUMNS: &str =
    "id, class, web_name, org_name, org_web_link, created_at, updated_at";

/// Persistence seam for archive index rows. Each call touches at most one
/// row, except `list`.
#[async_trait]
pub trait ArchiveRepository: Send + Sync {
    /// All rows, newest id first.
    async fn list(&self) -> Result<Vec<ArchiveIndex>>;

    /// The row with this id, if any.
    async fn find(&self, id: i64) -> Result<Option<ArchiveIndex>>;

    /// Inserts a row; the store assigns `id` and both timestamps.
    async fn create(&self, fields: ArchiveFields) -> Result<ArchiveIndex>;

    /// Overwrites the four business fields. `None` when the row is gone.
    async fn update(&self, id: i64, fields: ArchiveFields) -> Result<Option<ArchiveIndex>>;

    /// `false` when there was nothing to delete.
    async fn delete(&self, id: i64) -> Result<bool>;
}

/// SQLite-backed repository. The single connection is guarded by a mutex
/// and only touched from blocking tasks.
#[derive(Clone)]
pub struct SqliteArchiveStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteArchiveStore {
    /// Opens (or creates) the database file in WAL mode and ensures the
    /// table exists. Missing parent directories are created.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let conn = Connection::open(path)
            .with_context(|| format!("failed to open archive database {}", path.display()))?;
        conn.pragma_update_and_check(None, "journal_mode", "WAL", |_| Ok(()))?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        Self::from_connection(conn)
    }

    /// Private in-memory database, used by tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("failed to open in-memory database")?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        ensure_schema(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    async fn with_conn<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let conn = conn.lock();
            op(&conn)
        })
        .await
        .context("archive store task aborted")?
    }
}

#[async_trait]
impl ArchiveRepository for SqliteArchiveStore {
    async fn list(&self) -> Result<Vec<ArchiveIndex>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {SELECT_COLUMNS} FROM {ARCHIVE_TABLE} ORDER BY id DESC"
            ))?;
            let rows = stmt
                .query_map([], read_row)?
                .collect::<rusqlite::Result<Vec<_>>>()
                .context("failed to read archive rows")?;
            Ok(rows)
        })
        .await
    }

    async fn find(&self, id: i64) -> Result<Option<ArchiveIndex>> {
        self.with_conn(move |conn| find_on(conn, id)).await
    }

    async fn create(&self, fields: ArchiveFields) -> Result<ArchiveIndex> {
        self.with_conn(move |conn| {
            let now = now_millis();
            conn.execute(
                &format!(
                    "INSERT INTO {ARCHIVE_TABLE} (class, web_name, org_name, org_web_link, \
                     created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?5)"
                ),
                params![
                    fields.class,
                    fields.web_name,
                    fields.org_name,
                    fields.org_web_link,
                    now
                ],
            )
            .context("failed to insert archive row")?;
            let id = conn.last_insert_rowid();
            find_on(conn, id)?.with_context(|| format!("inserted archive row {id} not readable"))
        })
        .await
    }

    async fn update(&self, id: i64, fields: ArchiveFields) -> Result<Option<ArchiveIndex>> {
        self.with_conn(move |conn| {
            let changed = conn
                .execute(
                    &format!(
                        "UPDATE {ARCHIVE_TABLE} SET class = ?1, web_name = ?2, org_name = ?3, \
                         org_web_link = ?4, updated_at = ?5 WHERE id = ?6"
                    ),
                    params![
                        fields.class,
                        fields.web_name,
                        fields.org_name,
                        fields.org_web_link,
                        now_millis(),
                        id
                    ],
                )
                .with_context(|| format!("failed to update archive row {id}"))?;
            if changed == 0 {
                return Ok(None);
            }
            find_on(conn, id)
        })
        .await
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        self.with_conn(move |conn| {
            let removed = conn
                .execute(&format!("DELETE FROM {ARCHIVE_TABLE} WHERE id = ?1"), params![id])
                .with_context(|| format!("failed to delete archive row {id}"))?;
            Ok(removed > 0)
        })
        .await
    }
}

/// Idempotent; safe to run on every start.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(&format!(
        "CREATE TABLE IF NOT EXISTS {ARCHIVE_TABLE} (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            class TEXT NOT NULL,
            web_name TEXT NOT NULL,
            org_name TEXT NOT NULL,
            org_web_link TEXT NOT NULL,
            created_at INTEGER NOT NULL,
            updated_at INTEGER NOT NULL
        );"
    ))
    .context("failed to create archive_index table")
}

fn find_on(conn: &Connection, id: i64) -> Result<Option<ArchiveIndex>> {
    conn.query_row(
        &format!("SELECT {SELECT_COLUMNS} FROM {ARCHIVE_TABLE} WHERE id = ?1"),
        params![id],
        read_row,
    )
    .optional()
    .with_context(|| format!("failed to read archive row {id}"))
}

fn read_row(row: &Row<'_>) -> rusqlite::Result<ArchiveIndex> {
    Ok(ArchiveIndex {
        id: row.get(0)?,
        class: row.get(1)?,
        web_name: row.get(2)?,
        org_name: row.get(3)?,
        org_web_link: row.get(4)?,
        created_at: millis_to_datetime(row.get(5)?, 5)?,
        updated_at: millis_to_datetime(row.get(6)?, 6)?,
    })
}

fn millis_to_datetime(ms: i64, column: usize) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(ms).ok_or(rusqlite::Error::IntegralValueOutOfRange(column, ms))
}

// Millisecond precision so a value read back compares equal to the one
// handed out at write time.
fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
