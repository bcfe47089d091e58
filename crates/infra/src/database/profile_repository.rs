//! Profile cache repository implementation using SQLite
//!
//! Stores the full record as a JSON column keyed by login. Reads are
//! tolerant: a row that no longer parses is treated as a cache miss rather
//! than failing the lookup.

use std::sync::Arc;

use async_trait::async_trait;
use hubcard_core::ProfileCacheRepository;
use hubcard_domain::{HubcardError, ProfileRecord, Result as DomainResult};
use rusqlite::params;
use tokio::task;
use tracing::warn;

use super::manager::DbManager;
use crate::errors::InfraError;

/// SQLite-backed implementation of [`ProfileCacheRepository`]
pub struct SqliteProfileRepository {
    db: Arc<DbManager>,
}

impl SqliteProfileRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileCacheRepository for SqliteProfileRepository {
    async fn get(&self, login: &str) -> DomainResult<Option<ProfileRecord>> {
        let db = Arc::clone(&self.db);
        let login = login.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<ProfileRecord>> {
            let conn = db.get_connection()?;

            let result = conn.query_row(
                "SELECT record FROM profiles WHERE login = ?1",
                params![&login],
                |row| row.get::<_, String>(0),
            );

            let raw = match result {
                Ok(raw) => raw,
                Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
                Err(err) => return Err(InfraError::from(err).into()),
            };

            match serde_json::from_str::<ProfileRecord>(&raw) {
                Ok(record) => Ok(Some(record)),
                Err(err) => {
                    warn!(login = %login, error = %err, "cached record is unreadable, treating as miss");
                    Ok(None)
                }
            }
        })
        .await
        .map_err(map_join_error)?
    }

    async fn upsert(&self, record: ProfileRecord) -> DomainResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<()> {
            let raw = serde_json::to_string(&record).map_err(InfraError::from)?;
            let conn = db.get_connection()?;
            conn.execute(
                "INSERT INTO profiles (login, record, fetched_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(login) DO UPDATE SET
                    record = excluded.record,
                    fetched_at = excluded.fetched_at",
                params![&record.login, &raw, &record.fetched_at],
            )
            .map_err(InfraError::from)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn delete(&self, login: &str) -> DomainResult<()> {
        let db = Arc::clone(&self.db);
        let login = login.to_string();

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            conn.execute("DELETE FROM profiles WHERE login = ?1", params![&login])
                .map_err(InfraError::from)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }
}

fn map_join_error(err: task::JoinError) -> HubcardError {
    HubcardError::Internal(format!("Task join error: {err}"))
}
