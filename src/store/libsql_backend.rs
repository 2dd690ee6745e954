//! libSQL-backed onboarding status store.
//!
//! Supports local file and in-memory databases. The schema is tiny (one
//! keyed table) but still version-tracked so later additions can migrate
//! installed databases in place.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use libsql::{Connection, Database as LibSqlDatabase, params};
use tracing::info;

use crate::error::StoreError;
use crate::model::Identity;
use crate::onboarding::OnboardingStatus;
use crate::store::traits::OnboardingStatusStore;

/// A single migration step.
struct Migration {
    version: i64,
    name: &'static str,
    sql: &'static str,
}

/// All migrations in order. Add new versions to the end.
static MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "onboarding_status",
    sql: r#"
        CREATE TABLE IF NOT EXISTS onboarding_status (
            identity TEXT PRIMARY KEY,
            status TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
    "#,
}];

/// libSQL status store.
///
/// Holds a single connection reused for all operations;
/// `libsql::Connection` is `Send + Sync` and safe for concurrent async use.
pub struct LibSqlStatusStore {
    #[allow(dead_code)]
    db: Arc<LibSqlDatabase>,
    conn: Connection,
}

impl LibSqlStatusStore {
    /// Open (or create) a local database file and run migrations.
    pub async fn new_local(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StoreError::Open(format!("Failed to create store directory: {e}")))?;
        }

        let db = libsql::Builder::new_local(path)
            .build()
            .await
            .map_err(|e| StoreError::Open(format!("Failed to open libSQL database: {e}")))?;
        let conn = db
            .connect()
            .map_err(|e| StoreError::Open(format!("Failed to create connection: {e}")))?;

        let store = Self {
            db: Arc::new(db),
            conn,
        };
        store.run_migrations().await?;
        info!(path = %path.display(), "Onboarding status store opened");
        Ok(store)
    }

    /// Create an in-memory store (for tests).
    pub async fn new_memory() -> Result<Self, StoreError> {
        let db = libsql::Builder::new_local(":memory:")
            .build()
            .await
            .map_err(|e| StoreError::Open(format!("Failed to create in-memory database: {e}")))?;
        let conn = db
            .connect()
            .map_err(|e| StoreError::Open(format!("Failed to create connection: {e}")))?;

        let store = Self {
            db: Arc::new(db),
            conn,
        };
        store.run_migrations().await?;
        Ok(store)
    }

    /// Apply any migrations newer than the recorded schema version.
    async fn run_migrations(&self) -> Result<(), StoreError> {
        self.conn
            .execute(
                "CREATE TABLE IF NOT EXISTS _migrations (
                    version INTEGER PRIMARY KEY,
                    name TEXT NOT NULL,
                    applied_at TEXT NOT NULL
                )",
                (),
            )
            .await
            .map_err(|e| StoreError::Query(format!("Failed to create migrations table: {e}")))?;

        let mut rows = self
            .conn
            .query("SELECT COALESCE(MAX(version), 0) FROM _migrations", ())
            .await
            .map_err(|e| StoreError::Query(format!("Failed to read schema version: {e}")))?;
        let current: i64 = match rows
            .next()
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?
        {
            Some(row) => row.get(0).map_err(|e| StoreError::Query(e.to_string()))?,
            None => 0,
        };

        for migration in MIGRATIONS.iter().filter(|m| m.version > current) {
            self.conn
                .execute_batch(migration.sql)
                .await
                .map_err(|e| {
                    StoreError::Query(format!("Migration {} failed: {e}", migration.name))
                })?;
            self.conn
                .execute(
                    "INSERT INTO _migrations (version, name, applied_at) VALUES (?1, ?2, ?3)",
                    params![migration.version, migration.name, Utc::now().to_rfc3339()],
                )
                .await
                .map_err(|e| {
                    StoreError::Query(format!("Failed to record migration {}: {e}", migration.name))
                })?;
        }
        Ok(())
    }
}

fn status_to_str(status: OnboardingStatus) -> &'static str {
    match status {
        OnboardingStatus::NotStarted => "not_started",
        OnboardingStatus::Started => "started",
    }
}

fn str_to_status(s: &str) -> OnboardingStatus {
    match s {
        "started" => OnboardingStatus::Started,
        _ => OnboardingStatus::NotStarted,
    }
}

#[async_trait]
impl OnboardingStatusStore for LibSqlStatusStore {
    async fn status(&self, identity: &Identity) -> Result<OnboardingStatus, StoreError> {
        let mut rows = self
            .conn
            .query(
                "SELECT status FROM onboarding_status WHERE identity = ?1",
                params![identity.as_str()],
            )
            .await
            .map_err(|e| StoreError::Query(format!("Failed to read status: {e}")))?;

        match rows
            .next()
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?
        {
            Some(row) => {
                let s: String = row.get(0).map_err(|e| StoreError::Query(e.to_string()))?;
                Ok(str_to_status(&s))
            }
            None => Ok(OnboardingStatus::NotStarted),
        }
    }

    async fn set_status(
        &self,
        identity: &Identity,
        status: OnboardingStatus,
    ) -> Result<(), StoreError> {
        self.conn
            .execute(
                "INSERT INTO onboarding_status (identity, status, updated_at)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(identity) DO UPDATE SET
                     status = excluded.status,
                     updated_at = excluded.updated_at",
                params![
                    identity.as_str(),
                    status_to_str(status),
                    Utc::now().to_rfc3339()
                ],
            )
            .await
            .map_err(|e| StoreError::Query(format!("Failed to write status: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn absent_identity_reads_not_started() {
        let store = LibSqlStatusStore::new_memory().await.unwrap();
        let status = store.status(&Identity::from("@nobody")).await.unwrap();
        assert_eq!(status, OnboardingStatus::NotStarted);
    }

    #[tokio::test]
    async fn set_then_read() {
        let store = LibSqlStatusStore::new_memory().await.unwrap();
        let id = Identity::from("@alice");
        store
            .set_status(&id, OnboardingStatus::Started)
            .await
            .unwrap();
        assert_eq!(store.status(&id).await.unwrap(), OnboardingStatus::Started);
        // Other identities are unaffected.
        assert_eq!(
            store.status(&Identity::from("@bob")).await.unwrap(),
            OnboardingStatus::NotStarted
        );
    }

    #[tokio::test]
    async fn set_overwrites() {
        let store = LibSqlStatusStore::new_memory().await.unwrap();
        let id = Identity::from("@alice");
        store
            .set_status(&id, OnboardingStatus::Started)
            .await
            .unwrap();
        store
            .set_status(&id, OnboardingStatus::NotStarted)
            .await
            .unwrap();
        assert_eq!(
            store.status(&id).await.unwrap(),
            OnboardingStatus::NotStarted
        );
    }

    #[tokio::test]
    async fn status_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("status.db");
        let id = Identity::from("@alice");

        {
            let store = LibSqlStatusStore::new_local(&path).await.unwrap();
            store
                .set_status(&id, OnboardingStatus::Started)
                .await
                .unwrap();
        }

        let reopened = LibSqlStatusStore::new_local(&path).await.unwrap();
        assert_eq!(
            reopened.status(&id).await.unwrap(),
            OnboardingStatus::Started
        );
    }
}
