//! SQLite-backed key-value store using rusqlite.

use crate::storage::kv::{KeyValueStore, StorageError};
use crate::storage::schema::{CURRENT_VERSION, SCHEMA, SCHEMA_VERSION_TABLE};
use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;

/// Database wrapper for SQLite operations.
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Open or create a database at the given path.
    pub fn open(path: &Path) -> Result<Self, DatabaseError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| DatabaseError::IoError(e.to_string()))?;
        }

        let conn =
            Connection::open(path).map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

        let db = Self {
            conn: Mutex::new(conn),
        };
        db.initialize()?;

        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, DatabaseError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

        let db = Self {
            conn: Mutex::new(conn),
        };
        db.initialize()?;

        Ok(db)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, DatabaseError> {
        self.conn
            .lock()
            .map_err(|_| DatabaseError::ConnectionFailed("connection lock poisoned".to_string()))
    }

    /// Initialize the database schema.
    fn initialize(&self) -> Result<(), DatabaseError> {
        let conn = self.lock()?;

        conn.execute_batch(SCHEMA_VERSION_TABLE)
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;

        let current_version = Self::schema_version(&conn)?;

        if current_version < CURRENT_VERSION {
            Self::migrate(&conn, current_version)?;
        }

        Ok(())
    }

    /// Get the current schema version.
    pub fn get_schema_version(&self) -> Result<i32, DatabaseError> {
        let conn = self.lock()?;
        Self::schema_version(&conn)
    }

    fn schema_version(conn: &Connection) -> Result<i32, DatabaseError> {
        let result: SqliteResult<i32> = conn.query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_version",
            [],
            |row| row.get(0),
        );

        match result {
            Ok(version) => Ok(version),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
            Err(e) => Err(DatabaseError::QueryFailed(e.to_string())),
        }
    }

    /// Run database migrations.
    fn migrate(conn: &Connection, from_version: i32) -> Result<(), DatabaseError> {
        if from_version < 1 {
            conn.execute_batch(SCHEMA)
                .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;

            conn.execute(
                "INSERT INTO schema_version (version, applied_at) VALUES (?, datetime('now'))",
                [CURRENT_VERSION],
            )
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;

            tracing::info!("Database migrated to version {}", CURRENT_VERSION);
        }

        Ok(())
    }

    // ========== Key-Value Operations ==========

    /// Read the value stored under a key.
    pub fn get_value(&self, key: &str) -> Result<Option<String>, DatabaseError> {
        let conn = self.lock()?;

        conn.query_row(
            "SELECT value FROM kv_store WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| DatabaseError::QueryFailed(e.to_string()))
    }

    /// Insert or replace the value stored under a key.
    pub fn put_value(&self, key: &str, value: &str) -> Result<(), DatabaseError> {
        let conn = self.lock()?;

        conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().to_rfc3339()],
        )
        .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        Ok(())
    }

    /// Delete a key. Returns whether a row was removed.
    pub fn delete_value(&self, key: &str) -> Result<bool, DatabaseError> {
        let conn = self.lock()?;

        let rows = conn
            .execute("DELETE FROM kv_store WHERE key = ?1", params![key])
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        Ok(rows > 0)
    }

    /// List all stored keys in lexical order.
    pub fn list_keys(&self) -> Result<Vec<String>, DatabaseError> {
        let conn = self.lock()?;

        let mut stmt = conn
            .prepare("SELECT key FROM kv_store ORDER BY key")
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| row.get(0))
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        rows.collect::<SqliteResult<Vec<String>>>()
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl KeyValueStore for Database {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get_value(key)?)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Ok(self.put_value(key, value)?)
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.delete_value(key)?;
        Ok(())
    }
}

/// Database errors.
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<DatabaseError> for StorageError {
    fn from(e: DatabaseError) -> Self {
        match e {
            DatabaseError::IoError(msg) => StorageError::Io(msg),
            other => StorageError::Database(other.to_string()),
        }
    }
}
