//! Keyed persisted-value store with a SQLite backend.
//!
//! The host hands edited text between surfaces through this store (the
//! editor writes its result under [`EDITOR_RESULT_KEY`]; the opener reads
//! and removes it) and uses it to autosave drafts. Writes are
//! fire-and-forget with respect to the editing core: the session never
//! waits on the store between keystrokes.

use chrono::Utc;
use rusqlite::{Connection, params};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use thiserror::Error;

use crate::session::EditorResult;

/// Key under which a confirmed editor result is handed back to the host.
pub const EDITOR_RESULT_KEY: &str = "editor_result";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// SQLite-backed key/value store for JSON values.
pub struct ValueStore {
    conn: Connection,
}

impl ValueStore {
    /// Open or create a store at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Create an in-memory store (for testing).
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> rusqlite::Result<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );",
        )
    }

    /// Save a value under a key (insert or update).
    pub fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value)?;
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)",
            params![key, json, Utc::now().to_rfc3339()],
        )?;
        tracing::debug!(key = key, "stored value");
        Ok(())
    }

    /// Get the value stored under a key, if any.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(json) => Ok(Some(serde_json::from_str(&json)?)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Remove a key. Returns whether it existed.
    pub fn remove(&self, key: &str) -> Result<bool, StorageError> {
        let affected = self
            .conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(affected > 0)
    }

    /// Persist a confirmed editor result for the opener to pick up.
    pub fn save_result(&self, result: &EditorResult) -> Result<(), StorageError> {
        self.put(EDITOR_RESULT_KEY, result)
    }

    /// Consume a pending editor result: read it and remove it so it is
    /// applied only once.
    pub fn take_result(&self) -> Result<Option<EditorResult>, StorageError> {
        let result = self.get::<EditorResult>(EDITOR_RESULT_KEY)?;
        if result.is_some() {
            self.remove(EDITOR_RESULT_KEY)?;
        }
        Ok(result)
    }
}
