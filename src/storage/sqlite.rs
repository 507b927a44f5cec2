//! SQLite-backed state store.
//!
//! Wraps a `rusqlite::Connection` and automatically runs schema migrations
//! on open. State is stored as one JSON payload per key in the
//! `navigation_state` table, so the serialized form is identical to what the
//! in-memory store round-trips.

use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use super::migrations;
use super::store::StateStore;
use crate::types::errors::StorageError;
use crate::types::state::NavigationState;

/// Durable state store backed by a SQLite database.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) a SQLite database at the given file path and runs migrations.
    ///
    /// # Errors
    /// Returns `StorageError::DatabaseError` if the connection cannot be
    /// established or migrations fail.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let conn = Connection::open(path)
            .map_err(|e| StorageError::DatabaseError(e.to_string()))?;
        migrations::run_all(&conn).map_err(|e| StorageError::DatabaseError(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Opens an in-memory SQLite database and runs migrations.
    ///
    /// Useful for testing — the database is discarded when the store is dropped.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::DatabaseError(e.to_string()))?;
        migrations::run_all(&conn).map_err(|e| StorageError::DatabaseError(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Returns a reference to the underlying `rusqlite::Connection`.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }
}

impl StateStore for SqliteStore {
    /// Loads the state stored under `key`, or `None` if nothing is stored.
    fn load(&self, key: &str) -> Result<Option<NavigationState>, StorageError> {
        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT payload FROM navigation_state WHERE state_key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| StorageError::DatabaseError(e.to_string()))?;

        match payload {
            Some(json) => {
                let state = serde_json::from_str(&json)
                    .map_err(|e| StorageError::SerializationError(e.to_string()))?;
                Ok(Some(state))
            }
            None => Ok(None),
        }
    }

    /// Saves `state` under `key`, replacing any previous value.
    fn save(&self, key: &str, state: &NavigationState) -> Result<(), StorageError> {
        let payload = serde_json::to_string(state)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        self.conn
            .execute(
                "INSERT INTO navigation_state (state_key, payload, updated_at) VALUES (?1, ?2, ?3) \
                 ON CONFLICT(state_key) DO UPDATE SET payload = ?2, updated_at = ?3",
                params![key, payload, Self::now()],
            )
            .map_err(|e| StorageError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}
