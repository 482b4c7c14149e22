//! Calory Storage Layer
//!
//! Implements the `EntryStore` trait on top of a small durable key-value
//! table. The whole food log is kept under a single key as a JSON array of
//! `{id, name, calories}` objects and rewritten on every mutation.
//!
//! # Backends
//!
//! - `SqliteStore`: SQLite file with one `kv` table
//! - `MemoryStore`: in-process map, for tests
//!
//! # Examples
//!
//! ```
//! use calory_domain::{EntryId, EntryStore, FoodEntry};
//! use calory_store::SqliteStore;
//!
//! let mut store = SqliteStore::in_memory().unwrap();
//! store.save(&[FoodEntry::new(EntryId::from_value(1), "apple", 95)]).unwrap();
//! assert_eq!(store.load().unwrap().len(), 1);
//! ```

#![warn(missing_docs)]

pub mod codec;
pub mod memory;

use calory_domain::{EntryStore, FoodEntry};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

pub use memory::MemoryStore;

/// Key the food log is stored under unless configured otherwise
pub const DEFAULT_KEY: &str = "foodItems";

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS kv (
    key   TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL
);
";

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Entries could not be encoded for storage
    #[error("Encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// SQLite-backed key-value store holding the food log
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its own SqliteStore instance.
pub struct SqliteStore {
    conn: Connection,
    key: String,
}

impl SqliteStore {
    /// Open (or create) the store at the given database path
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use calory_store::SqliteStore;
    ///
    /// let store = SqliteStore::new("calory.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "opened sqlite store");
        Self::with_connection(conn)
    }

    /// Create a store backed by an in-memory database
    pub fn in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn,
            key: DEFAULT_KEY.to_string(),
        })
    }

    /// Store the food log under a different key
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Key the food log is stored under
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the raw value stored under `key`
    pub fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Write a raw value under `key`, replacing any previous value
    pub fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    /// Delete the value stored under `key`
    ///
    /// Returns whether a value was present.
    pub fn remove(&self, key: &str) -> Result<bool, StoreError> {
        let affected = self
            .conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(affected > 0)
    }
}

impl EntryStore for SqliteStore {
    type Error = StoreError;

    fn load(&self) -> Result<Vec<FoodEntry>, Self::Error> {
        match self.get(&self.key)? {
            Some(raw) => Ok(codec::decode_entries(&raw)),
            None => {
                debug!(key = %self.key, "no stored food log, starting empty");
                Ok(Vec::new())
            }
        }
    }

    fn save(&mut self, entries: &[FoodEntry]) -> Result<(), Self::Error> {
        let raw = codec::encode_entries(entries)?;
        self.set(&self.key, &raw)?;
        debug!(key = %self.key, count = entries.len(), "saved food log");
        Ok(())
    }
}
