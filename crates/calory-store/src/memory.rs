//! In-memory store for tests and dry runs

use crate::codec;
use crate::{StoreError, DEFAULT_KEY};
use calory_domain::{EntryStore, FoodEntry};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Key-value store kept in process memory
///
/// Values go through the same JSON encoding as [`SqliteStore`](crate::SqliteStore),
/// so tests exercise the real round-trip. Clones share the same map, which
/// lets a test keep a handle while a tracker owns the store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
    saves: Arc<Mutex<usize>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the raw value under the default key
    pub fn with_raw(raw: impl Into<String>) -> Self {
        let store = Self::new();
        store.set_raw(raw);
        store
    }

    /// Raw value stored under the default key
    pub fn raw(&self) -> Option<String> {
        self.values.lock().unwrap().get(DEFAULT_KEY).cloned()
    }

    /// Overwrite the raw value under the default key
    pub fn set_raw(&self, raw: impl Into<String>) {
        self.values
            .lock()
            .unwrap()
            .insert(DEFAULT_KEY.to_string(), raw.into());
    }

    /// Number of times `save` was called
    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }
}

impl EntryStore for MemoryStore {
    type Error = StoreError;

    fn load(&self) -> Result<Vec<FoodEntry>, Self::Error> {
        Ok(self.raw().map(|raw| codec::decode_entries(&raw)).unwrap_or_default())
    }

    fn save(&mut self, entries: &[FoodEntry]) -> Result<(), Self::Error> {
        let raw = codec::encode_entries(entries)?;
        self.set_raw(raw);
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }
}
