//! The ordered food log
//!
//! Insertion order is display order. The log never reorders entries; removal
//! keeps the relative order of everything that remains.

use crate::entry::{EntryId, FoodEntry};

/// Ordered collection of food entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodLog {
    entries: Vec<FoodEntry>,
    last_id: Option<EntryId>,
}

impl FoodLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a log from previously stored entries
    ///
    /// # Examples
    ///
    /// ```
    /// use calory_domain::{EntryId, FoodEntry, FoodLog};
    ///
    /// let log = FoodLog::from_entries(vec![
    ///     FoodEntry::new(EntryId::from_value(1), "apple", 95),
    ///     FoodEntry::new(EntryId::from_value(2), "bread", 80),
    /// ]);
    /// assert_eq!(log.len(), 2);
    /// assert_eq!(log.total_calories(), 175);
    /// ```
    pub fn from_entries(entries: Vec<FoodEntry>) -> Self {
        let last_id = entries.iter().map(|e| e.id).max();
        Self { entries, last_id }
    }

    /// Allocate the id for a new entry created at `now_ms`
    ///
    /// Returns `now_ms` unless an id at or after it was already handed out,
    /// in which case the next integer is used. Ids are strictly increasing
    /// across the lifetime of the log, including ids of loaded entries.
    pub fn next_id(&mut self, now_ms: u64) -> EntryId {
        let candidate = match self.last_id {
            Some(last) if last.value() >= now_ms => last.value().saturating_add(1),
            _ => now_ms,
        };
        let id = EntryId::from_value(candidate);
        self.last_id = Some(id);
        id
    }

    /// Create and append a new entry stamped with the current time
    pub fn append(&mut self, name: impl Into<String>, calories: u32) -> FoodEntry {
        let id = self.next_id(EntryId::now_millis());
        let entry = FoodEntry::new(id, name, calories);
        self.push(entry.clone());
        entry
    }

    /// Append an existing entry at the end
    pub fn push(&mut self, entry: FoodEntry) {
        if self.last_id.map_or(true, |last| entry.id > last) {
            self.last_id = Some(entry.id);
        }
        self.entries.push(entry);
    }

    /// Remove the entry with the given id
    ///
    /// Returns `None` without touching the log if no entry matches.
    pub fn remove(&mut self, id: EntryId) -> Option<FoodEntry> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index))
    }

    /// Remove every entry, returning how many were dropped
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }

    /// Look up an entry by id
    pub fn get(&self, id: EntryId) -> Option<&FoodEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries in display order
    pub fn entries(&self) -> &[FoodEntry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of calories across all entries
    pub fn total_calories(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.calories)).sum()
    }
}
