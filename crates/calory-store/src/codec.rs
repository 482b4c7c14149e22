//! JSON encoding of the stored food log
//!
//! Layout: `[{"id": 1718000123456, "name": "apple", "calories": 95}, ...]`

use calory_domain::{round_calories, EntryId, FoodEntry};
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Serialize)]
struct StoredEntryRef<'a> {
    id: u64,
    name: &'a str,
    calories: u32,
}

/// Calories are read as floats so hand-edited values still load.
#[derive(Deserialize)]
struct StoredEntry {
    id: u64,
    name: String,
    calories: f64,
}

impl From<StoredEntry> for FoodEntry {
    fn from(stored: StoredEntry) -> Self {
        FoodEntry::new(
            EntryId::from_value(stored.id),
            stored.name,
            round_calories(stored.calories),
        )
    }
}

/// Encode entries as the stored JSON array
pub fn encode_entries(entries: &[FoodEntry]) -> Result<String, serde_json::Error> {
    let stored: Vec<StoredEntryRef<'_>> = entries
        .iter()
        .map(|e| StoredEntryRef {
            id: e.id.value(),
            name: &e.name,
            calories: e.calories,
        })
        .collect();
    serde_json::to_string(&stored)
}

/// Decode a stored JSON array
///
/// Anything that is not a well-formed array of entries decodes to an empty
/// collection.
pub fn decode_entries(raw: &str) -> Vec<FoodEntry> {
    match serde_json::from_str::<Vec<StoredEntry>>(raw) {
        Ok(stored) => stored.into_iter().map(FoodEntry::from).collect(),
        Err(e) => {
            warn!(error = %e, "stored food log is invalid, starting empty");
            Vec::new()
        }
    }
}
