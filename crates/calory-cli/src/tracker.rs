//! The tracker: food log, storage and lookup wired together.
//!
//! Every mutation is written through to the store before it is reported as
//! done. If the write fails the in-memory log is rolled back, so memory and
//! storage never disagree after an error.

use crate::error::TrackerError;
use calory_domain::{round_calories, EntryId, EntryStore, FoodEntry, FoodLog, NutritionLookup};
use std::fmt::Display;
use tracing::{debug, info, warn};

/// Result of a reset request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    /// Nothing to clear; confirmation was not asked
    AlreadyEmpty,
    /// Confirmation declined; log unchanged
    Declined,
    /// Log cleared, with the number of entries removed
    Cleared(usize),
}

/// Calorie tracker over a store and a nutrition lookup.
pub struct Tracker<S, L> {
    log: FoodLog,
    store: S,
    lookup: L,
}

impl<S, L> Tracker<S, L>
where
    S: EntryStore,
    L: NutritionLookup,
    S::Error: Display,
    L::Error: Display,
{
    /// Load the stored food log and build a tracker around it.
    pub fn open(store: S, lookup: L) -> Result<Self, TrackerError> {
        let entries = store
            .load()
            .map_err(|e| TrackerError::Store(e.to_string()))?;
        info!(count = entries.len(), "food log loaded");

        Ok(Self {
            log: FoodLog::from_entries(entries),
            store,
            lookup,
        })
    }

    /// Look up a food and append the first match.
    ///
    /// Empty input fails without contacting the lookup service. A lookup
    /// error or an empty candidate list leaves the log untouched.
    pub async fn submit(&mut self, input: &str) -> Result<FoodEntry, TrackerError> {
        let query = input.trim();
        if query.is_empty() {
            return Err(TrackerError::EmptyInput);
        }

        let not_found = || TrackerError::NotFound {
            query: query.to_string(),
        };

        let items = self.lookup.lookup(query).await.map_err(|e| {
            warn!(query, error = %e, "nutrition lookup failed");
            not_found()
        })?;

        let first = items.into_iter().next().ok_or_else(|| {
            warn!(query, "no nutrition data found for this item");
            not_found()
        })?;

        let snapshot = self.log.clone();
        let entry = self.log.append(first.name, round_calories(first.calories));
        self.persist(snapshot)?;

        debug!(id = %entry.id, name = %entry.name, calories = entry.calories, "entry added");
        Ok(entry)
    }

    /// Delete the entry with `id`.
    ///
    /// Returns `Ok(None)` without writing when no entry matches.
    pub fn delete(&mut self, id: EntryId) -> Result<Option<FoodEntry>, TrackerError> {
        let snapshot = self.log.clone();
        let Some(removed) = self.log.remove(id) else {
            debug!(%id, "delete of unknown entry ignored");
            return Ok(None);
        };
        self.persist(snapshot)?;

        debug!(%id, name = %removed.name, "entry deleted");
        Ok(Some(removed))
    }

    /// Clear the log once `confirm` agrees.
    ///
    /// `confirm` receives the number of entries that would be removed and is
    /// not called at all when the log is already empty.
    pub fn reset<F>(&mut self, confirm: F) -> Result<ResetOutcome, TrackerError>
    where
        F: FnOnce(usize) -> bool,
    {
        if self.log.is_empty() {
            return Ok(ResetOutcome::AlreadyEmpty);
        }
        if !confirm(self.log.len()) {
            return Ok(ResetOutcome::Declined);
        }

        let snapshot = self.log.clone();
        let count = self.log.clear();
        self.persist(snapshot)?;

        info!(count, "food log reset");
        Ok(ResetOutcome::Cleared(count))
    }

    /// Entries in display order.
    pub fn entries(&self) -> &[FoodEntry] {
        self.log.entries()
    }

    /// Sum of calories of all entries.
    pub fn total_calories(&self) -> u64 {
        self.log.total_calories()
    }

    /// Write the log through to the store, restoring `snapshot` on failure.
    fn persist(&mut self, snapshot: FoodLog) -> Result<(), TrackerError> {
        if let Err(e) = self.store.save(self.log.entries()) {
            warn!(error = %e, "failed to save food log, rolling back");
            self.log = snapshot;
            return Err(TrackerError::Store(e.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calory_domain::NutritionItem;
    use calory_lookup::MockLookup;
    use calory_store::MemoryStore;

    /// Store whose writes always fail.
    struct BrokenStore;

    impl EntryStore for BrokenStore {
        type Error = String;

        fn load(&self) -> Result<Vec<FoodEntry>, Self::Error> {
            Ok(vec![FoodEntry::new(EntryId::from_value(1), "apple", 95)])
        }

        fn save(&mut self, _entries: &[FoodEntry]) -> Result<(), Self::Error> {
            Err("disk full".to_string())
        }
    }

    fn apple_lookup() -> MockLookup {
        MockLookup::new(vec![NutritionItem::new("apple", 94.6)])
    }

    #[tokio::test]
    async fn test_empty_input_never_calls_lookup() {
        let lookup = apple_lookup();
        let mut tracker = Tracker::open(MemoryStore::new(), lookup.clone()).unwrap();

        for input in ["", "   ", "\t\n"] {
            assert_eq!(tracker.submit(input).await, Err(TrackerError::EmptyInput));
        }
        assert_eq!(lookup.call_count(), 0);
        assert!(tracker.entries().is_empty());
    }

    #[tokio::test]
    async fn test_submit_appends_first_item_rounded() {
        let mut lookup = MockLookup::default();
        lookup.add_response(
            "apple pie",
            vec![NutritionItem::new("apple pie", 236.5), NutritionItem::new("cream", 340.0)],
        );
        let store = MemoryStore::new();
        let mut tracker = Tracker::open(store.clone(), lookup.clone()).unwrap();

        let entry = tracker.submit("  apple pie ").await.unwrap();

        assert_eq!(entry.name, "apple pie");
        assert_eq!(entry.calories, 237);
        assert_eq!(tracker.entries(), &[entry]);
        assert_eq!(lookup.queries(), vec!["apple pie".to_string()]);
        assert_eq!(store.save_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_result_leaves_log_unchanged() {
        let store = MemoryStore::new();
        let mut tracker = Tracker::open(store.clone(), MockLookup::default()).unwrap();

        let result = tracker.submit("xyzzy").await;

        assert_eq!(
            result,
            Err(TrackerError::NotFound {
                query: "xyzzy".to_string()
            })
        );
        assert!(tracker.entries().is_empty());
        assert_eq!(store.save_count(), 0);
    }

    #[tokio::test]
    async fn test_lookup_error_leaves_log_unchanged() {
        let mut lookup = MockLookup::default();
        lookup.add_error("apple", 500);
        let store = MemoryStore::new();
        let mut tracker = Tracker::open(store.clone(), lookup).unwrap();

        let result = tracker.submit("apple").await;

        assert!(matches!(result, Err(TrackerError::NotFound { .. })));
        assert!(tracker.entries().is_empty());
        assert_eq!(store.save_count(), 0);
    }

    #[tokio::test]
    async fn test_failed_save_rolls_back_submit() {
        let mut tracker = Tracker::open(BrokenStore, apple_lookup()).unwrap();

        let result = tracker.submit("apple").await;

        assert_eq!(result, Err(TrackerError::Store("disk full".to_string())));
        assert_eq!(tracker.entries().len(), 1);
    }

    #[test]
    fn test_failed_save_rolls_back_delete() {
        let mut tracker = Tracker::open(BrokenStore, apple_lookup()).unwrap();

        assert!(tracker.delete(EntryId::from_value(1)).is_err());
        assert_eq!(tracker.entries().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_removes_only_match() {
        let mut tracker = Tracker::open(MemoryStore::new(), apple_lookup()).unwrap();
        let a = tracker.submit("apple").await.unwrap();
        let b = tracker.submit("apple").await.unwrap();
        let c = tracker.submit("apple").await.unwrap();

        let removed = tracker.delete(b.id).unwrap();

        assert_eq!(removed, Some(b));
        assert_eq!(tracker.entries(), &[a, c]);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_noop() {
        let store = MemoryStore::new();
        let mut tracker = Tracker::open(store.clone(), apple_lookup()).unwrap();
        tracker.submit("apple").await.unwrap();
        let saves = store.save_count();

        assert_eq!(tracker.delete(EntryId::from_value(7)).unwrap(), None);
        assert_eq!(tracker.entries().len(), 1);
        assert_eq!(store.save_count(), saves);
    }

    #[tokio::test]
    async fn test_reset_requires_confirmation() {
        let mut tracker = Tracker::open(MemoryStore::new(), apple_lookup()).unwrap();
        tracker.submit("apple").await.unwrap();
        tracker.submit("apple").await.unwrap();

        assert_eq!(tracker.reset(|_| false).unwrap(), ResetOutcome::Declined);
        assert_eq!(tracker.entries().len(), 2);

        let mut asked = None;
        let outcome = tracker
            .reset(|count| {
                asked = Some(count);
                true
            })
            .unwrap();

        assert_eq!(asked, Some(2));
        assert_eq!(outcome, ResetOutcome::Cleared(2));
        assert!(tracker.entries().is_empty());
        assert_eq!(tracker.total_calories(), 0);
    }

    #[test]
    fn test_reset_empty_log_skips_confirmation() {
        let mut tracker = Tracker::open(MemoryStore::new(), apple_lookup()).unwrap();

        let outcome = tracker
            .reset(|_| panic!("confirmation must not be asked"))
            .unwrap();

        assert_eq!(outcome, ResetOutcome::AlreadyEmpty);
    }

    #[tokio::test]
    async fn test_total_tracks_mutations() {
        let mut lookup = MockLookup::default();
        lookup.add_response("egg", vec![NutritionItem::new("egg", 77.5)]);
        lookup.add_response("toast", vec![NutritionItem::new("toast", 74.4)]);
        let mut tracker = Tracker::open(MemoryStore::new(), lookup).unwrap();

        let egg = tracker.submit("egg").await.unwrap();
        tracker.submit("toast").await.unwrap();
        assert_eq!(tracker.total_calories(), 78 + 74);

        tracker.delete(egg.id).unwrap();
        assert_eq!(tracker.total_calories(), 74);
    }

    #[tokio::test]
    async fn test_storage_round_trips_after_each_mutation() {
        let store = MemoryStore::new();
        let mut tracker = Tracker::open(store.clone(), apple_lookup()).unwrap();

        let first = tracker.submit("apple").await.unwrap();
        assert_eq!(store.load().unwrap(), tracker.entries());

        tracker.submit("apple").await.unwrap();
        assert_eq!(store.load().unwrap(), tracker.entries());

        tracker.delete(first.id).unwrap();
        assert_eq!(store.load().unwrap(), tracker.entries());

        let reopened = Tracker::open(store.clone(), apple_lookup()).unwrap();
        assert_eq!(reopened.entries(), tracker.entries());

        tracker.reset(|_| true).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_open_with_invalid_stored_value_starts_empty() {
        let store = MemoryStore::with_raw("{\"broken\":");
        let tracker = Tracker::open(store, apple_lookup()).unwrap();
        assert!(tracker.entries().is_empty());
    }
}
