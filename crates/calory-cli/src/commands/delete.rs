//! Delete command implementation.

use crate::cli::DeleteArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::tracker::Tracker;
use calory_domain::{EntryId, EntryStore, NutritionLookup};
use std::fmt::Display;

/// Execute the delete command.
///
/// Unknown IDs are reported and skipped; the rest are still deleted.
pub fn execute_delete<S, L>(
    args: DeleteArgs,
    tracker: &mut Tracker<S, L>,
    formatter: &Formatter,
) -> Result<()>
where
    S: EntryStore,
    L: NutritionLookup,
    S::Error: Display,
    L::Error: Display,
{
    let ids = parse_ids(&args.ids)?;

    if ids.is_empty() {
        return Err(CliError::InvalidInput("No entry IDs provided".to_string()));
    }

    for id in ids {
        match tracker.delete(id)? {
            Some(entry) => super::report(formatter, &formatter.entry_deleted(&entry)),
            None => super::report(formatter, &formatter.entry_missing(id)),
        }
    }

    println!(
        "{}",
        formatter.format_log(tracker.entries(), tracker.total_calories())?
    );

    Ok(())
}

/// Parse all IDs up front so a typo deletes nothing.
fn parse_ids(raw: &[String]) -> Result<Vec<EntryId>> {
    raw.iter()
        .map(|s| s.parse::<EntryId>().map_err(CliError::InvalidInput))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use calory_lookup::MockLookup;
    use calory_store::MemoryStore;

    fn stocked_tracker(store: &MemoryStore) -> Tracker<MemoryStore, MockLookup> {
        store.set_raw(
            r#"[{"id":1,"name":"apple","calories":95},
                {"id":2,"name":"bread","calories":80},
                {"id":3,"name":"cheese","calories":113}]"#,
        );
        Tracker::open(store.clone(), MockLookup::default()).unwrap()
    }

    fn delete_args(ids: &[&str]) -> DeleteArgs {
        DeleteArgs {
            ids: ids.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn stored_ids(store: &MemoryStore) -> Vec<u64> {
        store.load().unwrap().iter().map(|e| e.id.value()).collect()
    }

    #[test]
    fn test_delete_known_and_unknown_ids() {
        let store = MemoryStore::new();
        let mut tracker = stocked_tracker(&store);
        let formatter = Formatter::new(OutputFormat::Json, false);

        execute_delete(delete_args(&["3", "99", "1"]), &mut tracker, &formatter).unwrap();

        let remaining: Vec<&str> = tracker.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(remaining, vec!["bread"]);
        assert_eq!(stored_ids(&store), vec![2]);
    }

    #[test]
    fn test_malformed_id_deletes_nothing() {
        let store = MemoryStore::new();
        let mut tracker = stocked_tracker(&store);
        let formatter = Formatter::new(OutputFormat::Json, false);

        let result = execute_delete(delete_args(&["1", "two", "3"]), &mut tracker, &formatter);

        assert!(matches!(result, Err(CliError::InvalidInput(_))));
        assert_eq!(tracker.entries().len(), 3);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_parse_ids() {
        let ids = parse_ids(&["12".to_string(), " 34 ".to_string()]).unwrap();
        assert_eq!(ids, vec![EntryId::from_value(12), EntryId::from_value(34)]);
    }

    #[test]
    fn test_parse_ids_rejects_garbage() {
        let result = parse_ids(&["12".to_string(), "apple".to_string()]);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
