//! Add command implementation.

use crate::cli::AddArgs;
use crate::error::Result;
use crate::output::Formatter;
use crate::tracker::Tracker;
use calory_domain::{EntryStore, NutritionLookup};
use std::fmt::Display;

/// Execute the add command.
///
/// Prints a loading line while the lookup is in flight, then the added
/// entry and the re-rendered log (just the new ID in quiet mode).
pub async fn execute_add<S, L>(
    args: AddArgs,
    tracker: &mut Tracker<S, L>,
    formatter: &Formatter,
) -> Result<()>
where
    S: EntryStore,
    L: NutritionLookup,
    S::Error: Display,
    L::Error: Display,
{
    let query = args.query();
    if !query.trim().is_empty() {
        eprintln!("{}", formatter.looking_up(query.trim()));
    }

    let entry = tracker.submit(&query).await?;

    super::report(formatter, &formatter.entry_added(&entry));
    println!(
        "{}",
        formatter.format_added(&entry, tracker.entries(), tracker.total_calories())?
    );

    Ok(())
}
