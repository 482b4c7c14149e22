//! List and total command implementations.

use crate::error::Result;
use crate::output::Formatter;
use crate::tracker::Tracker;
use calory_domain::{EntryStore, NutritionLookup};
use std::fmt::Display;

/// Execute the list command.
pub fn execute_list<S, L>(tracker: &Tracker<S, L>, formatter: &Formatter) -> Result<()>
where
    S: EntryStore,
    L: NutritionLookup,
    S::Error: Display,
    L::Error: Display,
{
    println!(
        "{}",
        formatter.format_log(tracker.entries(), tracker.total_calories())?
    );
    Ok(())
}

/// Execute the total command.
pub fn execute_total<S, L>(tracker: &Tracker<S, L>, formatter: &Formatter) -> Result<()>
where
    S: EntryStore,
    L: NutritionLookup,
    S::Error: Display,
    L::Error: Display,
{
    println!("{}", formatter.format_total(tracker.total_calories())?);
    Ok(())
}
