//! Command implementations.

pub mod add;
pub mod delete;
pub mod list;
pub mod reset;

pub use add::execute_add;
pub use delete::execute_delete;
pub use list::{execute_list, execute_total};
pub use reset::execute_reset;

use crate::cli::Command;
use crate::error::Result;
use crate::output::Formatter;
use crate::tracker::Tracker;
use calory_domain::{EntryStore, NutritionLookup};
use std::fmt::Display;

/// Print a status line where it won't corrupt machine-readable output.
pub(crate) fn report(formatter: &Formatter, line: &str) {
    if formatter.status_on_stdout() {
        println!("{}", line);
    } else {
        eprintln!("{}", line);
    }
}

/// Execute one tracker command.
///
/// `Repl` is handled by the caller and is a no-op here.
pub async fn execute<S, L>(
    cmd: Command,
    tracker: &mut Tracker<S, L>,
    formatter: &Formatter,
) -> Result<()>
where
    S: EntryStore,
    L: NutritionLookup,
    S::Error: Display,
    L::Error: Display,
{
    match cmd {
        Command::Add(args) => execute_add(args, tracker, formatter).await,
        Command::List => execute_list(tracker, formatter),
        Command::Total => execute_total(tracker, formatter),
        Command::Delete(args) => execute_delete(args, tracker, formatter),
        Command::Reset(args) => execute_reset(args, tracker, formatter),
        Command::Repl => Ok(()),
    }
}
