//! Reset command implementation.

use crate::cli::ResetArgs;
use crate::error::Result;
use crate::output::Formatter;
use crate::tracker::Tracker;
use calory_domain::{EntryStore, NutritionLookup};
use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Question asked before the log is cleared.
pub const RESET_PROMPT: &str = "Are you sure you want to reset all food items?";

/// Execute the reset command.
pub fn execute_reset<S, L>(
    args: ResetArgs,
    tracker: &mut Tracker<S, L>,
    formatter: &Formatter,
) -> Result<()>
where
    S: EntryStore,
    L: NutritionLookup,
    S::Error: Display,
    L::Error: Display,
{
    let outcome = tracker.reset(|count| {
        if args.yes {
            return true;
        }
        let stdin = io::stdin();
        // Prompt on stderr so stdout stays parseable
        match confirm(stdin.lock(), io::stderr(), count) {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!(error = %e, "could not read confirmation, treating as no");
                false
            }
        }
    })?;

    super::report(formatter, &formatter.reset_outcome(outcome));
    println!(
        "{}",
        formatter.format_log(tracker.entries(), tracker.total_calories())?
    );

    Ok(())
}

/// Ask for confirmation on `output`, reading one line from `input`.
///
/// Only `y` or `yes` (any case) confirm; end of input declines.
fn confirm<R: BufRead, W: Write>(mut input: R, mut output: W, count: usize) -> io::Result<bool> {
    write!(output, "{} ({} item(s)) [y/N] ", RESET_PROMPT, count)?;
    output.flush()?;

    let mut response = String::new();
    input.read_line(&mut response)?;

    let answer = response.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}
