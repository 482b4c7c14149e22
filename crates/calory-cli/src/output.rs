//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::tracker::ResetOutcome;
use calory_domain::{EntryId, FoodEntry};
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Columns, object::Rows, Alignment, Modify, Style},
};

/// Shown in place of the table when the log is empty.
pub const EMPTY_LOG_MESSAGE: &str = "No food items added yet.";

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Whether status lines share stdout with the rendered output.
    ///
    /// Only the table format is meant for people; JSON and quiet output must
    /// stay machine-readable, so their status lines go to stderr.
    pub fn status_on_stdout(&self) -> bool {
        matches!(self.format, OutputFormat::Table)
    }

    /// Render the log after an entry was added.
    ///
    /// Quiet output is just the new entry's ID.
    pub fn format_added(&self, entry: &FoodEntry, entries: &[FoodEntry], total: u64) -> Result<String> {
        match self.format {
            OutputFormat::Quiet => Ok(entry.id.to_string()),
            _ => self.format_log(entries, total),
        }
    }

    /// Render the whole food log with its total.
    pub fn format_log(&self, entries: &[FoodEntry], total: u64) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_log_json(entries, total),
            OutputFormat::Table => Ok(self.format_log_table(entries, total)),
            OutputFormat::Quiet => Ok(self.format_log_quiet(entries)),
        }
    }

    /// Render only the total.
    pub fn format_total(&self, total: u64) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(
                &serde_json::json!({ "total_calories": total }),
            )?),
            OutputFormat::Table => Ok(self.total_line(total)),
            OutputFormat::Quiet => Ok(total.to_string()),
        }
    }

    fn format_log_json(&self, entries: &[FoodEntry], total: u64) -> Result<String> {
        let json_entries: Vec<serde_json::Value> = entries
            .iter()
            .map(|e| {
                serde_json::json!({
                    "id": e.id.value(),
                    "name": e.name,
                    "calories": e.calories,
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&serde_json::json!({
            "entries": json_entries,
            "total_calories": total,
        }))?)
    }

    fn format_log_table(&self, entries: &[FoodEntry], total: u64) -> String {
        if entries.is_empty() {
            return format!("{}\n{}", self.colorize(EMPTY_LOG_MESSAGE, "yellow"), self.total_line(total));
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Food", "Calories"]);

        for entry in entries {
            builder.push_record([
                entry.id.to_string(),
                entry.name.clone(),
                format!("{} cal", entry.calories),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .with(Modify::new(Columns::last()).with(Alignment::right()));

        format!("{}\n{}", table, self.total_line(total))
    }

    /// Entry IDs only, one per line.
    fn format_log_quiet(&self, entries: &[FoodEntry]) -> String {
        let ids: Vec<String> = entries.iter().map(|e| e.id.to_string()).collect();
        ids.join("\n")
    }

    fn total_line(&self, total: u64) -> String {
        format!("Total: {} cal", self.colorize(&total.to_string(), "cyan"))
    }

    /// Format the result of adding an entry.
    pub fn entry_added(&self, entry: &FoodEntry) -> String {
        self.success(&format!("Added {} ({} cal) [{}]", entry.name, entry.calories, entry.id))
    }

    /// Format the result of deleting an entry.
    pub fn entry_deleted(&self, entry: &FoodEntry) -> String {
        self.success(&format!("Deleted {} ({} cal)", entry.name, entry.calories))
    }

    /// Format a delete of an id that is not in the log.
    pub fn entry_missing(&self, id: EntryId) -> String {
        self.warning(&format!("No entry with ID {}", id))
    }

    /// Format the result of a reset request.
    pub fn reset_outcome(&self, outcome: ResetOutcome) -> String {
        match outcome {
            ResetOutcome::AlreadyEmpty => self.info("Nothing to reset"),
            ResetOutcome::Declined => self.info("Operation cancelled"),
            ResetOutcome::Cleared(count) => self.success(&format!("Removed {} food item(s)", count)),
        }
    }

    /// Format the loading indicator shown while a lookup is in flight.
    pub fn looking_up(&self, query: &str) -> String {
        self.info(&format!("Looking up \"{}\"...", query))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entries() -> Vec<FoodEntry> {
        vec![
            FoodEntry::new(EntryId::from_value(1_718_000_000_001), "apple", 95),
            FoodEntry::new(EntryId::from_value(1_718_000_000_002), "banana", 105),
        ]
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_log(&sample_entries(), 200).unwrap();
        assert!(output.contains("Food"));
        assert!(output.contains("banana"));
        assert!(output.contains("105 cal"));
        assert!(output.ends_with("Total: 200 cal"));
    }

    #[test]
    fn test_empty_log_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_log(&[], 0).unwrap();
        assert_eq!(output, "No food items added yet.\nTotal: 0 cal");
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_log(&sample_entries(), 200).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["total_calories"], 200);
        assert_eq!(value["entries"][0]["name"], "apple");
        assert_eq!(value["entries"][1]["id"], 1_718_000_000_002u64);
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_log(&sample_entries(), 200).unwrap();
        assert_eq!(output, "1718000000001\n1718000000002");
        assert_eq!(formatter.format_total(200).unwrap(), "200");
    }

    #[test]
    fn test_quiet_added_is_new_id() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let entries = sample_entries();
        let output = formatter.format_added(&entries[1], &entries, 200).unwrap();
        assert_eq!(output, "1718000000002");
    }

    #[test]
    fn test_status_destination() {
        assert!(Formatter::new(OutputFormat::Table, false).status_on_stdout());
        assert!(!Formatter::new(OutputFormat::Json, false).status_on_stdout());
        assert!(!Formatter::new(OutputFormat::Quiet, false).status_on_stdout());
    }

    #[test]
    fn test_json_total() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let value: serde_json::Value =
            serde_json::from_str(&formatter.format_total(42).unwrap()).unwrap();
        assert_eq!(value["total_calories"], 42);
    }

    #[test]
    fn test_reset_messages() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.reset_outcome(ResetOutcome::Cleared(3)), "✓ Removed 3 food item(s)");
        assert_eq!(formatter.reset_outcome(ResetOutcome::Declined), "ℹ Operation cancelled");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let msg = formatter.error("test");
        assert_eq!(msg, "✗ test");
    }
}
