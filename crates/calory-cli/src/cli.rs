//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Calory - Track what you eat, one food at a time.
#[derive(Debug, Parser)]
#[command(name = "calory")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Nutrition API key
    #[arg(long, env = "CALORY_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Food log database path
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Log lookups and storage writes to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs and numbers only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up a food and add it to the log
    Add(AddArgs),

    /// Show the food log and total
    List,

    /// Show the total calories
    Total,

    /// Delete entries by ID
    Delete(DeleteArgs),

    /// Clear the whole food log
    Reset(ResetArgs),

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the add command.
#[derive(Debug, Parser)]
pub struct AddArgs {
    /// Food name (e.g. "1 cup rice"); multiple words are joined
    pub food: Vec<String>,
}

impl AddArgs {
    /// Food name as typed, words joined by single spaces.
    pub fn query(&self) -> String {
        self.food.join(" ")
    }
}

/// Arguments for the delete command.
#[derive(Debug, Parser)]
pub struct DeleteArgs {
    /// Entry IDs to delete
    #[arg(required = true)]
    pub ids: Vec<String>,
}

/// Arguments for the reset command.
#[derive(Debug, Parser)]
pub struct ResetArgs {
    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_repl() {
        let cli = Cli::parse_from(["calory"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_add_joins_words() {
        let cli = Cli::parse_from(["calory", "add", "1", "cup", "rice"]);
        match cli.command {
            Some(Command::Add(args)) => assert_eq!(args.query(), "1 cup rice"),
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_add_without_food_parses() {
        // Validation happens in the tracker, not in argument parsing
        let cli = Cli::parse_from(["calory", "add"]);
        match cli.command {
            Some(Command::Add(args)) => assert_eq!(args.query(), ""),
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_delete_requires_ids() {
        assert!(Cli::try_parse_from(["calory", "delete"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["calory", "list", "--format", "json", "--no-color"]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert!(cli.no_color);
    }

    #[test]
    fn test_reset_yes_flag() {
        let cli = Cli::parse_from(["calory", "reset", "-y"]);
        match cli.command {
            Some(Command::Reset(args)) => assert!(args.yes),
            _ => panic!("Expected Reset command"),
        }
    }
}
