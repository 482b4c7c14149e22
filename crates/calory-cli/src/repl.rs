//! Interactive REPL (Read-Eval-Print Loop) mode.
//!
//! The terminal stand-in for the tracker form: each line is one action and
//! runs to completion before the prompt comes back, so a lookup in flight
//! blocks further input the way a disabled submit button would.

use crate::cli::{AddArgs, Command, DeleteArgs, ResetArgs};
use crate::commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::tracker::Tracker;
use calory_domain::{EntryStore, NutritionLookup};
use rustyline::config::Configurer;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::fmt::Display;
use std::path::PathBuf;

const PROMPT: &str = "calory> ";

/// Run the interactive REPL.
pub async fn run_repl<S, L>(
    tracker: &mut Tracker<S, L>,
    config: &Config,
    formatter: &Formatter,
) -> Result<()>
where
    S: EntryStore,
    L: NutritionLookup,
    S::Error: Display,
    L::Error: Display,
{
    println!("{}", formatter.info("Calory REPL - Type 'help' for commands, 'exit' to quit"));
    println!();

    // Initialize readline editor
    let mut editor = DefaultEditor::new().map_err(|e| {
        CliError::Io(std::io::Error::other(format!(
            "Failed to initialize editor: {}",
            e
        )))
    })?;
    if let Err(e) = editor.set_max_history_size(config.settings.history_size) {
        tracing::warn!(error = %e, "invalid history size, keeping default");
    }

    // Load history
    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    commands::execute_list(tracker, formatter)?;

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(ReplCommand::Command(cmd)) => {
                        if let Err(e) = commands::execute(cmd, tracker, formatter).await {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    // Save history
    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug)]
enum ReplCommand {
    Exit,
    Help,
    Command(Command),
}

/// Parse a REPL command line.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    if parts.is_empty() {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    }

    match parts[0] {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "add" | "a" => {
            // The food name is sent exactly as typed, inner spacing included
            let food = line.trim()[parts[0].len()..].trim();
            Ok(ReplCommand::Command(Command::Add(AddArgs {
                food: vec![food.to_string()],
            })))
        }
        "list" | "ls" => Ok(ReplCommand::Command(Command::List)),
        "total" => Ok(ReplCommand::Command(Command::Total)),
        "delete" | "rm" => parse_delete_command(&parts[1..]),
        "reset" => Ok(ReplCommand::Command(Command::Reset(ResetArgs {
            yes: parts[1..].iter().any(|s| *s == "-y" || *s == "--yes"),
        }))),
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            parts[0]
        ))),
    }
}

fn parse_delete_command(args: &[&str]) -> Result<ReplCommand> {
    if args.is_empty() {
        return Err(CliError::InvalidInput("Usage: delete <id> [id2] [id3] ...".to_string()));
    }

    Ok(ReplCommand::Command(Command::Delete(DeleteArgs {
        ids: args.iter().map(|s| s.to_string()).collect(),
    })))
}

fn get_history_path() -> Result<PathBuf> {
    let data_dir = crate::config::data_dir()?;
    std::fs::create_dir_all(&data_dir)?;
    Ok(data_dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  add <food>                 - Look up a food and add it");
    println!("  list, ls                   - Show the food log");
    println!("  total                      - Show total calories");
    println!("  delete <id> [id2] ...      - Delete entries by ID");
    println!("  reset [-y]                 - Clear the food log");
    println!("  help, ?                    - Show this help");
    println!("  exit, quit, q              - Exit REPL");
    println!();
}
