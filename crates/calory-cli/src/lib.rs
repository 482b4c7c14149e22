//! Calory CLI library.
//!
//! This library provides the core functionality for the Calory command-line
//! interface: configuration, the tracker that ties the food log to storage
//! and the nutrition service, command execution and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;
pub mod tracker;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result, TrackerError};
pub use output::Formatter;
pub use tracker::{ResetOutcome, Tracker};
