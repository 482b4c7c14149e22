//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// User-facing failures of tracker actions.
///
/// None of these are fatal: the food log is unchanged whenever one is
/// returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrackerError {
    /// Submitted food name was empty or whitespace
    #[error("Please enter a food name")]
    EmptyInput,

    /// Lookup failed or returned no candidates
    #[error("Could not find nutrition data for \"{query}\". Please try a different item.")]
    NotFound {
        /// Trimmed food name that was looked up
        query: String,
    },

    /// The food log could not be written or read
    #[error("Could not save food log: {0}")]
    Store(String),
}

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Tracker action failed
    #[error(transparent)]
    Tracker(#[from] TrackerError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
