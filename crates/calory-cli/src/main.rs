//! Calory CLI - Command-line calorie tracker.

use anyhow::Context;
use calory_cli::{commands, repl, Cli, Command, Config, Formatter, Tracker};
use calory_lookup::CalorieNinjasClient;
use calory_store::SqliteStore;
use clap::Parser;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Load or create config
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::path()?,
    };
    let mut config = Config::load_or_init(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;

    // Command-line and environment take precedence over the file
    if let Some(api_key) = cli.api_key.clone() {
        config.lookup.api_key = api_key;
    }
    if let Some(db) = cli.db.clone() {
        config.storage.path = Some(db);
    }

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    // Storage
    let db_path = config.storage.resolve_path()?;
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let store = SqliteStore::new(&db_path)
        .with_context(|| format!("failed to open food log at {}", db_path.display()))?
        .with_key(config.storage.key.clone());

    // Nutrition service
    let mut lookup = CalorieNinjasClient::new(&config.lookup.endpoint, &config.lookup.api_key);
    if let Some(secs) = config.lookup.timeout_secs {
        lookup = lookup.with_timeout(Duration::from_secs(secs))?;
    }

    let mut tracker = Tracker::open(store, lookup)?;

    match cli.command {
        None | Some(Command::Repl) => {
            repl::run_repl(&mut tracker, &config, &formatter).await?;
        }
        Some(cmd) => {
            commands::execute(cmd, &mut tracker, &formatter).await?;
        }
    }

    Ok(())
}

/// Log to stderr, honouring `RUST_LOG` when set.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
