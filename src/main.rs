//! note CLI
//!
//! Usage: note [--config] [-v...]
//!
//! Without flags, opens the interactive browser over the notes directory.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use note::commands::{cmd_browse, cmd_config};
use note::config::{load_or_create, AppPaths, LoadedConfig};

/// Terminal browser for markdown notes
#[derive(Parser, Debug)]
#[command(name = "note")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Print the configuration file location and contents
    #[arg(long)]
    config: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = AppPaths::detect()?;
    let loaded = load_or_create(&paths).context("failed to load configuration")?;

    let log_file = loaded
        .config
        .log_file
        .clone()
        .unwrap_or_else(|| paths.default_log_file());
    init_logging(&log_file, cli.verbose)?;
    report_config(&loaded);

    if cli.config {
        cmd_config(&paths)
    } else {
        cmd_browse(&loaded.config)
    }
}

/// Log to a file; the terminal belongs to the browser.
fn init_logging(path: &Path, verbose: u8) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env("NOTE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(verbosity_level(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("cannot initialise logging: {e}"))
}

fn verbosity_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn report_config(loaded: &LoadedConfig) {
    if loaded.created {
        tracing::info!(path = %loaded.paths.config_file().display(), "created default configuration");
    }
    for warning in &loaded.warnings {
        tracing::warn!(
            key = %warning.key,
            file = %warning.file.display(),
            line = ?warning.line,
            suggestion = ?warning.suggestion,
            "unknown configuration key"
        );
    }
}
