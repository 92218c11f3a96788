//! lounge - a TV-style drawer-navigation screen for the terminal
//!
//! One screen: a side navigation drawer switching between three static
//! catalogs, each rendered as two horizontally-scrolling card rows.
//! Selection follows focus; leftward input from a row's first card
//! returns focus to the drawer entry that opened the view.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use lounge_core::LoungeConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lounge_tui::theme::Theme;

#[derive(Parser, Debug)]
#[command(
    name = "lounge",
    author,
    version,
    about = "TV-style drawer navigation demo for the terminal",
    long_about = "A single-screen demonstration of focus-driven navigation: a side drawer \
                  selects one of three static catalogs, shown as stacked card rows. Arrow \
                  keys move focus; leftward input from a row's first card returns to the \
                  drawer entry that opened the view."
)]
struct Cli {
    /// Load this config file instead of the default locations
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Color theme (overrides the config file)
    #[arg(long, value_enum)]
    theme: Option<Theme>,

    /// Append log output to this file (overrides the config file)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Event poll timeout in milliseconds (overrides the config file)
    #[arg(long, value_name = "MS")]
    tick_rate: Option<u64>,
}

/// Write tracing output to a file; the alternate screen owns stdout.
fn init_tracing(file: &Path, filter: &str) -> Result<()> {
    let log = OpenOptions::new()
        .create(true)
        .append(true)
        .open(file)
        .with_context(|| format!("Failed to open log file {}", file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(log))
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => LoungeConfig::from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => LoungeConfig::load(),
    };
    if let Some(tick_rate) = cli.tick_rate {
        config.general.tick_rate_ms = tick_rate;
    }
    if let Some(path) = cli.log_file {
        config.log.file = Some(path);
    }

    if let Some(file) = config.log.file.clone() {
        init_tracing(&file, &config.log.filter)?;
    }

    let theme = cli
        .theme
        .unwrap_or_else(|| Theme::from_name(&config.ui.theme));

    info!("lounge starting");
    lounge_tui::terminal::run(&config, theme).context("TUI session failed")?;
    info!("lounge exiting");

    Ok(())
}
