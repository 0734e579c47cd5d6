//! Tracing subscriber setup
//!
//! The terminal UI owns stdout and stderr while it runs, so interactive
//! sessions log to the configured file or nowhere. One-shot runs log to
//! stderr and keep stdout for the HTML.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use recipe_common::config::{Config, LoggingConfig};
use tracing::{info, warn};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

/// Where log output may go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Interactive,
    OneShot,
}

/// Build the filter: `RUST_LOG` directives plus the configured level
pub fn env_filter(level: &str) -> Result<EnvFilter> {
    let level: LevelFilter = level
        .parse()
        .with_context(|| format!("Invalid log level {level:?}"))?;

    Ok(EnvFilter::from_default_env().add_directive(level.into()))
}

/// Install the global subscriber
pub fn init_tracing(config: &LoggingConfig, mode: OutputMode) -> Result<()> {
    let filter = env_filter(&config.level)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match (&config.file, mode) {
        (Some(path), _) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        (None, OutputMode::Interactive) => builder.with_writer(std::io::sink).init(),
        (None, OutputMode::OneShot) => builder.with_writer(std::io::stderr).init(),
    }

    Ok(())
}

/// Log where the configuration came from and anything that fell back to defaults
///
/// Call after [`init_tracing`]; configuration is loaded before a subscriber
/// exists.
pub fn report_config(config: &Config) {
    match &config.source {
        Some(path) => info!("Loaded TOML configuration from {}", path.display()),
        None => info!("No TOML configuration loaded"),
    }
    for warning in &config.warnings {
        warn!("{warning}");
    }
}
