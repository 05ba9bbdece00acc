//! Tracing subscriber setup.
//!
//! CLI commands log to stderr; the TUI owns the terminal, so it routes
//! tracing output to ${RFX_HOME}/rfx.log through a non-blocking writer
//! instead. Filtering is controlled by RFX_LOG (EnvFilter syntax),
//! defaulting to warnings only.

use std::fs;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::paths;

const ENV_FILTER_VAR: &str = "RFX_LOG";
const DEFAULT_FILTER: &str = "warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_FILTER_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initializes stderr logging for CLI commands.
///
/// Safe to call once per process; later calls are ignored.
pub fn init_cli() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Initializes file logging for the TUI.
///
/// Returns a guard that must be kept alive for the duration of the TUI;
/// dropping it flushes the non-blocking writer.
pub fn init_tui() -> Result<WorkerGuard> {
    let path = paths::log_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(file);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .try_init();

    Ok(guard)
}
