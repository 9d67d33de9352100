//! Log subscriber setup.
//!
//! The terminal is owned by the game screen, so logs only go to a file.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Parse a filter directive such as `info` or `blockfall_core=debug,warn`.
pub fn filter(directive: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directive).with_context(|| format!("invalid log filter `{directive}`"))
}

/// Install the global subscriber if a log file is configured.
///
/// Returns whether logging was enabled.
pub fn init(config: &Config) -> Result<bool> {
    let Some(path) = config.log_file.as_deref() else {
        return Ok(false);
    };
    init_file(path, &config.log_level)?;
    Ok(true)
}

fn init_file(path: &Path, directive: &str) -> Result<()> {
    let filter = filter(directive)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!("install log subscriber: {e}"))
}
