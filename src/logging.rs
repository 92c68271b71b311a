//! Tracing subscriber setup.
//!
//! Nothing is installed unless a filter is requested through `--log-level`
//! or `STOREFRONT_LOG`. The TUI owns the terminal, so it logs to a file.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{Result, StorefrontError};
use crate::fs::ensure_parent_dir;

pub const LOG_ENV_VAR: &str = "STOREFRONT_LOG";

/// Where log records go
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
}

/// Filter directive from the flag, falling back to the environment
pub fn filter_directive(level: Option<&str>) -> Option<String> {
    if let Some(level) = level
        && !level.trim().is_empty()
    {
        return Some(level.trim().to_string());
    }
    std::env::var(LOG_ENV_VAR)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

/// Install the global subscriber. Returns `false` when logging stays off.
pub fn init_tracing(level: Option<&str>, target: LogTarget<'_>) -> Result<bool> {
    let Some(directive) = filter_directive(level) else {
        return Ok(false);
    };
    let filter = EnvFilter::try_new(&directive)
        .map_err(|e| StorefrontError::Config(format!("invalid log filter '{directive}': {e}")))?;

    let installed = match target {
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init(),
        LogTarget::File(path) => {
            ensure_parent_dir(path)?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| StorefrontError::StorageError {
                    operation: "open",
                    item_type: "log file",
                    path: path.to_path_buf(),
                    source: e,
                })?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    installed.map_err(|e| StorefrontError::Other(format!("failed to initialize logging: {e}")))?;
    Ok(true)
}
