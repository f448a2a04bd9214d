//! `tracing` subscriber setup.
//!
//! Console commands log to stderr. The dashboard owns the terminal, so it
//! logs to a file instead.

use crate::types::LogLevel;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// `RUST_LOG` when set, else the `--log-level` flag
fn filter_for(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()))
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init(level: LogLevel, target: LogTarget) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter_for(level))
        .with_target(false);

    // try_init fails only when a subscriber is already installed
    let _ = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = open_log_file(&path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };
    Ok(())
}

fn open_log_file(path: &Path) -> Result<std::fs::File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}
