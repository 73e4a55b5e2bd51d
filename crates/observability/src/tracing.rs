//! Tracing/logging initialization.
//!
//! The shell owns stdout, so logs go either to a file (JSON lines) or to
//! stderr (compact, warnings only unless `RUST_LOG` says otherwise).

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Where log records are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Human-readable output on stderr. Default filter: `warn`.
    Stderr,
    /// JSON lines appended to a file. Default filter: `info`.
    File(PathBuf),
}

impl LogTarget {
    pub fn from_option(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => LogTarget::File(path),
            None => LogTarget::Stderr,
        }
    }

    fn default_directive(&self) -> &'static str {
        match self {
            LogTarget::Stderr => "warn",
            LogTarget::File(_) => "info",
        }
    }
}

#[derive(Debug, Error)]
pub enum ObservabilityError {
    #[error("failed to open log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn filter_for(target: &LogTarget) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(target.default_directive()))
}

fn open_log_file(path: &Path) -> Result<File, ObservabilityError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| ObservabilityError::LogFile {
            path: path.to_path_buf(),
            source,
        })
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops). Only opening
/// the log file can fail.
pub fn init(target: LogTarget) -> Result<(), ObservabilityError> {
    let filter = filter_for(&target);

    match target {
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .compact()
                .with_target(false)
                .with_writer(io::stderr)
                .try_init();
        }
        LogTarget::File(path) => {
            let file = open_log_file(&path)?;
            // JSON logs + timestamps, configurable via RUST_LOG.
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .with_timer(tracing_subscriber::fmt::time::SystemTime)
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
    }

    Ok(())
}
