//! `tracing` subscriber setup for the binary.
//!
//! Diagnostics are separate from the message lines written by `msg`: they
//! go to stderr, or to a file with `--log-file`, and are filtered by
//! `RUST_LOG`, then `-v`, then the settings file.

use std::path::PathBuf;

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub verbose: u8,
    pub quiet: bool,
    pub file: Option<PathBuf>,
    /// Filter from the settings file.
    pub filter: Option<String>,
}

#[derive(Debug, Error)]
pub enum LogError {
    #[error("log file path has no file name: {}", .0.display())]
    NoFileName(PathBuf),

    #[error("can't open log file {}: {source}", .path.display())]
    Open { path: PathBuf, source: InitError },
}

/// Filter directive for the given options when `RUST_LOG` is unset.
pub fn default_filter(opts: &LogOptions) -> String {
    match (opts.verbose, &opts.filter) {
        (0, Some(f)) => f.clone(),
        (0, None) => "warn".to_string(),
        (1, _) => "info,junkdrawer=debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global subscriber. Keep the returned guard alive for as long
/// as file logging should keep flushing.
pub fn init(opts: &LogOptions) -> Result<Option<WorkerGuard>, LogError> {
    if opts.quiet {
        return Ok(None);
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(opts)));

    match &opts.file {
        Some(path) => {
            let appender = open_log_file(path)?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let _ = tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .try_init();
            Ok(Some(guard))
        }
        None => {
            let _ = tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .try_init();
            Ok(None)
        }
    }
}

/// Open `path` for appending, creating its directory. The file is never
/// rotated, so its name is used as given.
pub fn open_log_file(path: &std::path::Path) -> Result<RollingFileAppender, LogError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| LogError::NoFileName(path.to_path_buf()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(dir)
        .map_err(|source| LogError::Open {
            path: path.to_path_buf(),
            source,
        })
}
