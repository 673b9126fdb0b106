use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the directory and file helpers.
///
/// The `Display` text is the line printed when the error is turned into a
/// fatal abort, so every variant names the path(s) it was working on.
#[derive(Error, Debug)]
pub enum FsOpError {
    #[error("Can't create directory: {}\n{source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("Can't remove: {}\n{source}", .path.display())]
    Remove { path: PathBuf, source: io::Error },

    #[error("Can't copy file: {} to {}\n{source}", .src.display(), .dst.display())]
    Copy {
        src: PathBuf,
        dst: PathBuf,
        source: io::Error,
    },

    #[error("Can't read file: {}\n{source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    /// File was readable but is not valid JSON.
    #[error("Can't read file: {}\n{source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Can't write file: {}\n{source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Can't write file: {}\n{source}", .path.display())]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },
}
