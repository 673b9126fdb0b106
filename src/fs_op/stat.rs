use std::fs;
use std::path::Path;

/// Kind of filesystem object a path refers to, following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathType {
    /// Nothing there, or the lookup failed (permissions, dangling link).
    NotFound,
    Directory,
    File,
    /// Sockets, FIFOs, devices.
    Other,
}

impl PathType {
    /// Classify `path`. Never fails: lookup errors read as `NotFound`.
    pub fn of<P: AsRef<Path>>(path: P) -> Self {
        match fs::metadata(path) {
            Err(_) => PathType::NotFound,
            Ok(m) if m.is_dir() => PathType::Directory,
            Ok(m) if m.is_file() => PathType::File,
            Ok(_) => PathType::Other,
        }
    }
}

pub fn is_dir<P: AsRef<Path>>(path: P) -> bool {
    PathType::of(path) == PathType::Directory
}

pub fn is_file<P: AsRef<Path>>(path: P) -> bool {
    PathType::of(path) == PathType::File
}
