//! Directory helpers.

use std::path::Path;

use crate::fs_op::error::FsOpError;
use crate::fs_op::{create, remove, stat};

pub use crate::fs_op::path::expand_path;

/// `true` iff `path` is a directory. Never fails.
pub fn exists<P: AsRef<Path>>(path: P) -> bool {
    stat::is_dir(path)
}

/// Create `path` and its missing ancestors; an existing directory is fine.
pub fn make<P: AsRef<Path>>(path: P) -> Result<(), FsOpError> {
    create::create_dir_all(path)
}

/// Recursively delete `path` if it is a directory.
pub fn delete<P: AsRef<Path>>(path: P) -> Result<(), FsOpError> {
    remove::remove_dir(path)
}
