//! File helpers, gathered under one namespace.
//!
//! The implementations live in the focused submodules (`copy`, `content`,
//! `metadata`, `path`, `search`); this module re-exports them under the
//! short names scripts use, e.g. `file::copy` or `file::read`.

use std::path::Path;

use crate::fs_op::error::FsOpError;
use crate::fs_op::{remove, stat};

pub use crate::fs_op::content::{read, write, write_json, Content, Format};
pub use crate::fs_op::copy::copy_file as copy;
pub use crate::fs_op::metadata::{modified_epoch, size_bytes};
pub use crate::fs_op::path::{
    abs_path, abs_path_from, basename, canonical_path, directory, directory_from, expand_path,
    extension, name,
};
pub use crate::fs_op::search::find;

/// `true` iff `path` is a regular file. Never fails.
pub fn exists<P: AsRef<Path>>(path: P) -> bool {
    stat::is_file(path)
}

/// Delete the file at `path` if there is one.
pub fn delete<P: AsRef<Path>>(path: P) -> Result<(), FsOpError> {
    remove::remove_file(path)
}
