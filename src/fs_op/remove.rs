use std::fs;
use std::path::Path;

use crate::fs_op::error::FsOpError;
use crate::fs_op::stat;

fn remove_error(p: &Path) -> impl FnOnce(std::io::Error) -> FsOpError + '_ {
    move |source| FsOpError::Remove {
        path: p.to_path_buf(),
        source,
    }
}

/// Remove the directory tree at `path`.
///
/// Anything that is not a directory (including nothing at all) is left alone
/// and reported as success, so callers never have to check first.
pub fn remove_dir<P: AsRef<Path>>(path: P) -> Result<(), FsOpError> {
    let p = path.as_ref();
    if !stat::is_dir(p) {
        return Ok(());
    }
    tracing::debug!(path = %p.display(), "removing directory tree");
    fs::remove_dir_all(p).map_err(remove_error(p))
}

/// Remove the regular file at `path`; a no-op when there is none.
pub fn remove_file<P: AsRef<Path>>(path: P) -> Result<(), FsOpError> {
    let p = path.as_ref();
    if !stat::is_file(p) {
        return Ok(());
    }
    tracing::debug!(path = %p.display(), "removing file");
    fs::remove_file(p).map_err(remove_error(p))
}
