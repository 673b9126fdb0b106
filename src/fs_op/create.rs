use std::fs;
use std::io;
use std::path::Path;

use crate::fs_op::error::FsOpError;
use crate::fs_op::stat;

/// Create `path` and any missing parents.
///
/// An existing directory is not an error, including one created by another
/// process between the check and the create.
pub fn create_dir_all<P: AsRef<Path>>(path: P) -> Result<(), FsOpError> {
    let p = path.as_ref();
    if stat::is_dir(p) {
        return Ok(());
    }
    tracing::debug!(path = %p.display(), "creating directory");
    fs::create_dir_all(p).map_err(|source| FsOpError::CreateDir {
        path: p.to_path_buf(),
        source,
    })
}

/// Ensure the parent directory of `p` exists.
pub(crate) fn ensure_parent_exists(p: &Path) -> io::Result<()> {
    if let Some(parent) = p.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
