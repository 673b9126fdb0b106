use std::fs;
use std::io;
use std::path::Path;

use fs_extra::file::{copy as fs_extra_copy, CopyOptions};

use crate::fs_op::error::FsOpError;

/// Copy the contents of file `src` to `dst`, replacing `dst` if it exists.
///
/// The destination directory must already exist; unlike `write`, nothing is
/// created on the way. Copying a file onto itself is refused instead of
/// truncating it.
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q) -> Result<u64, FsOpError> {
    let s = src.as_ref();
    let d = dst.as_ref();
    let fail = |source: io::Error| FsOpError::Copy {
        src: s.to_path_buf(),
        dst: d.to_path_buf(),
        source,
    };

    if let (Ok(a), Ok(b)) = (fs::canonicalize(s), fs::canonicalize(d)) {
        if a == b {
            return Err(fail(io::Error::new(
                io::ErrorKind::InvalidInput,
                "source and destination are the same file",
            )));
        }
    }

    let mut options = CopyOptions::new();
    options.overwrite = true;
    options.buffer_size = 64 * 1024;

    tracing::debug!(src = %s.display(), dst = %d.display(), "copying file");
    // fs_extra has its own error type; keep the io view of it.
    fs_extra_copy(s, d, &options).map_err(|e| fail(io::Error::other(e)))
}
