//! Metadata passthroughs. Lookup failures are returned as the plain
//! `io::Error` from the filesystem; these helpers never abort.

use std::fs;
use std::io;
use std::path::Path;
use std::time::UNIX_EPOCH;

/// Size of `path` in bytes.
pub fn size_bytes<P: AsRef<Path>>(path: P) -> io::Result<u64> {
    Ok(fs::metadata(path)?.len())
}

/// Last modification time of `path` in whole seconds since the epoch,
/// truncated toward zero.
pub fn modified_epoch<P: AsRef<Path>>(path: P) -> io::Result<i64> {
    let modified = fs::metadata(path)?.modified()?;
    let secs = match modified.duration_since(UNIX_EPOCH) {
        Ok(after) => after.as_secs() as i64,
        Err(before) => -(before.duration().as_secs() as i64),
    };
    Ok(secs)
}
