use std::collections::BTreeSet;
use std::path::Path;

use crate::env::Env;
use crate::fs_op::path::abs_path_from;
use crate::fs_op::stat;

/// Look for a regular file called `name` in the working directory and in
/// every directory on `PATH`.
///
/// Matches come back as absolute, forward-slash paths, sorted and without
/// duplicates. `None` means nothing matched, and is also the answer for
/// names that contain a path separator.
pub fn find(name: &str, env: &Env) -> Option<Vec<String>> {
    if name.is_empty() || name.contains(['/', '\\']) || Path::new(name).is_absolute() {
        return None;
    }
    let mut found = BTreeSet::new();
    let dirs = std::iter::once(env.cwd.clone()).chain(env.search_dirs());
    for dir in dirs {
        let candidate = dir.join(name);
        if stat::is_file(&candidate) {
            found.insert(abs_path_from(&candidate, &env.cwd));
        }
    }
    tracing::debug!(name, matches = found.len(), "searched PATH");
    if found.is_empty() {
        None
    } else {
        Some(found.into_iter().collect())
    }
}
