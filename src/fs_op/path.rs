//! Pure path-string helpers.
//!
//! Nothing here touches the filesystem: results are derived from the text of
//! the path (plus a base directory for absolute forms) and always use forward
//! slashes.

use std::path::{Component, Path, PathBuf};

use crate::env::Env;

/// Replace backslash separators with forward slashes.
pub fn canonical_path(path: impl AsRef<str>) -> String {
    path.as_ref().replace('\\', "/")
}

fn lossy<P: AsRef<Path>>(path: P) -> String {
    canonical_path(path.as_ref().to_string_lossy())
}

/// Final component of `path`. Empty when `path` ends with a separator.
pub fn basename<P: AsRef<Path>>(path: P) -> String {
    let p = lossy(path);
    match p.rsplit_once('/') {
        Some((_, last)) => last.to_string(),
        None => p,
    }
}

// Split a file name into stem and extension (extension keeps its dot).
// Leading dots belong to the stem, so `.bashrc` has no extension.
fn split_ext(base: &str) -> (&str, &str) {
    let lead = base.len() - base.trim_start_matches('.').len();
    match base[lead..].rfind('.') {
        Some(i) => base.split_at(lead + i),
        None => (base, ""),
    }
}

/// Basename without its extension.
pub fn name<P: AsRef<Path>>(path: P) -> String {
    let base = basename(path);
    split_ext(&base).0.to_string()
}

/// Extension without the leading dot; empty when there is none.
pub fn extension<P: AsRef<Path>>(path: P) -> String {
    let base = basename(path);
    split_ext(&base).1.trim().replace('.', "")
}

// Fold `.` and `..` without consulting the filesystem. `..` at the root
// stays at the root.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::Prefix(_) | Component::RootDir => out.push(comp.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(part) => out.push(part),
        }
    }
    out
}

/// Absolute, normalized form of `path`, resolving relative input against
/// `base`.
pub fn abs_path_from<P: AsRef<Path>>(path: P, base: &Path) -> String {
    let p = path.as_ref();
    let joined = if p.is_absolute() {
        p.to_path_buf()
    } else {
        base.join(p)
    };
    lossy(normalize(&joined))
}

/// Absolute, normalized form of `path` relative to the current directory.
pub fn abs_path<P: AsRef<Path>>(path: P) -> String {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    abs_path_from(path, &cwd)
}

/// Absolute parent directory of `path`, resolved against `base`.
pub fn directory_from<P: AsRef<Path>>(path: P, base: &Path) -> String {
    abs_path_from(path.as_ref().join(".."), base)
}

/// Absolute parent directory of `path`.
pub fn directory<P: AsRef<Path>>(path: P) -> String {
    abs_path(path.as_ref().join(".."))
}

/// Expand a leading `~` to the home directory recorded in `env`.
///
/// Only `~` on its own or followed by a separator is expanded; `~user` and
/// everything else come back unchanged, as does any input when no home
/// directory is known.
pub fn expand_path(path: &str, env: &Env) -> String {
    let Some(home) = &env.home else {
        return path.to_string();
    };
    if path == "~" {
        return home.to_string_lossy().into_owned();
    }
    match path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\")) {
        Some(rest) => home.join(rest).to_string_lossy().into_owned(),
        None => path.to_string(),
    }
}
