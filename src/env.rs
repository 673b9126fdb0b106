//! Read-only view of the process environment.
//!
//! Helpers that depend on `PATH`, the home directory or the working
//! directory take an [`Env`] instead of reading globals, so tests can build
//! one by hand.

use std::ffi::OsString;
use std::path::PathBuf;

use directories_next::BaseDirs;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Env {
    /// Raw `PATH` value, if set.
    pub path: Option<OsString>,
    /// The invoking user's home directory, if it could be determined.
    pub home: Option<PathBuf>,
    /// Working directory used for relative lookups.
    pub cwd: PathBuf,
}

impl Env {
    /// Snapshot the current process environment.
    pub fn from_process() -> Self {
        let home = BaseDirs::new()
            .map(|dirs| dirs.home_dir().to_path_buf())
            .or_else(|| {
                std::env::var_os("HOME")
                    .or_else(|| std::env::var_os("USERPROFILE"))
                    .map(PathBuf::from)
            });
        Self {
            path: std::env::var_os("PATH"),
            home,
            cwd: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    pub fn with_path(mut self, path: impl Into<OsString>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = cwd.into();
        self
    }

    /// Directories listed on `PATH`, in order, without empty entries.
    pub fn search_dirs(&self) -> Vec<PathBuf> {
        match &self.path {
            Some(raw) => std::env::split_paths(raw)
                .filter(|p| !p.as_os_str().is_empty())
                .collect(),
            None => Vec::new(),
        }
    }
}
