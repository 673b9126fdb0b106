//! Optional `settings.toml`.
//!
//! Looked up in the per-user project config directory unless a path is given
//! explicitly. A missing default file means defaults; a missing explicit file
//! is an error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories_next::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::msg::DEFAULT_LABEL;

pub const SETTINGS_FILE: &str = "settings.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Prefix printed in every message line.
    pub label: String,
    /// `tracing` filter directive used when neither `RUST_LOG` nor `-v` is given.
    pub log_filter: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            log_filter: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("can't read settings {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid settings {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Per-user configuration directory for this tool, when one can be found.
pub fn project_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "junkdrawer").map(|dirs| dirs.config_dir().to_path_buf())
}

pub fn default_settings_path() -> Option<PathBuf> {
    project_config_dir().map(|dir| dir.join(SETTINGS_FILE))
}

pub fn read_settings(path: &Path) -> Result<Settings, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_settings(explicit: Option<&Path>) -> Result<Settings, ConfigError> {
    if let Some(path) = explicit {
        return read_settings(path);
    }
    match default_settings_path() {
        Some(path) if path.is_file() => {
            tracing::debug!(path = %path.display(), "loading settings");
            read_settings(&path)
        }
        _ => Ok(Settings::default()),
    }
}
