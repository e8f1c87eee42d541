//! XDG directory resolution.
//!
//! `XDG_CONFIG_HOME` / `XDG_DATA_HOME` are honoured only when absolute;
//! otherwise `~/.config` and `~/.local/share` are used.

use std::path::{Path, PathBuf};

use crate::error::{NoteError, NoteResult};
use crate::infrastructure::fs::note_home_dir;

const APP_DIR: &str = "note";
const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "note.log";

/// Where note keeps its configuration and, by default, its notes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    /// `<config home>/note`
    pub config_dir: PathBuf,
    /// `<data home>/note`
    pub data_dir: PathBuf,
}

impl AppPaths {
    /// Resolve from the process environment.
    pub fn detect() -> NoteResult<Self> {
        Self::resolve(|key| std::env::var(key).ok(), note_home_dir()).ok_or_else(|| {
            NoteError::Config {
                file: PathBuf::from(CONFIG_FILE),
                message: "cannot determine the home directory".to_string(),
            }
        })
    }

    fn resolve(get_env: impl Fn(&str) -> Option<String>, home: Option<PathBuf>) -> Option<Self> {
        let config_home = absolute_env(&get_env, "XDG_CONFIG_HOME")
            .or_else(|| home.as_ref().map(|h| h.join(".config")))?;
        let data_home = absolute_env(&get_env, "XDG_DATA_HOME")
            .or_else(|| home.as_ref().map(|h| h.join(".local").join("share")))?;
        Some(Self {
            config_dir: config_home.join(APP_DIR),
            data_dir: data_home.join(APP_DIR),
        })
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE)
    }

    pub fn default_log_file(&self) -> PathBuf {
        self.config_dir.join(LOG_FILE)
    }

    pub fn default_notes_dir(&self) -> PathBuf {
        self.data_dir.clone()
    }
}

fn absolute_env(get_env: &impl Fn(&str) -> Option<String>, key: &str) -> Option<PathBuf> {
    get_env(key)
        .filter(|v| !v.is_empty() && Path::new(v).is_absolute())
        .map(PathBuf::from)
}
