//! Configuration module for note
//!
//! Precedence, highest first:
//! 1. Environment variables (`NOTE_NOTES_DIR`, `NOTE_ARCHIVE_DIR`)
//! 2. User config (`$XDG_CONFIG_HOME/note/config.toml`)
//! 3. Built-in defaults

mod loader;
mod paths;
mod types;

pub use loader::{load_or_create, resolve_editor, save, ConfigWarning, LoadedConfig};
pub use paths::AppPaths;
pub use types::{
    Config, Heights, HeightsConfig, LayoutConfig, PaddingConfig, ThemeConfig,
};
