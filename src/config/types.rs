//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::paths::AppPaths;

/// Resolved configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    pub notes_dir: PathBuf,
    pub archive_dir: PathBuf,
    /// Editor command, possibly with arguments. Empty means "resolve at launch".
    pub editor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    pub layout: LayoutConfig,
    pub theme: ThemeConfig,
}

impl Config {
    /// Built-in defaults for the given directories
    pub fn defaults(paths: &AppPaths) -> Self {
        let notes_dir = paths.default_notes_dir();
        Self {
            archive_dir: default_archive_dir(&notes_dir),
            notes_dir,
            editor: String::new(),
            log_file: None,
            layout: LayoutConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

pub(crate) fn default_archive_dir(notes_dir: &Path) -> PathBuf {
    notes_dir.join(crate::domain::value_objects::naming::ARCHIVE_DIR_NAME)
}

/// On-disk shape of the config file; every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ConfigFile {
    #[serde(default)]
    pub notes_dir: Option<PathBuf>,
    #[serde(default)]
    pub archive_dir: Option<PathBuf>,
    #[serde(default)]
    pub editor: Option<String>,
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl ConfigFile {
    /// Fill unset keys from `base`. An unset archive follows the notes dir.
    pub fn merge_onto(self, base: Config) -> Config {
        let notes_dir = self.notes_dir.unwrap_or(base.notes_dir);
        let archive_dir = self
            .archive_dir
            .unwrap_or_else(|| default_archive_dir(&notes_dir));
        Config {
            notes_dir,
            archive_dir,
            editor: self.editor.unwrap_or(base.editor),
            log_file: self.log_file.or(base.log_file),
            layout: self.layout,
            theme: self.theme,
        }
    }
}

/// Screen layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Inner width of the sidebar box
    pub sidebar_width: usize,
    /// Blank rows between header and panes
    pub header_gap: usize,
    pub padding: PaddingConfig,
    pub heights: HeightsConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            sidebar_width: 30,
            header_gap: 1,
            padding: PaddingConfig::default(),
            heights: HeightsConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddingConfig {
    pub horizontal: usize,
    pub vertical: usize,
}

impl Default for PaddingConfig {
    fn default() -> Self {
        Self {
            horizontal: 2,
            vertical: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeightsConfig {
    pub header: usize,
    pub footer: usize,
    pub status: usize,
    pub help: usize,
}

impl Default for HeightsConfig {
    fn default() -> Self {
        Self {
            header: 1,
            footer: 1,
            status: 1,
            help: 1,
        }
    }
}

/// Row budget for one terminal height
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heights {
    pub header: usize,
    pub content: usize,
    pub footer: usize,
}

/// Rows taken by the top and bottom borders of the panes
const BORDER_ROWS: usize = 2;

impl LayoutConfig {
    /// Split `total` rows into header, pane content and footer.
    ///
    /// `content = total - header - (status + help) - borders - header_gap`,
    /// never below zero.
    pub fn calculate_heights(&self, total: usize) -> Heights {
        let header = self.heights.header;
        let footer = self.heights.status + self.heights.help;
        let content = total
            .saturating_sub(header)
            .saturating_sub(footer)
            .saturating_sub(BORDER_ROWS)
            .saturating_sub(self.header_gap);
        Heights {
            header,
            content,
            footer,
        }
    }
}

/// Colors as `#RRGGBB` strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Borders, header title and the selected row
    pub highlight: String,
    /// Status and help lines
    pub muted: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            highlight: "#9D8CFF".to_string(),
            muted: "#626262".to_string(),
        }
    }
}
