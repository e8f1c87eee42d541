//! Configuration loading and persistence

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::ports::FsError;
use crate::error::{NoteError, NoteResult};

use super::paths::AppPaths;
use super::types::{Config, ConfigFile};

/// Non-fatal configuration warning (an unknown key in the file)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// A loaded configuration plus what was noticed while loading it
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub paths: AppPaths,
    pub warnings: Vec<ConfigWarning>,
    /// True when the file did not exist and was written with defaults
    pub created: bool,
}

/// Startup entry point.
///
/// Reads `config.toml` (writing the defaults first if it is missing),
/// applies `NOTE_*` overrides and makes sure the config, notes and
/// archive directories exist.
pub fn load_or_create(paths: &AppPaths) -> NoteResult<LoadedConfig> {
    load_or_create_with(paths, |key| std::env::var(key).ok())
}

pub(crate) fn load_or_create_with(
    paths: &AppPaths,
    get_env: impl Fn(&str) -> Option<String>,
) -> NoteResult<LoadedConfig> {
    ensure_dir(&paths.config_dir)?;
    let config_path = paths.config_file();
    let defaults = Config::defaults(paths);

    let (file, warnings, created) = if config_path.exists() {
        let (file, warnings) = read_config_file(&config_path)?;
        (file, warnings, false)
    } else {
        let mut initial = defaults.clone();
        initial.editor = resolve_editor(&initial.editor, &get_env, |p| p.exists());
        save(&config_path, &initial)?;
        tracing::info!(path = %config_path.display(), "wrote default configuration");
        let file = ConfigFile {
            editor: Some(initial.editor),
            ..ConfigFile::default()
        };
        (file, Vec::new(), true)
    };

    let config = with_env_overrides(file, &get_env).merge_onto(defaults);

    ensure_dir(&config.notes_dir)?;
    ensure_dir(&config.archive_dir)?;

    Ok(LoadedConfig {
        config,
        paths: paths.clone(),
        warnings,
        created,
    })
}

/// Parse a config file, collecting unknown keys as warnings.
pub(crate) fn read_config_file(path: &Path) -> NoteResult<(ConfigFile, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| FsError::from_io(path, e))?;
    parse_config(&content, path)
}

pub(crate) fn parse_config(
    content: &str,
    path: &Path,
) -> NoteResult<(ConfigFile, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let file: ConfigFile = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| NoteError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .rsplit('.')
                .next()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((file, warnings))
}

/// `NOTE_NOTES_DIR` and `NOTE_ARCHIVE_DIR` take precedence over the file.
pub(crate) fn with_env_overrides(
    mut file: ConfigFile,
    get_env: &impl Fn(&str) -> Option<String>,
) -> ConfigFile {
    let non_empty = |key: &str| get_env(key).filter(|v| !v.is_empty());

    if let Some(dir) = non_empty("NOTE_NOTES_DIR") {
        file.notes_dir = Some(PathBuf::from(dir));
    }
    if let Some(dir) = non_empty("NOTE_ARCHIVE_DIR") {
        file.archive_dir = Some(PathBuf::from(dir));
    }
    file
}

/// Editor command to launch.
///
/// Configured value, then `NOTE_EDITOR`, `VISUAL`, `EDITOR`, then
/// `/usr/bin/vi` if present, finally `/bin/ed`.
pub fn resolve_editor(
    configured: &str,
    get_env: &impl Fn(&str) -> Option<String>,
    exists: impl Fn(&Path) -> bool,
) -> String {
    if !configured.trim().is_empty() {
        return configured.to_string();
    }
    for key in ["NOTE_EDITOR", "VISUAL", "EDITOR"] {
        if let Some(editor) = get_env(key).filter(|v| !v.trim().is_empty()) {
            return editor;
        }
    }
    if exists(Path::new("/usr/bin/vi")) {
        return "/usr/bin/vi".to_string();
    }
    "/bin/ed".to_string()
}

/// Write `config` as TOML, replacing the file atomically.
pub fn save(path: &Path, config: &Config) -> NoteResult<()> {
    let body = toml::to_string_pretty(config).map_err(|e| NoteError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(body.as_bytes())?;
    tmp.persist(path).map_err(|e| FsError::from_io(path, e.error))?;
    Ok(())
}

fn ensure_dir(dir: &Path) -> NoteResult<()> {
    fs::create_dir_all(dir).map_err(|e| FsError::from_io(dir, e))?;
    Ok(())
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.trim_start().starts_with(needle))
        .map(|i| i + 1)
}

/// Closest known key within an edit distance of two
fn suggest_key(unknown: &str) -> Option<String> {
    const KNOWN_KEYS: &[&str] = &[
        "notes_dir",
        "archive_dir",
        "editor",
        "log_file",
        "layout",
        "sidebar_width",
        "header_gap",
        "padding",
        "horizontal",
        "vertical",
        "heights",
        "header",
        "footer",
        "status",
        "help",
        "theme",
        "highlight",
        "muted",
    ];

    KNOWN_KEYS
        .iter()
        .map(|candidate| (*candidate, edit_distance(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();

    for (i, ac) in a.chars().enumerate() {
        let mut curr = Vec::with_capacity(b.len() + 1);
        curr.push(i + 1);
        for (j, bc) in b.iter().enumerate() {
            let substitute = prev[j] + usize::from(ac != *bc);
            curr.push(substitute.min(prev[j + 1] + 1).min(curr[j] + 1));
        }
        prev = curr;
    }

    prev[b.len()]
}
