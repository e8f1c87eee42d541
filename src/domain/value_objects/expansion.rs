//! Expansion Set - per-directory expanded/collapsed flags
//!
//! Owned by the navigation state and fed to every rebuild as a pure
//! input. Paths not in the map are collapsed.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionSet {
    flags: HashMap<PathBuf, bool>,
}

impl ExpansionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `path` is expanded (absent = collapsed)
    pub fn is_expanded(&self, path: &Path) -> bool {
        self.flags.get(path).copied().unwrap_or(false)
    }

    pub fn set(&mut self, path: impl Into<PathBuf>, expanded: bool) {
        self.flags.insert(path.into(), expanded);
    }

    /// Move the flags of `from` and everything below it under `to`
    pub fn rename_prefix(&mut self, from: &Path, to: &Path) {
        let moved: Vec<(PathBuf, bool)> = self
            .flags
            .iter()
            .filter_map(|(path, expanded)| {
                let rest = path.strip_prefix(from).ok()?;
                let new = if rest.as_os_str().is_empty() {
                    to.to_path_buf()
                } else {
                    to.join(rest)
                };
                Some((new, *expanded))
            })
            .collect();

        self.forget_prefix(from);
        self.flags.extend(moved);
    }

    /// Drop the flags of `prefix` and everything below it
    pub fn forget_prefix(&mut self, prefix: &Path) {
        self.flags.retain(|path, _| !path.starts_with(prefix));
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

impl FromIterator<(PathBuf, bool)> for ExpansionSet {
    fn from_iter<I: IntoIterator<Item = (PathBuf, bool)>>(iter: I) -> Self {
        Self {
            flags: iter.into_iter().collect(),
        }
    }
}
