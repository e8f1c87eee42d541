//! Navigation & selection state over the flattened note tree.
//!
//! `NoteTree` owns the current snapshot, the cursor and the expansion set.
//! Every change that affects visibility replaces the snapshot wholesale
//! and re-anchors the cursor:
//!
//! 1. if the target path (or, without one, the previously selected path)
//!    is still visible, select it;
//! 2. otherwise clamp the previous index to the new length;
//! 3. an empty snapshot has no selection.

use std::path::{Path, PathBuf};

use crate::domain::entities::Entry;
use crate::domain::ports::{FileSystem, FsResult};
use crate::domain::services::{build_tree, TreeLayout};
use crate::domain::value_objects::ExpansionSet;

/// One-row cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Up,
    Down,
}

#[derive(Debug, Clone)]
pub struct NoteTree {
    root: PathBuf,
    archive: PathBuf,
    expansion: ExpansionSet,
    entries: Vec<Entry>,
    cursor: Option<usize>,
}

impl NoteTree {
    /// Build the initial snapshot of `root`; fails if the root cannot be listed.
    pub fn open(
        fs: &dyn FileSystem,
        root: impl Into<PathBuf>,
        archive: impl Into<PathBuf>,
    ) -> FsResult<Self> {
        Self::open_with(fs, root, archive, ExpansionSet::new())
    }

    /// Like `open`, starting from a known expansion set
    pub fn open_with(
        fs: &dyn FileSystem,
        root: impl Into<PathBuf>,
        archive: impl Into<PathBuf>,
        expansion: ExpansionSet,
    ) -> FsResult<Self> {
        let mut tree = Self {
            root: root.into(),
            archive: archive.into(),
            expansion,
            entries: Vec::new(),
            cursor: None,
        };
        tree.rebuild(fs, None)?;
        Ok(tree)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn archive(&self) -> &Path {
        &self.archive
    }

    pub fn layout(&self) -> TreeLayout<'_> {
        TreeLayout {
            root: &self.root,
            archive: &self.archive,
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Selected index, `None` exactly when the snapshot is empty
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn selected(&self) -> Option<&Entry> {
        self.cursor.and_then(|i| self.entries.get(i))
    }

    pub fn expansion(&self) -> &ExpansionSet {
        &self.expansion
    }

    pub(crate) fn expansion_mut(&mut self) -> &mut ExpansionSet {
        &mut self.expansion
    }

    pub fn index_of(&self, path: &Path) -> Option<usize> {
        self.entries.iter().position(|e| e.path() == path)
    }

    /// Replace the snapshot and re-anchor on `target` (default: current selection).
    ///
    /// On a listing failure the previous snapshot and cursor are kept.
    pub fn rebuild(&mut self, fs: &dyn FileSystem, target: Option<&Path>) -> FsResult<()> {
        let anchor: Option<PathBuf> = target
            .map(Path::to_path_buf)
            .or_else(|| self.selected().map(|e| e.path().to_path_buf()));
        let previous = self.cursor;

        let entries = build_tree(fs, self.layout(), &self.expansion)?;
        self.entries = entries;

        self.cursor = match anchor.as_deref().and_then(|p| self.index_of(p)) {
            Some(index) => Some(index),
            None if self.entries.is_empty() => None,
            None => Some(previous.unwrap_or(0).min(self.entries.len() - 1)),
        };

        tracing::debug!(
            entries = self.entries.len(),
            cursor = ?self.cursor,
            "rebuilt note tree"
        );
        Ok(())
    }

    /// Move one row; returns whether the cursor changed. Never wraps.
    pub fn move_cursor(&mut self, step: Step) -> bool {
        let Some(current) = self.cursor else {
            return false;
        };
        let next = match step {
            Step::Up => current.checked_sub(1),
            Step::Down => Some(current + 1).filter(|&i| i < self.entries.len()),
        };
        match next {
            Some(index) => {
                self.cursor = Some(index);
                true
            }
            None => false,
        }
    }

    /// Set the expansion flag of `path` and rebuild, keeping the selection.
    pub fn toggle_expand(
        &mut self,
        fs: &dyn FileSystem,
        path: &Path,
        expanded: bool,
    ) -> FsResult<()> {
        self.expansion.set(path, expanded);
        self.rebuild(fs, None)
    }

    /// Expand the selected directory; no-op on notes
    pub fn expand_selected(&mut self, fs: &dyn FileSystem) -> FsResult<()> {
        match self.selected() {
            Some(Entry::Directory { path, .. }) => {
                let path = path.clone();
                self.toggle_expand(fs, &path, true)
            }
            _ => Ok(()),
        }
    }

    /// Collapse command.
    ///
    /// On a directory, collapse it in place. On a note, collapse the
    /// nearest ancestor directory and select it. A top-level note has no
    /// ancestor and nothing happens.
    pub fn collapse_parent_and_select(&mut self, fs: &dyn FileSystem) -> FsResult<()> {
        let Some(cursor) = self.cursor else {
            return Ok(());
        };

        let current = &self.entries[cursor];
        if let Entry::Directory { path, .. } = current {
            let path = path.clone();
            return self.toggle_expand(fs, &path, false);
        }

        let Some(parent) = self.parent_index(cursor) else {
            return Ok(());
        };
        let parent_path = self.entries[parent].path().to_path_buf();
        self.expansion.set(parent_path.as_path(), false);
        self.cursor = Some(parent);
        self.rebuild(fs, Some(&parent_path))
    }

    /// Directory new notes and folders go into.
    ///
    /// The selected directory itself, else the nearest preceding shallower
    /// directory, else the root.
    pub fn current_directory(&self) -> PathBuf {
        let Some(cursor) = self.cursor else {
            return self.root.clone();
        };
        let current = &self.entries[cursor];
        if current.is_directory() {
            return current.path().to_path_buf();
        }
        self.parent_index(cursor)
            .map(|i| self.entries[i].path().to_path_buf())
            .unwrap_or_else(|| self.root.clone())
    }

    /// Nearest preceding directory strictly shallower than `index`
    fn parent_index(&self, index: usize) -> Option<usize> {
        let depth = self.entries[index].depth();
        (0..index)
            .rev()
            .find(|&i| self.entries[i].is_directory() && self.entries[i].depth() < depth)
    }
}
