//! Entry entity - one visible row of the flattened note tree.

use std::path::{Path, PathBuf};

/// A node in the flattened tree view.
///
/// Directories and notes carry different data; there is no `expanded`
/// on a note and no `content` on a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Directory {
        path: PathBuf,
        /// Folder name
        title: String,
        /// Number of ancestor directories strictly inside the root
        depth: usize,
        expanded: bool,
    },
    Note {
        path: PathBuf,
        /// First level-1 heading, or the file stem
        title: String,
        depth: usize,
        /// Raw markdown read while building the tree (empty on read failure)
        content: String,
    },
}

impl Entry {
    pub fn path(&self) -> &Path {
        match self {
            Entry::Directory { path, .. } | Entry::Note { path, .. } => path,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Entry::Directory { title, .. } | Entry::Note { title, .. } => title,
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            Entry::Directory { depth, .. } | Entry::Note { depth, .. } => *depth,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Entry::Directory { .. })
    }

    /// Expanded flag; always false for notes
    pub fn is_expanded(&self) -> bool {
        matches!(self, Entry::Directory { expanded: true, .. })
    }

    /// Cached note content; `None` for directories
    pub fn content(&self) -> Option<&str> {
        match self {
            Entry::Note { content, .. } => Some(content),
            Entry::Directory { .. } => None,
        }
    }
}
