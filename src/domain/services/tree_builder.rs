//! Note tree builder
//!
//! Walks the notes root and produces the flattened, pre-order list of
//! visible entries. Directories are descended into only when the
//! expansion set marks them expanded. The archive folder is skipped
//! everywhere, both by configured path and by the conventional name.

use std::path::Path;

use crate::domain::entities::Entry;
use crate::domain::ports::{ChildKind, DirChild, FileSystem, FsResult};
use crate::domain::value_objects::naming::{is_note_file, ARCHIVE_DIR_NAME};
use crate::domain::value_objects::ExpansionSet;

use super::title::resolve_title;

/// Inputs that stay fixed across rebuilds of one notes root
#[derive(Debug, Clone, Copy)]
pub struct TreeLayout<'a> {
    pub root: &'a Path,
    pub archive: &'a Path,
}

impl TreeLayout<'_> {
    /// True for the configured archive path and for any child named "archive"
    pub fn is_archive(&self, path: &Path) -> bool {
        path == self.archive || path.file_name().is_some_and(|n| n == ARCHIVE_DIR_NAME)
    }
}

/// Build the flattened view of `layout.root`.
///
/// Only the root listing can fail; unreadable subdirectories are logged
/// and shown as empty, unreadable notes get empty content.
pub fn build_tree(
    fs: &dyn FileSystem,
    layout: TreeLayout<'_>,
    expansion: &ExpansionSet,
) -> FsResult<Vec<Entry>> {
    let mut entries = Vec::new();
    let children = sorted_children(fs, layout.root)?;
    walk(fs, layout, expansion, children, 0, &mut entries);
    Ok(entries)
}

fn walk(
    fs: &dyn FileSystem,
    layout: TreeLayout<'_>,
    expansion: &ExpansionSet,
    children: Vec<DirChild>,
    depth: usize,
    out: &mut Vec<Entry>,
) {
    for child in children {
        if layout.is_archive(&child.path) {
            continue;
        }

        match child.kind {
            ChildKind::Directory => {
                let expanded = expansion.is_expanded(&child.path);
                let path = child.path;
                out.push(Entry::Directory {
                    path: path.clone(),
                    title: child.name,
                    depth,
                    expanded,
                });
                if expanded {
                    match sorted_children(fs, &path) {
                        Ok(grandchildren) => {
                            walk(fs, layout, expansion, grandchildren, depth + 1, out)
                        }
                        Err(err) => {
                            tracing::warn!(path = %path.display(), %err, "cannot list folder");
                        }
                    }
                }
            }
            ChildKind::File if is_note_file(&child.name) => {
                let content = fs.read(&child.path).unwrap_or_else(|err| {
                    tracing::warn!(path = %child.path.display(), %err, "cannot read note");
                    String::new()
                });
                out.push(Entry::Note {
                    title: resolve_title(&content, &child.name),
                    path: child.path,
                    depth,
                    content,
                });
            }
            ChildKind::File => {}
        }
    }
}

/// Listing order differs between platforms; sort by name for determinism.
fn sorted_children(fs: &dyn FileSystem, dir: &Path) -> FsResult<Vec<DirChild>> {
    let mut children = fs.list_dir(dir)?;
    children.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(children)
}
