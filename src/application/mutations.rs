//! Mutation operations on the note tree
//!
//! Each operation performs its filesystem calls, then rebuilds the
//! snapshot and re-anchors the cursor on the affected entry. A failure
//! aborts the operation at that point; earlier steps are not rolled back.

use std::path::{Path, PathBuf};

use crate::domain::entities::Entry;
use crate::domain::ports::{Clock, FileSystem, FsError};
use crate::domain::value_objects::naming::{
    archive_name, new_folder_candidate, note_file_name, note_template,
};
use crate::domain::value_objects::EntryName;
use crate::error::{NoteError, NoteResult};

use super::navigator::NoteTree;

/// Upper bound on "New Folder N" probing
const MAX_FOLDER_ATTEMPTS: usize = 10_000;

impl NoteTree {
    /// Write a templated note into the current directory and select it.
    pub fn create_note(&mut self, fs: &dyn FileSystem, clock: &dyn Clock) -> NoteResult<PathBuf> {
        let now = clock.now();
        let dir = self.current_directory();
        let path = dir.join(note_file_name(now));

        fs.create_new(&path, &note_template(now))?;
        tracing::info!(path = %path.display(), "created note");

        self.reveal(&dir);
        self.rebuild(fs, Some(&path))?;
        Ok(path)
    }

    /// Create "New Folder" (or the first free "New Folder N") in the
    /// current directory and select it.
    pub fn create_folder(&mut self, fs: &dyn FileSystem) -> NoteResult<PathBuf> {
        let dir = self.current_directory();
        let path = unique_folder_path(fs, &dir)?;

        fs.create_dir_all(&path)?;
        tracing::info!(path = %path.display(), "created folder");

        self.reveal(&dir);
        self.rebuild(fs, Some(&path))?;
        Ok(path)
    }

    /// Move the selected entry into the archive as `<timestamp>-<name>`.
    ///
    /// Returns the archived path. The cursor lands on the entry that
    /// preceded the archived one.
    pub fn archive_selected(
        &mut self,
        fs: &dyn FileSystem,
        clock: &dyn Clock,
    ) -> NoteResult<PathBuf> {
        let cursor = self.cursor().ok_or(NoteError::NoSelection)?;
        let source = self.entries()[cursor].path().to_path_buf();
        let anchor = cursor
            .checked_sub(1)
            .map(|i| self.entries()[i].path().to_path_buf());

        let archive = self.archive().to_path_buf();
        fs.create_dir_all(&archive)?;

        let base = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| FsError::NotFound(source.clone()))?;
        let dest = archive.join(archive_name(clock.now(), &base));
        if fs.exists(&dest) {
            return Err(FsError::AlreadyExists(dest).into());
        }

        fs.rename(&source, &dest)?;
        tracing::info!(from = %source.display(), to = %dest.display(), "archived entry");

        self.expansion_mut().forget_prefix(&source);
        self.rebuild(fs, anchor.as_deref())?;
        Ok(dest)
    }

    /// Rename the directory at `target` to `raw_name` within its parent.
    pub fn rename(
        &mut self,
        fs: &dyn FileSystem,
        target: &Path,
        raw_name: &str,
    ) -> NoteResult<PathBuf> {
        let name = EntryName::parse(raw_name)?;

        if let Some(Entry::Note { path, .. }) = self.index_of(target).map(|i| &self.entries()[i]) {
            return Err(NoteError::NotADirectory { path: path.clone() });
        }

        let parent = target
            .parent()
            .ok_or_else(|| FsError::NotFound(target.to_path_buf()))?;
        let dest = parent.join(name.as_str());

        if dest != target {
            if fs.exists(&dest) {
                return Err(FsError::AlreadyExists(dest).into());
            }
            fs.rename(target, &dest)?;
            tracing::info!(from = %target.display(), to = %dest.display(), "renamed folder");
            self.expansion_mut().rename_prefix(target, &dest);
        }

        self.rebuild(fs, Some(&dest))?;
        Ok(dest)
    }

    /// Expand `dir` so a freshly created child is visible.
    fn reveal(&mut self, dir: &Path) {
        if dir != self.root() {
            self.expansion_mut().set(dir, true);
        }
    }
}

fn unique_folder_path(fs: &dyn FileSystem, dir: &Path) -> NoteResult<PathBuf> {
    (0..MAX_FOLDER_ATTEMPTS)
        .map(|attempt| dir.join(new_folder_candidate(attempt)))
        .find(|candidate| !fs.exists(candidate))
        .ok_or_else(|| FsError::AlreadyExists(dir.join(new_folder_candidate(0))).into())
}
