//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::domain::ports::{ChildKind, DirChild, FileSystem, FsError, FsResult};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn list_dir(&self, path: &Path) -> FsResult<Vec<DirChild>> {
        let read_dir = fs::read_dir(path).map_err(|e| FsError::from_io(path, e))?;
        let mut children = Vec::new();

        for entry in read_dir {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::debug!(dir = %path.display(), %err, "skipping unreadable entry");
                    continue;
                }
            };
            let child_path = entry.path();
            // Follows symlinks, so a link to a folder lists as a folder
            let kind = if child_path.is_dir() {
                ChildKind::Directory
            } else {
                ChildKind::File
            };
            children.push(DirChild {
                name: entry.file_name().to_string_lossy().into_owned(),
                path: child_path,
                kind,
            });
        }

        Ok(children)
    }

    fn read(&self, path: &Path) -> FsResult<String> {
        // Invalid UTF-8 is replaced, not treated as a read failure
        let bytes = fs::read(path).map_err(|e| FsError::from_io(path, e))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn create_new(&self, path: &Path, content: &str) -> FsResult<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| FsError::from_io(path, e))?;
        file.write_all(content.as_bytes())
            .map_err(|e| FsError::from_io(path, e))
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        fs::create_dir_all(path).map_err(|e| FsError::from_io(path, e))
    }

    fn rename(&self, from: &Path, to: &Path) -> FsResult<()> {
        fs::rename(from, to).map_err(|e| FsError::from_io(from, e))
    }

    fn exists(&self, path: &Path) -> bool {
        // symlink_metadata so a dangling link still counts as taken
        path.symlink_metadata().is_ok()
    }
}
