//! FileSystem port - abstraction over the note tree's file I/O
//!
//! The tree builder and the mutation operations only talk to the disk
//! through this trait, so tests can swap in failing or in-memory doubles.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors, each carrying the path that failed
#[derive(Debug, Error)]
pub enum FsError {
    /// Target vanished between listing and acting on it
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Destination is already taken
    #[error("already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
    /// Permission denied
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),
    /// Any other I/O error
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FsError {
    /// Classify an `io::Error` raised while touching `path`.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            io::ErrorKind::AlreadyExists => FsError::AlreadyExists(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    /// The path the failed call was acting on
    pub fn path(&self) -> &Path {
        match self {
            FsError::NotFound(p) | FsError::AlreadyExists(p) | FsError::PermissionDenied(p) => p,
            FsError::Io { path, .. } => path,
        }
    }
}

/// Kind of a directory child as reported by a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildKind {
    Directory,
    File,
}

/// One immediate child of a listed directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirChild {
    /// File name (last path component)
    pub name: String,
    /// Full path (parent joined with `name`)
    pub path: PathBuf,
    pub kind: ChildKind,
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - test doubles in the unit and scenario tests
pub trait FileSystem {
    /// List the immediate children of a directory (no particular order)
    fn list_dir(&self, path: &Path) -> FsResult<Vec<DirChild>>;

    /// Read file content as string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Create a new file, failing with `AlreadyExists` if one is there
    fn create_new(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Move or rename a file or directory
    fn rename(&self, from: &Path, to: &Path) -> FsResult<()>;

    /// Check if anything exists at path
    fn exists(&self, path: &Path) -> bool;
}
