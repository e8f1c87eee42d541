//! Error types for note
//!
//! Library code returns `NoteError`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for note operations
pub type NoteResult<T> = Result<T, NoteError>;

/// Main error type for note operations
#[derive(Error, Debug)]
pub enum NoteError {
    /// Filesystem port failure
    #[error(transparent)]
    Fs(#[from] FsError),

    /// A name typed into the rename prompt cannot be used as a file name
    #[error("invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    /// An operation needed a selected entry but the tree is empty
    #[error("nothing is selected")]
    NoSelection,

    /// An operation that only applies to directories was given a note
    #[error("not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    /// Configuration file could not be parsed or written
    #[error("invalid configuration in {}: {message}", file.display())]
    Config { file: PathBuf, message: String },

    /// IO error outside the filesystem port (config, terminal)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
