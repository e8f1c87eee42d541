//! Entry Name Value Object
//!
//! A validated single path component typed into the rename prompt:
//! - Non-empty
//! - No path separators
//! - Not `.` or `..`

use std::fmt;

use crate::error::NoteError;

/// A validated file or folder name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryName(String);

impl EntryName {
    /// Validate `raw` as a name that stays inside its parent directory
    pub fn parse(raw: &str) -> Result<Self, NoteError> {
        let invalid = |reason| NoteError::InvalidName {
            name: raw.to_string(),
            reason,
        };

        if raw.is_empty() {
            return Err(invalid("name is empty"));
        }
        if raw.contains('/') || raw.contains('\\') {
            return Err(invalid("contains a path separator"));
        }
        if raw == "." || raw == ".." {
            return Err(invalid("refers to a directory itself"));
        }
        if raw.contains('\0') {
            return Err(invalid("contains a NUL byte"));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
