//! Naming conventions for files the browser creates or recognises.

use std::path::Path;

use chrono::NaiveDateTime;

/// Extension that marks a file as a note
pub const NOTE_EXTENSION: &str = "md";

/// Folder name that is never traversed, wherever it appears
pub const ARCHIVE_DIR_NAME: &str = "archive";

/// Base name for folders created with the new-folder command
pub const NEW_FOLDER_NAME: &str = "New Folder";

/// Compact timestamp used in generated file names
const FILE_STAMP: &str = "%Y-%m-%d-%H%M%S";

/// Human readable timestamp written into new notes
const CREATED_STAMP: &str = "%Y-%m-%d %H:%M:%S";

/// True when `name` carries the note extension
pub fn is_note_file(name: &str) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|ext| ext == NOTE_EXTENSION)
}

/// File name with the note extension removed
pub fn strip_note_extension(name: &str) -> &str {
    name.strip_suffix(".md").unwrap_or(name)
}

/// `note-2024-03-01-093000.md`
pub fn note_file_name(now: NaiveDateTime) -> String {
    format!("note-{}.{}", now.format(FILE_STAMP), NOTE_EXTENSION)
}

/// Content of a freshly created note
pub fn note_template(now: NaiveDateTime) -> String {
    format!("# New Note\n\nCreated: {}\n", now.format(CREATED_STAMP))
}

/// `2024-03-01-093000-<original>` for an item moved into the archive
pub fn archive_name(now: NaiveDateTime, original: &str) -> String {
    format!("{}-{}", now.format(FILE_STAMP), original)
}

/// Candidate folder name for the `attempt`-th try: "New Folder", "New Folder 1", ...
pub fn new_folder_candidate(attempt: usize) -> String {
    if attempt == 0 {
        NEW_FOLDER_NAME.to_string()
    } else {
        format!("{NEW_FOLDER_NAME} {attempt}")
    }
}
