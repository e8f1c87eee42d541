//! Title resolution for notes.

use crate::domain::value_objects::naming::strip_note_extension;

/// Display title for a note: the first line starting with `"# "`
/// (marker stripped, rest verbatim), else the file name without extension.
/// An empty heading counts as no heading.
pub fn resolve_title(content: &str, file_name: &str) -> String {
    content
        .split('\n')
        .find_map(|line| line.strip_prefix("# "))
        .filter(|title| !title.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| strip_note_extension(file_name).to_string())
}
