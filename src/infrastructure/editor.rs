//! External editor launcher.
//!
//! The editor command comes from configuration and may carry arguments
//! (`"code --wait"`); the note path is appended as the last argument.
//! The child inherits the terminal and this call blocks until it exits.

use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use crate::error::{NoteError, NoteResult};

/// Split an editor setting into program and leading arguments
pub fn parse_editor_command(editor: &str) -> Option<(String, Vec<String>)> {
    let mut parts = editor.split_whitespace().map(str::to_string);
    let program = parts.next()?;
    Some((program, parts.collect()))
}

/// Run `editor` on `path`, blocking until it exits.
pub fn launch_editor(editor: &str, path: &Path) -> NoteResult<ExitStatus> {
    let (program, args) = parse_editor_command(editor).ok_or_else(|| NoteError::Config {
        file: path.to_path_buf(),
        message: "editor command is empty".to_string(),
    })?;

    tracing::info!(%program, path = %path.display(), "launching editor");
    let status = Command::new(&program)
        .args(&args)
        .arg(path)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;
    Ok(status)
}
