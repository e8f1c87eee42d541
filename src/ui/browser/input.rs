//! Keyboard mapping for Normal mode.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Browser command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move cursor up
    MoveUp,
    /// Move cursor down
    MoveDown,
    /// Expand the selected folder
    Expand,
    /// Collapse the selected folder, or the parent of the selected note
    Collapse,
    /// Rename a folder, edit a note
    Open,
    NewNote,
    NewFolder,
    Archive,
    ToggleSidebar,
    Quit,
}

/// Convert a keyboard event to a Command; `None` goes to the preview.
pub fn key_to_command(key: KeyEvent) -> Option<Command> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Command::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Command::MoveDown),
        KeyCode::Right | KeyCode::Char('l') => Some(Command::Expand),
        KeyCode::Left | KeyCode::Char('h') => Some(Command::Collapse),
        KeyCode::Enter => Some(Command::Open),
        KeyCode::Char('n') => Some(Command::NewNote),
        KeyCode::Char('N') => Some(Command::NewFolder),
        KeyCode::Backspace | KeyCode::Delete => Some(Command::Archive),
        KeyCode::Tab => Some(Command::ToggleSidebar),
        KeyCode::Char('q') => Some(Command::Quit),
        _ => None,
    }
}
