//! Interaction state machine for the note browser.
//!
//! ```text
//!            enter on folder / new folder
//!   Normal ────────────────────────────────▶ Renaming
//!     ▲  ◀──────────── enter / esc ───────────┘
//!     │
//!     │ enter on note            editor exits
//!     └──────────▶ Suspended ──────────────────▶ Normal (rebuild)
//! ```
//!
//! One key is processed to completion before the next. Filesystem
//! failures never leave this module: they are logged and shown as a
//! transient status message until the next keypress.

use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::application::{NoteTree, Step};
use crate::config::LayoutConfig;
use crate::domain::entities::Entry;
use crate::domain::ports::{render_or_raw, Clock, FileSystem, MarkdownRenderer};
use crate::error::NoteError;

use super::input::{key_to_command, Command};
use super::preview::Viewport;
use super::prompt::TextInput;
use super::render::panes;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// Typing a new name for the folder at `target`
    Renaming { target: PathBuf },
    /// The external editor owns the terminal
    Suspended { path: PathBuf },
}

/// What the event loop must do after a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
    /// Hand the terminal to the editor for this note, then call
    /// [`Session::resume_after_editor`].
    LaunchEditor(PathBuf),
}

pub struct Session {
    tree: NoteTree,
    fs: Box<dyn FileSystem>,
    clock: Box<dyn Clock>,
    renderer: Box<dyn MarkdownRenderer>,
    layout: LayoutConfig,
    mode: Mode,
    input: TextInput,
    preview: Viewport,
    show_sidebar: bool,
    status: Option<String>,
    size: (u16, u16),
}

impl Session {
    pub fn new(
        tree: NoteTree,
        fs: Box<dyn FileSystem>,
        clock: Box<dyn Clock>,
        renderer: Box<dyn MarkdownRenderer>,
        layout: LayoutConfig,
        size: (u16, u16),
    ) -> Self {
        let mut session = Self {
            tree,
            fs,
            clock,
            renderer,
            layout,
            mode: Mode::Normal,
            input: TextInput::folder_name(),
            preview: Viewport::default(),
            show_sidebar: true,
            status: None,
            size,
        };
        session.resize(size.0, size.1);
        session.refresh_preview();
        session
    }

    pub fn tree(&self) -> &NoteTree {
        &self.tree
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn input(&self) -> &TextInput {
        &self.input
    }

    pub fn preview(&self) -> &Viewport {
        &self.preview
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn show_sidebar(&self) -> bool {
        self.show_sidebar
    }

    /// Transient message from the last failed operation
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn size(&self) -> (u16, u16) {
        self.size
    }

    /// Recompute pane sizes for a new terminal size.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.size = (width, height);
        let panes = panes(
            &self.layout,
            usize::from(width),
            usize::from(height),
            self.show_sidebar,
        );
        let (text_width, text_height) = panes.preview_text_size();
        self.preview.resize(text_width, text_height);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Outcome {
        if key.kind != KeyEventKind::Press {
            return Outcome::Continue;
        }
        self.status = None;

        match self.mode {
            Mode::Suspended { .. } => Outcome::Continue,
            Mode::Renaming { .. } => {
                self.handle_rename_key(key);
                Outcome::Continue
            }
            Mode::Normal => match key_to_command(key) {
                Some(command) => self.dispatch(command),
                None => {
                    self.preview.handle_key(key);
                    Outcome::Continue
                }
            },
        }
    }

    /// Run one Normal-mode command.
    pub fn dispatch(&mut self, command: Command) -> Outcome {
        match command {
            Command::MoveUp | Command::MoveDown => {
                let step = if command == Command::MoveUp {
                    Step::Up
                } else {
                    Step::Down
                };
                if self.tree.move_cursor(step) {
                    self.refresh_preview();
                }
            }
            Command::Expand => {
                let result = self.tree.expand_selected(self.fs.as_ref());
                self.after(result.map_err(NoteError::from));
            }
            Command::Collapse => {
                let result = self.tree.collapse_parent_and_select(self.fs.as_ref());
                self.after(result.map_err(NoteError::from));
            }
            Command::Open => return self.open_selected(),
            Command::NewNote => {
                let result = self.tree.create_note(self.fs.as_ref(), self.clock.as_ref());
                self.after(result);
            }
            Command::NewFolder => {
                let result = self.tree.create_folder(self.fs.as_ref());
                if let Some(path) = self.after(result) {
                    self.begin_rename(path);
                }
            }
            Command::Archive => match self.tree.archive_selected(self.fs.as_ref(), self.clock.as_ref()) {
                Err(NoteError::NoSelection) => {}
                result => {
                    self.after(result);
                }
            },
            Command::ToggleSidebar => {
                self.show_sidebar = !self.show_sidebar;
                self.resize(self.size.0, self.size.1);
            }
            Command::Quit => return Outcome::Quit,
        }
        Outcome::Continue
    }

    /// Leave the Suspended state and resync with the disk.
    ///
    /// Runs whatever the editor's exit status was.
    pub fn resume_after_editor(&mut self) {
        let target = match std::mem::replace(&mut self.mode, Mode::Normal) {
            Mode::Suspended { path } => Some(path),
            _ => None,
        };
        let result = self.tree.rebuild(self.fs.as_ref(), target.as_deref());
        self.after(result.map_err(NoteError::from));
    }

    fn open_selected(&mut self) -> Outcome {
        let Some(entry) = self.tree.selected() else {
            return Outcome::Continue;
        };
        let path = entry.path().to_path_buf();
        if entry.is_directory() {
            self.begin_rename(path);
            return Outcome::Continue;
        }
        self.mode = Mode::Suspended { path: path.clone() };
        Outcome::LaunchEditor(path)
    }

    /// Enter Renaming for `target`, seeded with its current name.
    fn begin_rename(&mut self, target: PathBuf) {
        let seed = self
            .tree
            .index_of(&target)
            .map(|i| self.tree.entries()[i].title().to_string())
            .unwrap_or_else(|| file_name(&target));
        self.input.set_value(&seed);
        self.mode = Mode::Renaming { target };
    }

    fn handle_rename_key(&mut self, key: KeyEvent) {
        let ctrl_c = key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter => {
                let name = self.input.value();
                self.input.reset();
                if let Mode::Renaming { target } = std::mem::replace(&mut self.mode, Mode::Normal) {
                    if !name.is_empty() {
                        let result = self.tree.rename(self.fs.as_ref(), &target, &name);
                        self.after(result);
                    }
                }
            }
            KeyCode::Esc => self.cancel_rename(),
            _ if ctrl_c => self.cancel_rename(),
            _ => {
                self.input.handle_key(key);
            }
        }
    }

    fn cancel_rename(&mut self) {
        self.input.reset();
        self.mode = Mode::Normal;
    }

    /// Common tail of every tree operation: refresh on success, report on failure.
    fn after<T>(&mut self, result: Result<T, NoteError>) -> Option<T> {
        match result {
            Ok(value) => {
                self.refresh_preview();
                Some(value)
            }
            Err(err) => {
                tracing::warn!(%err, "operation failed");
                self.status = Some(err.to_string());
                None
            }
        }
    }

    /// Re-read the selected note from disk and render it into the preview.
    fn refresh_preview(&mut self) {
        let text = match (self.tree.cursor(), self.tree.selected()) {
            (Some(index), Some(Entry::Directory { .. })) => folder_summary(&self.tree, index),
            (_, Some(Entry::Note { path, content, .. })) => {
                let markdown = match self.fs.read(path) {
                    Ok(fresh) => fresh,
                    Err(err) => {
                        tracing::debug!(path = %path.display(), %err, "using cached note content");
                        content.clone()
                    }
                };
                render_or_raw(self.renderer.as_ref(), &markdown)
            }
            _ => String::new(),
        };
        self.preview.set_content(text);
    }
}

/// Preview text for a selected folder
fn folder_summary(tree: &NoteTree, index: usize) -> String {
    let entries = tree.entries();
    let folder = &entries[index];
    if !folder.is_expanded() {
        return format!("{}/\n\ncollapsed, press l to expand", folder.title());
    }

    let children = entries[index + 1..]
        .iter()
        .take_while(|e| e.depth() > folder.depth())
        .filter(|e| e.depth() == folder.depth() + 1);
    let (folders, notes) = children.fold((0, 0), |(d, n), e| {
        if e.is_directory() {
            (d + 1, n)
        } else {
            (d, n + 1)
        }
    });
    format!("{}/\n\n{notes} notes, {folders} folders", folder.title())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
