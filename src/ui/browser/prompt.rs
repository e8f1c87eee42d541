//! Single-line text input used by the rename prompt.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Maximum number of characters the rename prompt accepts
pub const NAME_CHAR_LIMIT: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    value: Vec<char>,
    /// Caret position as a char index into `value`
    caret: usize,
    placeholder: &'static str,
    char_limit: usize,
}

impl TextInput {
    pub fn new(placeholder: &'static str, char_limit: usize) -> Self {
        Self {
            value: Vec::new(),
            caret: 0,
            placeholder,
            char_limit,
        }
    }

    /// The rename prompt: "Folder name" placeholder, 50 characters
    pub fn folder_name() -> Self {
        Self::new("Folder name", NAME_CHAR_LIMIT)
    }

    /// Replace the value (truncated to the limit) and move the caret to the end.
    pub fn set_value(&mut self, value: &str) {
        self.value = value.chars().take(self.char_limit).collect();
        self.caret = self.value.len();
    }

    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn reset(&mut self) {
        self.value.clear();
        self.caret = 0;
    }

    /// Apply an editing key. Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('a') if ctrl => self.caret = 0,
            KeyCode::Char('e') if ctrl => self.caret = self.value.len(),
            KeyCode::Char('u') if ctrl => {
                self.value.drain(..self.caret);
                self.caret = 0;
            }
            KeyCode::Char('k') if ctrl => self.value.truncate(self.caret),
            KeyCode::Char(c) if !ctrl => self.insert(c),
            KeyCode::Backspace => {
                if self.caret > 0 {
                    self.caret -= 1;
                    self.value.remove(self.caret);
                }
            }
            KeyCode::Delete => {
                if self.caret < self.value.len() {
                    self.value.remove(self.caret);
                }
            }
            KeyCode::Left => self.caret = self.caret.saturating_sub(1),
            KeyCode::Right => self.caret = (self.caret + 1).min(self.value.len()),
            KeyCode::Home => self.caret = 0,
            KeyCode::End => self.caret = self.value.len(),
            _ => return false,
        }
        true
    }

    fn insert(&mut self, c: char) {
        if self.value.len() >= self.char_limit || c.is_control() {
            return;
        }
        self.value.insert(self.caret, c);
        self.caret += 1;
    }
}
