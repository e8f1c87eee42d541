//! Scrollable preview pane.
//!
//! Holds the rendered text of the selected entry, wrapped to the pane
//! width. The offset is kept within `0..=max(0, lines - height)`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthChar;

#[derive(Debug, Clone, Default)]
pub struct Viewport {
    text: String,
    lines: Vec<String>,
    width: usize,
    height: usize,
    offset: usize,
}

impl Viewport {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Replace the content and scroll back to the top.
    pub fn set_content(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.lines = wrap(&self.text, self.width);
        self.offset = 0;
    }

    pub fn content(&self) -> &str {
        &self.text
    }

    /// Re-wrap for a new pane size, keeping the offset in range.
    pub fn resize(&mut self, width: usize, height: usize) {
        if width != self.width {
            self.width = width;
            self.lines = wrap(&self.text, width);
        }
        self.height = height;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Lines currently inside the pane
    pub fn visible_lines(&self) -> &[String] {
        let end = (self.offset + self.height).min(self.lines.len());
        &self.lines[self.offset.min(end)..end]
    }

    pub fn max_offset(&self) -> usize {
        self.lines.len().saturating_sub(self.height)
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn goto_top(&mut self) {
        self.offset = 0;
    }

    pub fn goto_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Scrolling keys. Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let page = self.height.max(1);
        let half = (self.height / 2).max(1);
        match key.code {
            KeyCode::PageDown | KeyCode::Char(' ') | KeyCode::Char('f') => self.scroll_down(page),
            KeyCode::PageUp | KeyCode::Char('b') => self.scroll_up(page),
            KeyCode::Char('d') => self.scroll_down(half),
            KeyCode::Char('u') => self.scroll_up(half),
            KeyCode::Home | KeyCode::Char('g') if !ctrl => self.goto_top(),
            KeyCode::End | KeyCode::Char('G') if !ctrl => self.goto_bottom(),
            _ => return false,
        }
        true
    }
}

/// Word-wrap `text` to `width` display columns. Words wider than the
/// pane are split. A zero width disables wrapping.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for line in text.lines() {
        if width == 0 {
            out.push(line.to_string());
            continue;
        }
        wrap_line(line, width, &mut out);
    }
    out
}

fn wrap_line(line: &str, width: usize, out: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_width = 0;

    for word in split_keep_spaces(line) {
        let word_width = str_width(word);
        if current_width + word_width <= width {
            current.push_str(word);
            current_width += word_width;
            continue;
        }
        if !current.is_empty() {
            out.push(current.trim_end().to_string());
            current.clear();
            current_width = 0;
        }
        if word.trim().is_empty() {
            continue;
        }
        for c in word.chars() {
            let w = c.width().unwrap_or(0);
            if current_width + w > width && !current.is_empty() {
                out.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(c);
            current_width += w;
        }
    }
    out.push(current.trim_end().to_string());
}

/// Split into words with their trailing spaces attached.
fn split_keep_spaces(line: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_space = false;
    for (i, c) in line.char_indices() {
        if c == ' ' {
            in_space = true;
        } else if in_space {
            parts.push(&line[start..i]);
            start = i;
            in_space = false;
        }
    }
    if start < line.len() {
        parts.push(&line[start..]);
    }
    parts
}

fn str_width(s: &str) -> usize {
    s.chars().map(|c| c.width().unwrap_or(0)).sum()
}
