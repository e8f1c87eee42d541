//! Pure rendering of a [`Session`] into a [`Frame`].
//!
//! Nothing here touches the terminal; `paint` turns a frame into
//! crossterm commands. Every frame has exactly `height` lines and no
//! line is wider than `width` columns.

use unicode_width::UnicodeWidthChar;

use crate::config::LayoutConfig;
use crate::domain::entities::Entry;
use crate::ui::theme::Glyphs;

use super::session::{Mode, Session};

const TITLE: &str = "note";
const EMPTY_MESSAGE: &str = "No notes found. Press 'n' to create one.";
const RENAME_PROMPT: &str = "Enter folder name:";
const RENAME_FOOTER: &str = "Enter to confirm • Esc to cancel";
const RENAME_BOX_WIDTH: usize = 60;

/// Semantic style of a span; colors are chosen by the painter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Normal,
    /// Selected sidebar row
    Highlight,
    /// Status and help lines, placeholders
    Dim,
    /// Header title
    Title,
    Border,
    /// Character under the text caret
    Caret,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    fn push(&mut self, text: impl Into<String>, tone: Tone) {
        let text = text.into();
        if !text.is_empty() {
            self.spans.push(Span { text, tone });
        }
    }

    pub fn width(&self) -> usize {
        self.spans.iter().map(|s| display_width(&s.text)).sum()
    }

    pub fn plain(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: usize,
    pub height: usize,
    pub lines: Vec<Line>,
}

impl Frame {
    /// Text without styling, one line per row
    pub fn plain(&self) -> String {
        self.lines
            .iter()
            .map(Line::plain)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Screen rectangle in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

/// Pane geometry for one terminal size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panes {
    pub sidebar: Option<Rect>,
    pub preview: Rect,
    /// Rows inside the pane borders
    pub content_height: usize,
}

impl Panes {
    /// Columns and rows available to preview text (inside border and padding)
    pub fn preview_text_size(&self) -> (usize, usize) {
        (self.preview.width.saturating_sub(4), self.content_height)
    }
}

/// Lay out the sidebar and preview boxes below the header.
pub fn panes(layout: &LayoutConfig, width: usize, height: usize, show_sidebar: bool) -> Panes {
    let heights = layout.calculate_heights(height);
    let pad = layout.padding.horizontal;
    let y = heights.header + layout.header_gap;
    let box_height = heights.content + 2;

    let mut x = pad;
    let sidebar = show_sidebar.then(|| {
        let rect = Rect {
            x,
            y,
            width: layout.sidebar_width + 2,
            height: box_height,
        };
        x += rect.width + pad;
        rect
    });
    let preview = Rect {
        x,
        y,
        width: width.saturating_sub(x + pad),
        height: box_height,
    };

    Panes {
        sidebar,
        preview,
        content_height: heights.content,
    }
}

/// Draw the whole screen.
pub fn render_view(session: &Session, glyphs: &Glyphs, width: usize, height: usize) -> Frame {
    let layout = session.layout();
    let heights = layout.calculate_heights(height);
    let mut lines = Vec::with_capacity(height);

    lines.extend(header(glyphs, width, heights.header));
    for i in 0..layout.header_gap {
        let mut line = Line::default();
        if i == 0 {
            line.push(glyphs.horizontal.repeat(width), Tone::Dim);
        }
        lines.push(line);
    }

    let body_rows = heights.content + 2;
    let body = match session.mode() {
        Mode::Renaming { .. } => rename_box(session, glyphs, width, layout),
        _ if session.tree().is_empty() => empty_state(layout),
        _ => panes_body(session, glyphs, width, height),
    };
    lines.extend(body.into_iter().chain(std::iter::repeat_with(Line::default)).take(body_rows));

    lines.extend(footer(session, glyphs, layout));

    lines.truncate(height);
    lines.resize_with(height, Line::default);
    for line in &mut lines {
        clip(line, width);
    }

    Frame {
        width,
        height,
        lines,
    }
}

fn header(glyphs: &Glyphs, width: usize, rows: usize) -> Vec<Line> {
    let title = if glyphs.pen.is_empty() {
        TITLE.to_string()
    } else {
        format!("{TITLE} {}", glyphs.pen)
    };
    let left = width.saturating_sub(display_width(&title)) / 2;

    let mut lines = vec![Line::default(); rows];
    if let Some(first) = lines.first_mut() {
        first.push(" ".repeat(left), Tone::Normal);
        first.push(title, Tone::Title);
    }
    lines
}

fn empty_state(layout: &LayoutConfig) -> Vec<Line> {
    let mut line = Line::default();
    line.push(" ".repeat(layout.padding.horizontal), Tone::Normal);
    line.push(EMPTY_MESSAGE, Tone::Normal);
    vec![Line::default(), line]
}

fn panes_body(session: &Session, glyphs: &Glyphs, width: usize, height: usize) -> Vec<Line> {
    let layout = session.layout();
    let geometry = panes(layout, width, height, session.show_sidebar());
    let rows = geometry.content_height;

    let sidebar_rows = geometry
        .sidebar
        .map(|rect| sidebar_rows(session, glyphs, rect.width.saturating_sub(2), rows));
    let preview_rows: Vec<Line> = session
        .preview()
        .visible_lines()
        .iter()
        .map(|text| {
            let mut line = Line::default();
            line.push(" ", Tone::Normal);
            line.push(sanitize(text), Tone::Normal);
            line
        })
        .collect();

    let mut out = Vec::with_capacity(rows + 2);
    for row in 0..rows + 2 {
        let mut line = Line::default();
        let mut col = 0;
        if let (Some(rect), Some(content)) = (geometry.sidebar, sidebar_rows.as_ref()) {
            line.push(" ".repeat(rect.x - col), Tone::Normal);
            boxed_row(&mut line, glyphs, rect.width, row, rows, content.get(row.wrapping_sub(1)));
            col = rect.x + rect.width;
        }
        let rect = geometry.preview;
        if rect.width >= 2 {
            line.push(" ".repeat(rect.x.saturating_sub(col)), Tone::Normal);
            boxed_row(&mut line, glyphs, rect.width, row, rows, preview_rows.get(row.wrapping_sub(1)));
        }
        out.push(line);
    }
    out
}

/// Row `row` of a bordered box `width` wide with `inner_rows` content rows.
fn boxed_row(
    line: &mut Line,
    glyphs: &Glyphs,
    width: usize,
    row: usize,
    inner_rows: usize,
    content: Option<&Line>,
) {
    let inner = width.saturating_sub(2);
    if row == 0 || row == inner_rows + 1 {
        let (left, right) = if row == 0 {
            (glyphs.top_left, glyphs.top_right)
        } else {
            (glyphs.bottom_left, glyphs.bottom_right)
        };
        line.push(
            format!("{left}{}{right}", glyphs.horizontal.repeat(inner)),
            Tone::Border,
        );
        return;
    }

    line.push(glyphs.vertical, Tone::Border);
    let mut body = content.cloned().unwrap_or_default();
    clip(&mut body, inner);
    let fill = inner - body.width();
    line.spans.extend(body.spans);
    line.push(" ".repeat(fill), Tone::Normal);
    line.push(glyphs.vertical, Tone::Border);
}

/// Sidebar lines, scrolled so the cursor stays visible
fn sidebar_rows(session: &Session, glyphs: &Glyphs, inner: usize, rows: usize) -> Vec<Line> {
    let tree = session.tree();
    let entries = tree.entries();
    let cursor = tree.cursor().unwrap_or(0);
    let start = if rows == 0 || cursor < rows {
        0
    } else {
        cursor + 1 - rows
    };

    entries
        .iter()
        .enumerate()
        .skip(start)
        .take(rows)
        .map(|(i, entry)| {
            let icon = match entry {
                Entry::Directory { expanded: true, .. } => glyphs.expanded,
                Entry::Directory { .. } => glyphs.collapsed,
                Entry::Note { depth, .. } => {
                    let has_sibling_below = entries.get(i + 1).is_some_and(|next| next.depth() >= *depth);
                    if has_sibling_below {
                        glyphs.branch
                    } else {
                        glyphs.last_branch
                    }
                }
            };
            let text = format!(
                " {}{} {}",
                "  ".repeat(entry.depth()),
                icon,
                sanitize(entry.title())
            );
            let tone = if Some(i) == tree.cursor() {
                Tone::Highlight
            } else {
                Tone::Normal
            };
            let mut line = Line::default();
            line.push(text, tone);
            clip(&mut line, inner);
            line
        })
        .collect()
}

fn rename_box(session: &Session, glyphs: &Glyphs, width: usize, layout: &LayoutConfig) -> Vec<Line> {
    let pad = layout.padding.horizontal;
    let box_width = width.saturating_sub(pad * 2).min(RENAME_BOX_WIDTH);
    if box_width < 4 {
        return Vec::new();
    }

    let mut prompt = Line::default();
    prompt.push(" ".repeat(pad), Tone::Normal);
    prompt.push(RENAME_PROMPT, Tone::Normal);

    let content = [
        Line::default(),
        prompt,
        Line::default(),
        input_line(session, pad),
        Line::default(),
    ];

    (0..content.len() + 2)
        .map(|row| {
            let mut line = Line::default();
            line.push(" ".repeat(pad), Tone::Normal);
            boxed_row(&mut line, glyphs, box_width, row, content.len(), content.get(row.wrapping_sub(1)));
            line
        })
        .collect()
}

fn input_line(session: &Session, pad: usize) -> Line {
    let input = session.input();
    let mut line = Line::default();
    line.push(" ".repeat(pad), Tone::Normal);
    line.push("> ", Tone::Highlight);

    if input.is_empty() {
        line.push(" ", Tone::Caret);
        line.push(input.placeholder(), Tone::Dim);
        return line;
    }

    let chars: Vec<char> = sanitize(&input.value()).chars().collect();
    let caret = input.caret().min(chars.len());
    line.push(chars[..caret].iter().collect::<String>(), Tone::Normal);
    match chars.get(caret) {
        Some(c) => {
            line.push(c.to_string(), Tone::Caret);
            line.push(chars[caret + 1..].iter().collect::<String>(), Tone::Normal);
        }
        None => line.push(" ", Tone::Caret),
    }
    line
}

fn footer(session: &Session, glyphs: &Glyphs, layout: &LayoutConfig) -> Vec<Line> {
    let pad = " ".repeat(layout.padding.horizontal);
    let status_text = match session.mode() {
        Mode::Renaming { .. } => RENAME_FOOTER.replace('•', glyphs.separator),
        _ => match session.status() {
            Some(message) => message.to_string(),
            None => status_line(session, glyphs),
        },
    };
    let help_text = match session.mode() {
        Mode::Renaming { .. } => String::new(),
        _ => help_line(glyphs),
    };

    let tone = if session.status().is_some() {
        Tone::Highlight
    } else {
        Tone::Dim
    };

    let mut rows = Vec::new();
    for i in 0..layout.heights.status {
        let mut line = Line::default();
        if i == 0 {
            line.push(pad.clone(), Tone::Normal);
            line.push(sanitize(&status_text), tone);
        }
        rows.push(line);
    }
    for i in 0..layout.heights.help {
        let mut line = Line::default();
        if i == 0 {
            line.push(pad.clone(), Tone::Normal);
            line.push(help_text.clone(), Tone::Dim);
        }
        rows.push(line);
    }
    rows
}

/// "<selected title> • <n> notes"
pub fn status_line(session: &Session, glyphs: &Glyphs) -> String {
    let tree = session.tree();
    let count = format!("{} notes", tree.len());
    match tree.selected() {
        Some(entry) => format!("{} {} {count}", entry.title(), glyphs.separator),
        None => count,
    }
}

pub fn help_line(glyphs: &Glyphs) -> String {
    [
        format!("{}: up/down", glyphs.up_down),
        "h/l: expand".to_string(),
        "enter: edit".to_string(),
        "n: new note".to_string(),
        "N: new folder".to_string(),
        "backspace: archive".to_string(),
        "tab: show sidebar".to_string(),
        "q: quit".to_string(),
    ]
    .join(&format!(" {} ", glyphs.separator))
}

/// Replace control characters (a stray `\r` in a title, tabs) with spaces.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

fn display_width(text: &str) -> usize {
    text.chars().map(|c| c.width().unwrap_or(0)).sum()
}

/// Cut `line` to at most `width` columns.
fn clip(line: &mut Line, width: usize) {
    let mut used = 0;
    let mut keep = 0;
    for span in &mut line.spans {
        let span_width = display_width(&span.text);
        if used + span_width <= width {
            used += span_width;
            keep += 1;
            continue;
        }
        let mut cut = String::new();
        for c in span.text.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;
            cut.push(c);
        }
        span.text = cut;
        keep += 1;
        break;
    }
    line.spans.truncate(keep);
    line.spans.retain(|s| !s.text.is_empty());
}
