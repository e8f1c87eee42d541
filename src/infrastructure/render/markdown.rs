//! Markdown to terminal text, via pulldown-cmark.
//!
//! Output is plain text: structure is kept with markers (`#` headings,
//! bullets, indented code) and the view adds colour per line.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

use crate::domain::ports::{MarkdownRenderer, RenderError};

const RULE: &str = "────────────────────────";

/// Renders markdown to plain structured text
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalMarkdown;

impl TerminalMarkdown {
    pub fn new() -> Self {
        Self
    }
}

impl MarkdownRenderer for TerminalMarkdown {
    fn render(&self, markdown: &str) -> Result<String, RenderError> {
        let rendered = render_plain(markdown);
        if rendered.is_empty() && !markdown.trim().is_empty() {
            return Err(RenderError("markdown produced no text".to_string()));
        }
        Ok(rendered)
    }
}

#[derive(Default)]
struct Writer {
    out: String,
    /// `None` for bullet lists, `Some(next)` for ordered lists
    lists: Vec<Option<u64>>,
    links: Vec<String>,
    quote_depth: usize,
    in_code_block: bool,
}

impl Writer {
    fn ensure_newline(&mut self) {
        if !self.out.is_empty() && !self.out.ends_with('\n') {
            self.out.push('\n');
        }
    }

    fn ensure_blank_line(&mut self) {
        if self.out.is_empty() || self.out.ends_with("\n\n") {
            return;
        }
        self.ensure_newline();
        self.out.push('\n');
    }

    fn quote_prefix(&mut self) {
        for _ in 0..self.quote_depth {
            self.out.push_str("│ ");
        }
    }

    fn text(&mut self, text: &str) {
        if self.in_code_block {
            for line in text.split_inclusive('\n') {
                self.quote_prefix();
                self.out.push_str("    ");
                self.out.push_str(line);
            }
        } else {
            self.out.push_str(text);
        }
    }
}

fn render_plain(input: &str) -> String {
    let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let mut w = Writer::default();

    for event in Parser::new_ext(input, options) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                w.ensure_blank_line();
                w.out.push_str(&"#".repeat(level as usize));
                w.out.push(' ');
            }
            Event::End(TagEnd::Heading(_)) => w.ensure_blank_line(),
            Event::Start(Tag::Paragraph) => {
                if w.lists.is_empty() {
                    w.ensure_blank_line();
                    w.quote_prefix();
                }
            }
            Event::End(TagEnd::Paragraph) => {
                if w.lists.is_empty() {
                    w.ensure_blank_line();
                } else {
                    w.ensure_newline();
                }
            }
            Event::Start(Tag::BlockQuote) => w.quote_depth += 1,
            Event::End(TagEnd::BlockQuote) => {
                w.quote_depth = w.quote_depth.saturating_sub(1);
            }
            Event::Start(Tag::List(start)) => {
                if w.lists.is_empty() {
                    w.ensure_blank_line();
                } else {
                    w.ensure_newline();
                }
                w.lists.push(start);
            }
            Event::End(TagEnd::List(_)) => {
                w.lists.pop();
                if w.lists.is_empty() {
                    w.ensure_blank_line();
                }
            }
            Event::Start(Tag::Item) => {
                w.ensure_newline();
                w.quote_prefix();
                let indent = "  ".repeat(w.lists.len().saturating_sub(1));
                w.out.push_str(&indent);
                match w.lists.last_mut() {
                    Some(Some(n)) => {
                        w.out.push_str(&format!("{n}. "));
                        *n += 1;
                    }
                    _ => w.out.push_str("• "),
                }
            }
            Event::End(TagEnd::Item) => w.ensure_newline(),
            Event::TaskListMarker(done) => {
                w.out.push_str(if done { "[x] " } else { "[ ] " });
            }
            Event::Start(Tag::CodeBlock(_)) => {
                w.ensure_blank_line();
                w.in_code_block = true;
            }
            Event::End(TagEnd::CodeBlock) => {
                w.in_code_block = false;
                w.ensure_blank_line();
            }
            Event::Start(Tag::Link { dest_url, .. }) => w.links.push(dest_url.to_string()),
            Event::End(TagEnd::Link) => {
                if let Some(url) = w.links.pop() {
                    w.out.push_str(&format!(" <{url}>"));
                }
            }
            Event::Text(t) => w.text(&t),
            Event::Code(t) => {
                w.out.push('`');
                w.out.push_str(&t);
                w.out.push('`');
            }
            Event::Html(t) => w.out.push_str(&t),
            Event::SoftBreak | Event::HardBreak => {
                w.out.push('\n');
                w.quote_prefix();
            }
            Event::Rule => {
                w.ensure_blank_line();
                w.out.push_str(RULE);
                w.out.push_str("\n\n");
            }
            _ => {}
        }
    }

    w.out.trim_end().to_string()
}
