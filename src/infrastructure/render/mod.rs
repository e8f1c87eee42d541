//! Markdown renderer implementations.

mod markdown;

pub use markdown::TerminalMarkdown;
