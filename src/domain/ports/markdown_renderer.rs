//! MarkdownRenderer port - turns note markdown into display text

use thiserror::Error;

/// Rendering failed; callers fall back to the raw markdown
#[derive(Debug, Error)]
#[error("markdown rendering failed: {0}")]
pub struct RenderError(pub String);

/// Converts markdown source into plain display text.
pub trait MarkdownRenderer {
    fn render(&self, markdown: &str) -> Result<String, RenderError>;
}

/// Render `markdown`, returning the raw text verbatim if the renderer fails.
pub fn render_or_raw(renderer: &dyn MarkdownRenderer, markdown: &str) -> String {
    match renderer.render(markdown) {
        Ok(text) => text,
        Err(err) => {
            tracing::debug!(%err, "falling back to raw markdown");
            markdown.to_string()
        }
    }
}
