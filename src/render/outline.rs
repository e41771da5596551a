//! Outline renderer: one line per entry, indented by TOC depth.

use crate::model::Comment;
use crate::render::Renderer;
use anyhow::Result;

pub struct OutlineRenderer;

impl Renderer for OutlineRenderer {
    fn render(&self, comments: &[Comment]) -> Result<String> {
        let mut out = String::new();
        for comment in comments {
            out.push_str(&render_line(comment));
            out.push('\n');
        }
        Ok(out)
    }
}

/// Render one entry: two spaces per path segment above the entry itself,
/// then its name, then a `(note)` marker for TOC notes.
fn render_line(comment: &Comment) -> String {
    let depth = comment.path.len().saturating_sub(1);
    let name = comment.name.as_deref().unwrap_or("<anonymous>");
    let mut line = format!("{}{}", "  ".repeat(depth), name);
    if comment.is_note() {
        line.push_str(" (note)");
    }
    line
}
