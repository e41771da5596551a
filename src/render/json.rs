//! JSON renderer: the sorted comments, annotations included.
//!
//! Output is a pretty-printed array that the next stage of a documentation
//! pipeline (or a second `tocsort` pass) can read back.

use crate::model::Comment;
use crate::render::Renderer;
use anyhow::{Context, Result};

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, comments: &[Comment]) -> Result<String> {
        let mut out =
            serde_json::to_string_pretty(comments).context("failed to serialize comments")?;
        out.push('\n');
        Ok(out)
    }
}
