//! Output formats: trait-based dispatch for the sorted comment list.

pub mod json;
pub mod outline;

use crate::model::Comment;
use anyhow::{anyhow, Result};

/// Trait for writing a sorted comment list in a specific output format.
pub trait Renderer {
    fn render(&self, comments: &[Comment]) -> Result<String>;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "json" => Ok(Box::new(json::JsonRenderer)),
        "outline" | "txt" => Ok(Box::new(outline::OutlineRenderer)),
        _ => Err(anyhow!(
            "unknown format: {}. Use json or outline",
            format
        )),
    }
}
