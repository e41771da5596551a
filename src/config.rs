//! Sort options and the table-of-contents tree, loaded from a JSON config file.

use crate::model::Description;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Options recognized by the sorter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    /// Explicit ordering; absent or empty means fallback ordering only
    #[serde(default)]
    pub toc: Option<Vec<TocNode>>,
    #[serde(default)]
    pub sort_order: SortOrder,
}

impl Options {
    /// The table of contents, if one is configured and non-empty.
    pub fn toc_mut(&mut self) -> Option<&mut [TocNode]> {
        self.toc.as_deref_mut().filter(|toc| !toc.is_empty())
    }
}

/// Fallback ordering for entries the table of contents does not place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortOrder {
    /// By name, case-insensitive with uppercase first on ties
    Alpha,
    /// By `context.sortKey`, i.e. source location
    #[default]
    Source,
}

impl From<String> for SortOrder {
    fn from(value: String) -> Self {
        SortOrder::from(value.as_str())
    }
}

impl From<&str> for SortOrder {
    fn from(value: &str) -> Self {
        match value {
            "alpha" => SortOrder::Alpha,
            _ => SortOrder::Source,
        }
    }
}

impl From<SortOrder> for String {
    fn from(value: SortOrder) -> Self {
        match value {
            SortOrder::Alpha => "alpha".to_string(),
            SortOrder::Source => "source".to_string(),
        }
    }
}

/// One entry of the table of contents.
///
/// A bare string references an existing comment by name; an object with a
/// `name` is an inline note. Any other shape is rejected at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TocNode {
    Name(String),
    Note(NoteNode),
}

/// Inline documentation authored in the table of contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteNode {
    pub name: String,
    /// Markdown file supplying the description; cleared once read
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TocNode>,
}

/// Parse options from JSON text.
pub fn parse(text: &str) -> Result<Options> {
    serde_json::from_str(text).context("invalid configuration")
}

/// Read and parse a JSON config file.
pub fn load(path: &Path) -> Result<Options> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    parse(&text).with_context(|| format!("in config {}", path.display()))
}
