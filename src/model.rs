//! Data model for documentation comments: what the sorter reads and annotates.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Kind tag given to entries authored in the table of contents.
pub const NOTE_KIND: &str = "note";

/// A single documentation entry.
///
/// Only the fields the sorter reads or writes are typed; everything else the
/// extraction pipeline produced is kept in `extra` and written back verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Namepath of the owning entry; absent on top-level comments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memberof: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Hierarchical location, written by the sorter for TOC entries
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<PathSegment>,
    #[serde(default, skip_serializing_if = "Context::is_empty")]
    pub context: Context,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Comment {
    /// True for entries synthesized from a table-of-contents note.
    pub fn is_note(&self) -> bool {
        self.kind.as_deref() == Some(NOTE_KIND)
    }

    /// True when the comment is not a member of another documented entity.
    /// An empty `memberof` counts as absent.
    pub fn is_top_level(&self) -> bool {
        self.memberof.as_deref().map_or(true, str::is_empty)
    }
}

/// Source context attached by the extraction pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Context {
    /// File path + position, encoded so that string order matches source order
    #[serde(default)]
    pub sort_key: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Context {
    fn is_empty(&self) -> bool {
        self.sort_key.is_empty() && self.extra.is_empty()
    }
}

/// Description body: raw markdown text, or something already transformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Text(String),
    Rendered(Rendered),
    /// Any other structured value (e.g. an AST from another pipeline)
    Other(Value),
}

impl Description {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Description::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Output of a [`MarkdownRenderer`](crate::markdown::MarkdownRenderer).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rendered {
    pub html: String,
}

/// Visibility scope of one path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Static,
    Instance,
    Inner,
    Global,
}

/// One step in a comment's hierarchical path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSegment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,
    pub name: String,
    /// Set on segments that name a bare table-of-contents reference
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub toc: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PathSegment {
    /// Segment for a table-of-contents note.
    pub fn note(name: &str) -> Self {
        PathSegment {
            scope: Some(Scope::Static),
            name: name.to_string(),
            toc: false,
            extra: Map::new(),
        }
    }

    /// Segment for a bare name referenced from the table of contents.
    pub fn toc_ref(name: &str) -> Self {
        PathSegment {
            toc: true,
            ..PathSegment::note(name)
        }
    }
}
