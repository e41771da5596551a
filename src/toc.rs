//! Table-of-contents walk: order indices, paths, and note entries.
//!
//! Nodes are visited pre-order, depth-first, left to right; a node gets its
//! index before any of its children, so declaration order in the TOC is the
//! presentation order.

use crate::config::{NoteNode, TocNode};
use crate::diag::{Diagnostic, Reporter};
use crate::markdown::MarkdownRenderer;
use crate::model::{Comment, Description, PathSegment, NOTE_KIND};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Everything the merge step needs to know about the TOC.
#[derive(Debug, Default)]
pub struct TocIndex {
    /// Name → position; a repeated name keeps its last position
    pub order: HashMap<String, usize>,
    /// Bare name → path to attach to the matching comment
    pub paths: HashMap<String, Vec<PathSegment>>,
    /// Bare name → whether a top-level comment claimed it
    pub matched: HashMap<String, bool>,
    /// Bare names in first-seen order, for deterministic reporting
    pub match_order: Vec<String>,
    /// Synthesized note entries
    pub notes: Vec<Comment>,
}

impl TocIndex {
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.order.get(name).copied()
    }

    pub fn mark_matched(&mut self, name: &str) {
        if let Some(flag) = self.matched.get_mut(name) {
            *flag = true;
        }
    }

    /// Bare names no comment claimed, in TOC order.
    pub fn unmatched(&self) -> impl Iterator<Item = &str> {
        self.match_order
            .iter()
            .filter(|name| self.matched.get(name.as_str()) == Some(&false))
            .map(String::as_str)
    }
}

/// Walk `toc`, rendering note descriptions in place.
///
/// Note `file` paths are resolved against `base_dir` unless absolute. A file
/// that cannot be read is reported and the note keeps whatever description it
/// already had.
pub fn walk(
    toc: &mut [TocNode],
    base_dir: &Path,
    markdown: &dyn MarkdownRenderer,
    reporter: &mut dyn Reporter,
) -> TocIndex {
    let mut walker = Walker {
        base_dir,
        markdown,
        reporter,
        next: 0,
        index: TocIndex::default(),
    };
    for node in toc.iter_mut() {
        walker.visit(&[], node);
    }
    walker.index
}

struct Walker<'a> {
    base_dir: &'a Path,
    markdown: &'a dyn MarkdownRenderer,
    reporter: &'a mut dyn Reporter,
    next: usize,
    index: TocIndex,
}

impl Walker<'_> {
    fn visit(&mut self, parent: &[PathSegment], node: &mut TocNode) {
        let position = self.next;
        self.next += 1;

        match node {
            TocNode::Note(note) => {
                self.index.order.insert(note.name.clone(), position);
                self.resolve_description(note);

                let mut path = parent.to_vec();
                path.push(PathSegment::note(&note.name));
                for child in note.children.iter_mut() {
                    self.visit(&path, child);
                }

                self.index.notes.push(Comment {
                    name: Some(note.name.clone()),
                    kind: Some(NOTE_KIND.to_string()),
                    path,
                    description: note.description.clone(),
                    ..Default::default()
                });
            }
            TocNode::Name(name) => {
                self.index.order.insert(name.clone(), position);
                if self.index.matched.insert(name.clone(), false).is_none() {
                    self.index.match_order.push(name.clone());
                }
                let mut path = parent.to_vec();
                path.push(PathSegment::toc_ref(name));
                self.index.paths.insert(name.clone(), path);
            }
        }
    }

    fn resolve_description(&mut self, note: &mut NoteNode) {
        // join() leaves absolute paths untouched
        if let Some(path) = note.file.as_deref().map(|file| self.base_dir.join(file)) {
            match fs::read(&path) {
                Ok(bytes) => {
                    let text = String::from_utf8_lossy(&bytes).into_owned();
                    note.description = Some(Description::Text(text));
                    note.file = None;
                }
                Err(err) => self.reporter.report(Diagnostic::FileReadFailure {
                    path,
                    reason: err.to_string(),
                }),
            }
        } else if note.description.is_none() {
            note.description = Some(Description::Text(String::new()));
        }

        if let Some(text) = note.description.as_ref().and_then(Description::as_text) {
            let rendered = self.markdown.render(text);
            note.description = Some(Description::Rendered(rendered));
        }
    }
}
