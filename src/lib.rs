//! tocsort: order documentation comments for presentation.
//!
//! Comments listed in a user-authored table of contents come first, in TOC
//! order, interleaved with notes written inline in the TOC. Everything else
//! follows, sorted by name or by source location.
//!
//! ```no_run
//! use tocsort::{config, diag::Diagnostic, model::Comment};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut options = config::parse(r#"{"toc": [{"name": "Intro"}, "parse"]}"#)?;
//! let comments: Vec<Comment> = serde_json::from_str(r#"[{"name": "parse"}]"#)?;
//! let mut diagnostics: Vec<Diagnostic> = Vec::new();
//! let sorted = tocsort::sort_docs(comments, &mut options, &mut diagnostics);
//! assert_eq!(sorted.len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod compare;
pub mod config;
pub mod diag;
pub mod markdown;
pub mod merge;
pub mod model;
pub mod render;
pub mod toc;

use config::Options;
use diag::Reporter;
use markdown::{HtmlMarkdown, MarkdownRenderer};
use model::Comment;
use std::env;
use std::path::PathBuf;

/// Sorting session: where note files live, how notes are rendered, and where
/// diagnostics go.
pub struct Sorter<'a> {
    base_dir: PathBuf,
    markdown: &'a dyn MarkdownRenderer,
    reporter: &'a mut dyn Reporter,
}

impl<'a> Sorter<'a> {
    /// Note files resolve against the current working directory.
    pub fn new(markdown: &'a dyn MarkdownRenderer, reporter: &'a mut dyn Reporter) -> Self {
        Sorter {
            base_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            markdown,
            reporter,
        }
    }

    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    /// Order `comments`, adding one entry per TOC note.
    ///
    /// Without a TOC this is a plain sort by `options.sort_order`. With one,
    /// the TOC is walked (rendering note descriptions in place, so a repeat
    /// call with the same `options` does no file or markdown work) and the
    /// comments are partitioned around it. Feeding the output back in yields
    /// the same sequence.
    pub fn sort(&mut self, mut comments: Vec<Comment>, options: &mut Options) -> Vec<Comment> {
        let sort_order = options.sort_order;
        let Some(toc) = options.toc_mut() else {
            compare::sort_comments(&mut comments, sort_order);
            return comments;
        };
        let index = toc::walk(toc, &self.base_dir, self.markdown, &mut *self.reporter);
        merge::merge(comments, index, sort_order, &mut *self.reporter)
    }
}

/// Sort with the default HTML markdown renderer, resolving note files against
/// the current working directory.
pub fn sort_docs(
    comments: Vec<Comment>,
    options: &mut Options,
    reporter: &mut dyn Reporter,
) -> Vec<Comment> {
    Sorter::new(&HtmlMarkdown, reporter).sort(comments, options)
}
