//! Partition comments into TOC-pinned and free entries, then concatenate.

use crate::compare;
use crate::config::SortOrder;
use crate::diag::{Diagnostic, Reporter};
use crate::model::Comment;
use crate::toc::TocIndex;

/// Order `comments` against a walked table of contents.
///
/// Pinned entries (notes, plus top-level comments whose name the TOC lists)
/// come first in TOC order; everything else follows in `sort_order`.
/// Notes already present in `comments` are dropped, since `index.notes`
/// supplies them again. TOC names no comment claimed are reported once the
/// pass is complete.
pub fn merge(
    comments: Vec<Comment>,
    mut index: TocIndex,
    sort_order: SortOrder,
    reporter: &mut dyn Reporter,
) -> Vec<Comment> {
    let mut fixed = std::mem::take(&mut index.notes);
    let mut unfixed = Vec::new();

    for mut comment in comments {
        if let Some(path) = comment.name.as_deref().and_then(|n| index.paths.get(n)) {
            comment.path = path.clone();
        }

        // Output of an earlier sort; the walk already produced this note
        if comment.is_note() {
            continue;
        }

        let pinned = match comment.name.as_deref() {
            Some(name) if comment.is_top_level() && index.index_of(name).is_some() => {
                index.mark_matched(name);
                true
            }
            _ => false,
        };
        if pinned {
            fixed.push(comment);
        } else {
            unfixed.push(comment);
        }
    }

    fixed.sort_by_key(|c| c.name.as_deref().and_then(|n| index.index_of(n)));
    compare::sort_comments(&mut unfixed, sort_order);

    for name in index.unmatched() {
        reporter.report(Diagnostic::UnmatchedTocEntry {
            name: name.to_string(),
        });
    }

    fixed.extend(unfixed);
    fixed
}
