//! Non-fatal problems found while sorting, and where they get reported.

use std::fmt;
use std::path::PathBuf;

/// A recoverable problem. Sorting always completes; these only explain what
/// could not be honored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A note's `file` could not be read.
    FileReadFailure { path: PathBuf, reason: String },
    /// A bare table-of-contents name matched no top-level comment.
    UnmatchedTocEntry { name: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::FileReadFailure { path, reason } => {
                write!(f, "Failed to read file {}: {}", path.display(), reason)
            }
            Diagnostic::UnmatchedTocEntry { name } => write!(
                f,
                "Table of contents defined sorting of {} but no documentation with that namepath was found",
                name
            ),
        }
    }
}

/// Sink for diagnostics.
pub trait Reporter {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Collect diagnostics for the caller to inspect.
impl Reporter for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Writes each diagnostic to stderr as a `warning:` line, counting them.
#[derive(Debug, Default)]
pub struct StderrReporter {
    pub count: usize,
}

impl Reporter for StderrReporter {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.count += 1;
        eprintln!("warning: {}", diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmatched_message_names_entry() {
        let diag = Diagnostic::UnmatchedTocEntry {
            name: "Ghost".to_string(),
        };
        assert_eq!(
            diag.to_string(),
            "Table of contents defined sorting of Ghost but no documentation with that namepath was found"
        );
    }

    #[test]
    fn file_failure_message_names_path() {
        let diag = Diagnostic::FileReadFailure {
            path: PathBuf::from("/docs/guide.md"),
            reason: "No such file or directory".to_string(),
        };
        assert!(diag.to_string().starts_with("Failed to read file /docs/guide.md"));
    }

    #[test]
    fn vec_collects() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        sink.report(Diagnostic::UnmatchedTocEntry {
            name: "A".to_string(),
        });
        assert_eq!(sink.len(), 1);
    }
}
