//! tocsort: order extracted documentation comments by a table of contents.
//!
//! Reads comment arrays (JSON) from files or stdin, applies the `toc` and
//! `sortOrder` from an optional config file, and writes the sorted list:
//!
//! - **stdin mode**: `tocsort -c documentation.json < comments.json`
//! - **file mode**: `tocsort -c documentation.json -o sorted.json build/docs/*.json`

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::collections::BTreeSet;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tocsort::config::{self, Options, SortOrder};
use tocsort::diag::StderrReporter;
use tocsort::markdown::HtmlMarkdown;
use tocsort::model::Comment;
use tocsort::{render, Sorter};

#[derive(Parser)]
#[command(
    name = "tocsort",
    about = "Order documentation comments by a table of contents"
)]
struct Cli {
    /// Comment files, each a JSON array (glob patterns and directories supported).
    /// If omitted, reads one array from stdin.
    files: Vec<String>,

    /// JSON config file with `toc` and `sortOrder`
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Fallback order for entries the TOC does not place (overrides config)
    #[arg(short = 's', long, value_parser = ["alpha", "source"])]
    sort_order: Option<String>,

    /// Output format: json (default), outline
    #[arg(short = 'f', long, default_value = "json")]
    format: String,

    /// Write to this file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Directory that relative note `file` paths resolve against (default: cwd)
    #[arg(long)]
    base_dir: Option<PathBuf>,

    /// Exit with an error if any warning was reported
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut options = match cli.config.as_deref() {
        Some(path) => config::load(path)?,
        None => Options::default(),
    };
    if let Some(order) = cli.sort_order.as_deref() {
        options.sort_order = SortOrder::from(order);
    }

    // Resolve the format before doing any work
    let renderer = render::create_renderer(&cli.format)?;

    let comments = if cli.files.is_empty() {
        read_stdin()?
    } else {
        read_files(&collect_inputs(&cli.files)?)?
    };

    let mut reporter = StderrReporter::default();
    let mut sorter = Sorter::new(&HtmlMarkdown, &mut reporter);
    if let Some(dir) = &cli.base_dir {
        sorter = sorter.with_base_dir(dir.clone());
    }
    let sorted = sorter.sort(comments, &mut options);

    let output = renderer.render(&sorted)?;
    match cli.output.as_deref() {
        Some(path) => fs::write(path, &output)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{}", output),
    }

    if cli.strict && reporter.count > 0 {
        bail!("{} warning(s) reported in --strict mode", reporter.count);
    }
    Ok(())
}

fn read_stdin() -> Result<Vec<Comment>> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;
    serde_json::from_str(&input).context("invalid comments on stdin")
}

/// Read every file and concatenate the comment arrays in path order.
fn read_files(paths: &[PathBuf]) -> Result<Vec<Comment>> {
    let mut comments = Vec::new();
    for path in paths {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let parsed: Vec<Comment> = serde_json::from_str(&content)
            .with_context(|| format!("invalid comments in {}", path.display()))?;
        comments.extend(parsed);
    }
    Ok(comments)
}

/// Resolve CLI inputs to comment files. Existing files are taken as given,
/// a directory contributes its top-level `*.json` files, and anything else is
/// a glob pattern. The result is sorted and free of duplicates.
fn collect_inputs(inputs: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = BTreeSet::new();
    for input in inputs {
        let path = Path::new(input);
        if path.is_file() {
            files.insert(path.to_path_buf());
            continue;
        }
        let pattern = if path.is_dir() {
            format!("{}/*.json", glob::Pattern::escape(input.trim_end_matches('/')))
        } else {
            input.clone()
        };
        let mut matched = false;
        for entry in glob::glob(&pattern)
            .with_context(|| format!("invalid glob pattern: {}", input))?
            .flatten()
            .filter(|p| p.is_file())
        {
            matched = true;
            files.insert(entry);
        }
        if !matched {
            eprintln!("warning: no files matched: {}", input);
        }
    }
    Ok(files.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn directory_contributes_json_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.json"), "[]").unwrap();
        fs::write(dir.path().join("a.json"), "[]").unwrap();
        fs::write(dir.path().join("notes.md"), "# hi").unwrap();

        let files = collect_inputs(&[dir.path().to_string_lossy().to_string()]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.json", "b.json"]);
    }

    #[test]
    fn file_and_glob_overlap_once() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.json");
        fs::write(&file, "[]").unwrap();

        let pattern = format!("{}/*.json", dir.path().display());
        let files = collect_inputs(&[pattern, file.to_string_lossy().to_string()]).unwrap();
        assert_eq!(files, vec![file]);
    }

    #[test]
    fn directory_name_is_not_a_pattern() {
        let dir = TempDir::new().unwrap();
        let set = dir.path().join("set[1]");
        fs::create_dir(&set).unwrap();
        fs::write(set.join("a.json"), "[]").unwrap();
        fs::create_dir(set.join("nested")).unwrap();
        fs::write(set.join("nested").join("b.json"), "[]").unwrap();

        let files = collect_inputs(&[set.to_string_lossy().to_string()]).unwrap();
        assert_eq!(files, vec![set.join("a.json")]);
    }

    #[test]
    fn read_files_concatenates() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.json");
        let b = dir.path().join("b.json");
        fs::write(&a, r#"[{"name": "one"}]"#).unwrap();
        fs::write(&b, r#"[{"name": "two"}, {"name": "three"}]"#).unwrap();

        let comments = read_files(&[a, b]).unwrap();
        let names: Vec<_> = comments.iter().filter_map(|c| c.name.as_deref()).collect();
        assert_eq!(names, vec!["one", "two", "three"]);
    }

    #[test]
    fn read_files_names_bad_file() {
        let dir = TempDir::new().unwrap();
        let bad = dir.path().join("bad.json");
        fs::write(&bad, "{not json").unwrap();

        let err = read_files(&[bad]).unwrap_err();
        assert!(format!("{:#}", err).contains("bad.json"));
    }
}
