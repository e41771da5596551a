//! Markdown transform for table-of-contents note bodies.
//!
//! The sorter treats rendering as opaque: it hands raw text to a
//! [`MarkdownRenderer`] and stores whatever comes back. [`HtmlMarkdown`] is the
//! default and covers the subset notes are written in: ATX headings, fenced
//! code, bullet lists, paragraphs, and inline code/strong/emphasis/links.

use crate::model::Rendered;
use regex::Regex;
use std::sync::LazyLock;

/// Transforms markdown text into its rendered representation.
pub trait MarkdownRenderer {
    fn render(&self, source: &str) -> Rendered;
}

/// Markdown → HTML.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlMarkdown;

static RE_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.*?)\s*#*\s*$").unwrap());

static RE_BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*[-*+]\s+(.*)$").unwrap());

static RE_CODE_SPAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`[^`]+`").unwrap());

static RE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)\s]+)\)").unwrap());

static RE_STRONG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());

static RE_EM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*([^*]+)\*").unwrap());

impl MarkdownRenderer for HtmlMarkdown {
    fn render(&self, source: &str) -> Rendered {
        Rendered {
            html: markdown_to_html(source),
        }
    }
}

/// Open block while scanning lines.
enum Open {
    None,
    Paragraph(Vec<String>),
    List(Vec<String>),
}

pub fn markdown_to_html(source: &str) -> String {
    let mut out = String::new();
    let mut open = Open::None;
    let mut lines = source.lines();

    while let Some(line) = lines.next() {
        // Fenced code: copied verbatim up to the closing fence
        if let Some(info) = line.trim_start().strip_prefix("```") {
            close(&mut out, &mut open);
            let lang = info.trim_matches('`').trim();
            let mut body = String::new();
            for code in lines.by_ref() {
                if code.trim_start().starts_with("```") {
                    break;
                }
                body.push_str(code);
                body.push('\n');
            }
            if lang.is_empty() {
                out.push_str("<pre><code>");
            } else {
                out.push_str(&format!("<pre><code class=\"language-{}\">", html_escape(lang)));
            }
            out.push_str(&html_escape(&body));
            out.push_str("</code></pre>\n");
            continue;
        }

        if line.trim().is_empty() {
            close(&mut out, &mut open);
            continue;
        }

        if let Some(caps) = RE_HEADING.captures(line) {
            close(&mut out, &mut open);
            let level = caps[1].len();
            out.push_str(&format!("<h{0}>{1}</h{0}>\n", level, render_inline(&caps[2])));
            continue;
        }

        if let Some(caps) = RE_BULLET.captures(line) {
            if !matches!(open, Open::List(_)) {
                close(&mut out, &mut open);
                open = Open::List(Vec::new());
            }
            if let Open::List(items) = &mut open {
                items.push(caps[1].to_string());
            }
            continue;
        }

        if let Open::None = open {
            open = Open::Paragraph(Vec::new());
        }
        match &mut open {
            Open::Paragraph(text) => text.push(line.trim().to_string()),
            // Lazy continuation of the previous list item
            Open::List(items) => {
                if let Some(last) = items.last_mut() {
                    last.push(' ');
                    last.push_str(line.trim());
                }
            }
            Open::None => {}
        }
    }
    close(&mut out, &mut open);
    out
}

fn close(out: &mut String, open: &mut Open) {
    match std::mem::replace(open, Open::None) {
        Open::None => {}
        Open::Paragraph(lines) => {
            out.push_str(&format!("<p>{}</p>\n", render_inline(&lines.join("\n"))));
        }
        Open::List(items) => {
            out.push_str("<ul>\n");
            for item in items {
                out.push_str(&format!("<li>{}</li>\n", render_inline(&item)));
            }
            out.push_str("</ul>\n");
        }
    }
}

/// Inline markup. Code spans are cut out first so their contents stay literal.
fn render_inline(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in RE_CODE_SPAN.find_iter(text) {
        out.push_str(&render_emphasis(&text[last..m.start()]));
        let code = &m.as_str()[1..m.as_str().len() - 1];
        out.push_str(&format!("<code>{}</code>", html_escape(code)));
        last = m.end();
    }
    out.push_str(&render_emphasis(&text[last..]));
    out
}

fn render_emphasis(text: &str) -> String {
    let escaped = html_escape(text);
    let linked = RE_LINK.replace_all(&escaped, "<a href=\"$2\">$1</a>");
    let strong = RE_STRONG.replace_all(&linked, "<strong>$1</strong>");
    RE_EM.replace_all(&strong, "<em>$1</em>").into_owned()
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
