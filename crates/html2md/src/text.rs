//! Text normalization: collapsing whitespace inside text runs and tidying the final
//! Markdown document.

use once_cell::sync::Lazy;
use regex::Regex;

/// Runs of HTML whitespace inside a text node.
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\t\n\x0C\r ]+").expect("valid regex"));

/// Leading tabs/newlines or trailing whitespace of the whole document.
static DOCUMENT_EDGES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\t\r\n]+|[\t\r\n\x0C ]+$").expect("valid regex"));

/// A line holding nothing but whitespace between two newlines.
static WHITESPACE_ONLY_LINES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n[\t\n\x0C\r ]+\n").expect("valid regex"));

/// Three or more consecutive newlines.
pub(crate) static BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

/// Collapse whitespace runs to a single space and trim the edges.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Tidy an assembled Markdown document.
///
/// Trims the document edges, turns whitespace-only lines between newlines into plain
/// blank lines, then caps every run of blank lines at one. Applying it twice yields the
/// same text as applying it once.
#[must_use]
pub fn normalize_markdown(markdown: &str) -> String {
    let trimmed = DOCUMENT_EDGES.replace_all(markdown, "");
    let blank = WHITESPACE_ONLY_LINES.replace_all(&trimmed, "\n\n");
    BLANK_LINES.replace_all(&blank, "\n\n").into_owned()
}
