//! Convert HTML documents to Markdown.
//!
//! The input is parsed with html5ever into an index-addressed node arena. Every node is
//! then replaced bottom-up by its Markdown fragment: children are converted before their
//! parents, so each substitution rule sees finished child text. Inline whitespace that
//! text normalization would swallow is re-inserted around inline elements, and the
//! assembled document is trimmed and its blank-line runs collapsed.
//!
//! ```
//! let markdown = html2md::convert(b"<h2>Title</h2><p><strong>bold</strong> and <em>it</em></p>", false)?;
//! assert_eq!(markdown, "## Title\n\n**bold** and _it_");
//! # Ok::<(), html2md::ConversionError>(())
//! ```

pub mod converter;
pub mod dom;
pub mod error;
pub mod options;
pub mod tags;
pub mod text;

use std::io::{Read, Write};

pub use dom::{Node, NodeId, NodeKind, Tree};
pub use error::{ConversionError, Result};
pub use options::ConversionOptions;
pub use tags::{Rule, Tag};

/// Convert UTF-8 HTML bytes to Markdown.
///
/// With `strip_unknown_tags` set, elements that are not known HTML tags are discarded
/// together with their content; otherwise they are kept as literal `<tag>…</tag>` markup.
pub fn convert(input: &[u8], strip_unknown_tags: bool) -> Result<String> {
    convert_with_options(input, &ConversionOptions::new().with_strip_unknown_tags(strip_unknown_tags))
}

/// Convert UTF-8 HTML bytes to Markdown with explicit options.
pub fn convert_with_options(input: &[u8], options: &ConversionOptions) -> Result<String> {
    converter::convert_html(input, options)
}

/// Read HTML from `reader` and write the converted Markdown to `writer`.
///
/// Parse failures are reported before anything is written.
pub fn convert_reader<R: Read, W: Write>(reader: &mut R, writer: &mut W, options: &ConversionOptions) -> Result<()> {
    converter::convert_stream(reader, writer, options)
}
