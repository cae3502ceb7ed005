//! Main conversion pipeline for HTML to Markdown.
//!
//! Parsing produces the arena tree, the planner schedules a substitution for every node,
//! and the engine runs the schedule bottom-up and normalizes the assembled document.

use std::io::{Read, Write};

use log::debug;

use crate::converter::engine::run;
use crate::converter::planner::plan;
use crate::dom::Tree;
use crate::error::Result;
use crate::options::ConversionOptions;

/// Converts HTML bytes to Markdown using the provided conversion options.
pub fn convert_html(html: &[u8], options: &ConversionOptions) -> Result<String> {
    debug!("parsing {} bytes of HTML", html.len());
    let mut tree = Tree::parse(&mut &html[..])?;
    Ok(convert_tree(&mut tree, options))
}

/// Converts an already-parsed tree in place and returns the Markdown document.
///
/// Every node's `data` slot holds its Markdown fragment afterwards.
pub fn convert_tree(tree: &mut Tree, options: &ConversionOptions) -> String {
    let worklist = plan(tree, options.strip_unknown_tags);
    debug!(
        "planned {} substitutions over {} nodes (strip unknown tags: {})",
        worklist.len(),
        tree.len(),
        options.strip_unknown_tags
    );

    let markdown = run(tree, &worklist);
    debug!("produced {} bytes of Markdown", markdown.len());
    markdown
}

/// Reads HTML from `reader`, converts it, and writes the Markdown to `writer`.
///
/// Nothing is written unless parsing succeeds.
pub fn convert_stream<R: Read, W: Write>(reader: &mut R, writer: &mut W, options: &ConversionOptions) -> Result<()> {
    let mut tree = Tree::parse(reader)?;
    let markdown = convert_tree(&mut tree, options);
    writer.write_all(markdown.as_bytes())?;
    writer.flush()?;
    Ok(())
}
