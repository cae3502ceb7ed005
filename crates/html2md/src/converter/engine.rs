//! Worklist execution and content extraction.

use log::trace;

use crate::converter::planner::WorklistEntry;
use crate::converter::{rules, whitespace};
use crate::dom::{NodeId, NodeKind, Tree};
use crate::text::{normalize_markdown, normalize_text};

/// Execute the worklist back to front and return the finished Markdown document.
///
/// Running in reverse converts every descendant before its ancestor, so a rule always
/// reads already-converted child fragments. Each node's padding is computed from its
/// raw content before its own `data` is overwritten.
pub fn run(tree: &mut Tree, worklist: &[WorklistEntry]) -> String {
    for entry in worklist.iter().rev() {
        let (leading, trailing) = whitespace::pad(tree, entry.node);
        let content = content(tree, entry.node, true);
        let replaced = rules::apply(entry.rule, &content, tree, entry.node);
        trace!("{:?} on node {} -> {:?}", entry.rule, entry.node, replaced);

        tree.node_mut(entry.node).data = format!("{leading}{replaced}{trailing}");
    }

    normalize_markdown(&content(tree, Tree::ROOT, true))
}

/// Concatenate the current fragments of a node's children.
///
/// Element children contribute their `data` verbatim; text children contribute their
/// `data` raw or whitespace-normalized. Empty children and every other node kind
/// contribute nothing. For a text node, its own text is returned.
#[must_use]
pub fn content(tree: &Tree, id: NodeId, normalize: bool) -> String {
    let node = tree.node(id);
    if node.kind == NodeKind::Text {
        return text_data(&node.data, normalize);
    }

    let mut out = String::new();
    for &child in &node.children {
        let child = tree.node(child);
        if child.data.is_empty() {
            continue;
        }
        match child.kind {
            NodeKind::Element => out.push_str(&child.data),
            NodeKind::Text => out.push_str(&text_data(&child.data, normalize)),
            NodeKind::Document | NodeKind::Comment | NodeKind::Doctype => {}
        }
    }
    out
}

fn text_data(data: &str, normalize: bool) -> String {
    if normalize {
        normalize_text(data)
    } else {
        data.to_string()
    }
}
