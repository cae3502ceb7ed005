//! Worklist construction.
//!
//! The planner walks the tree in document order and pairs every node that needs a
//! substitution with its [`Rule`]. A node's entry always precedes the entries of its
//! descendants, so the engine consumes the list back to front.

use crate::dom::{NodeId, NodeKind, Tree};
use crate::tags::{Rule, classify};

/// A node scheduled for substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorklistEntry {
    /// Node to convert.
    pub node: NodeId,
    /// Rule producing its Markdown fragment.
    pub rule: Rule,
}

/// Build the worklist for every descendant of the document root.
///
/// Dropped elements, comments, and doctypes get their `data` cleared on the spot and no
/// entry. Their subtrees are still planned: descendant rules run, but their output is
/// never read because content extraction skips the blanked ancestor.
pub fn plan(tree: &mut Tree, strip_unknown: bool) -> Vec<WorklistEntry> {
    let mut worklist = Vec::with_capacity(tree.len());
    let mut pending: Vec<NodeId> = tree.node(Tree::ROOT).children.iter().rev().copied().collect();

    while let Some(id) = pending.pop() {
        let node = tree.node(id);
        let rule = match node.kind {
            NodeKind::Element => node.tag.and_then(|tag| classify(tag, strip_unknown)),
            NodeKind::Text => Some(Rule::Text),
            NodeKind::Document | NodeKind::Comment | NodeKind::Doctype => None,
        };

        // Children are pushed in reverse so they pop in document order, right after
        // their parent and before the parent's next sibling.
        pending.extend(node.children.iter().rev().copied());

        match rule {
            Some(rule) => worklist.push(WorklistEntry { node: id, rule }),
            None => tree.node_mut(id).data.clear(),
        }
    }

    worklist
}
