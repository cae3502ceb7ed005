//! Inline whitespace reconstruction.
//!
//! Text content is whitespace-normalized when it is read, which trims the single space a
//! browser would render between adjacent inline runs. [`pad`] puts that space back around
//! an inline node's fragment.

use crate::converter::engine::content;
use crate::dom::{NodeId, NodeKind, Tree};
use crate::tags::is_block;

const SPACE: &str = " ";

#[derive(Clone, Copy)]
enum Direction {
    Previous,
    Next,
}

/// Leading and trailing padding for a node, each either `" "` or `""`.
///
/// Block elements and nodes with no raw content are never padded. Otherwise a side is
/// padded when the node's own raw content starts (ends) with whitespace, or when the
/// nearest text/element sibling on that side ends (starts) with whitespace.
#[must_use]
pub fn pad(tree: &Tree, id: NodeId) -> (&'static str, &'static str) {
    let raw = content(tree, id, false);
    if raw.is_empty() || tree.tag_of(id).is_some_and(is_block) {
        return ("", "");
    }

    let leading =
        raw.chars().next().is_some_and(char::is_whitespace) || sibling_has_space(tree, id, Direction::Previous);
    let trailing =
        raw.chars().next_back().is_some_and(char::is_whitespace) || sibling_has_space(tree, id, Direction::Next);

    (if leading { SPACE } else { "" }, if trailing { SPACE } else { "" })
}

fn sibling_has_space(tree: &Tree, id: NodeId, direction: Direction) -> bool {
    let step = |node: NodeId| match direction {
        Direction::Previous => tree.node(node).prev_sibling,
        Direction::Next => tree.node(node).next_sibling,
    };

    let mut current = step(id);
    let sibling = loop {
        match current {
            None => return false,
            Some(candidate) if matches!(tree.node(candidate).kind, NodeKind::Element | NodeKind::Text) => {
                break candidate;
            }
            Some(candidate) => current = step(candidate),
        }
    };

    if tree.tag_of(sibling).is_some_and(is_block) {
        return false;
    }

    let node = tree.node(sibling);
    let sibling_content = if node.kind == NodeKind::Text {
        node.data.clone()
    } else {
        content(tree, sibling, true)
    };

    let edge = match direction {
        Direction::Previous => sibling_content.chars().next_back(),
        Direction::Next => sibling_content.chars().next(),
    };

    // A sibling that is nothing but one whitespace character is not a separator to share.
    edge.is_some_and(char::is_whitespace) && sibling_content.len() > 1
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_ATTRS: &[(&str, &str)] = &[];

    #[test]
    fn block_elements_are_never_padded() {
        let mut tree = Tree::new();
        tree.append_text(Tree::ROOT, "before ");
        let p = tree.append_element(Tree::ROOT, "p", NO_ATTRS);
        tree.append_text(p, " spaced ");
        assert_eq!(pad(&tree, p), ("", ""));
    }

    #[test]
    fn empty_nodes_are_never_padded() {
        let mut tree = Tree::new();
        tree.append_text(Tree::ROOT, "before ");
        let br = tree.append_element(Tree::ROOT, "br", NO_ATTRS);
        assert_eq!(pad(&tree, br), ("", ""));
    }

    #[test]
    fn own_edge_whitespace_pads() {
        let mut tree = Tree::new();
        let em = tree.append_element(Tree::ROOT, "em", NO_ATTRS);
        tree.append_text(em, " word ");
        assert_eq!(pad(&tree, em), (" ", " "));
    }

    #[test]
    fn neighbouring_text_whitespace_pads() {
        let mut tree = Tree::new();
        tree.append_text(Tree::ROOT, "say ");
        let em = tree.append_element(Tree::ROOT, "em", NO_ATTRS);
        tree.append_text(em, "word");
        tree.append_text(Tree::ROOT, " again");
        assert_eq!(pad(&tree, em), (" ", " "));
    }

    #[test]
    fn single_whitespace_sibling_is_not_shared() {
        let mut tree = Tree::new();
        let strong = tree.append_element(Tree::ROOT, "strong", NO_ATTRS);
        tree.append_text(strong, "a");
        tree.append_text(Tree::ROOT, " ");
        let em = tree.append_element(Tree::ROOT, "em", NO_ATTRS);
        tree.append_text(em, "b");
        assert_eq!(pad(&tree, strong), ("", ""));
        assert_eq!(pad(&tree, em), ("", ""));
    }

    #[test]
    fn comments_are_skipped_when_looking_for_siblings() {
        let mut tree = Tree::new();
        tree.append_text(Tree::ROOT, "say ");
        tree.append_comment(Tree::ROOT, "c");
        let em = tree.append_element(Tree::ROOT, "em", NO_ATTRS);
        tree.append_text(em, "word");
        assert_eq!(pad(&tree, em), (" ", ""));
    }

    #[test]
    fn block_siblings_do_not_pad() {
        let mut tree = Tree::new();
        let div = tree.append_element(Tree::ROOT, "div", NO_ATTRS);
        tree.append_text(div, "block ");
        let em = tree.append_element(Tree::ROOT, "em", NO_ATTRS);
        tree.append_text(em, "word");
        assert_eq!(pad(&tree, em), ("", ""));
    }

    #[test]
    fn text_nodes_pad_from_their_own_edges() {
        let mut tree = Tree::new();
        let text = tree.append_text(Tree::ROOT, " and ");
        assert_eq!(pad(&tree, text), (" ", " "));
    }
}
