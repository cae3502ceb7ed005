//! Arena-backed document tree.
//!
//! The HTML parser hands back an `Rc`-linked DOM; the converter instead works on a flat
//! arena where every node is addressed by index. Children lists are the only ownership
//! edges; `parent`, `prev_sibling`, and `next_sibling` are plain indices used for
//! navigation. Each node carries a mutable `data` slot that the engine overwrites with
//! the node's Markdown fragment.

use std::io::Read;

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::error::{ConversionError, Result};
use crate::tags::Tag;

/// Index of a node in a [`Tree`].
pub type NodeId = usize;

/// What kind of HTML construct a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// The document root.
    Document,
    /// An element such as `<p>`.
    Element,
    /// A run of character data.
    Text,
    /// An HTML comment.
    Comment,
    /// A `<!DOCTYPE>` declaration.
    Doctype,
}

/// One node of the document tree.
#[derive(Debug, Clone)]
pub struct Node {
    /// Node kind.
    pub kind: NodeKind,
    /// Tag identity for elements, `None` for every other kind.
    pub tag: Option<Tag>,
    /// Attributes in source order.
    pub attributes: Vec<(String, String)>,
    /// Tag name for elements, raw text for text nodes; the Markdown fragment once converted.
    pub data: String,
    /// Children in document order.
    pub children: Vec<NodeId>,
    /// Parent node.
    pub parent: Option<NodeId>,
    /// Previous sibling.
    pub prev_sibling: Option<NodeId>,
    /// Next sibling.
    pub next_sibling: Option<NodeId>,
}

/// A document tree stored as an arena of [`Node`]s.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// Id of the document root.
    pub const ROOT: NodeId = 0;

    /// Create a tree holding only an empty document node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                kind: NodeKind::Document,
                tag: None,
                attributes: Vec::new(),
                data: String::new(),
                children: Vec::new(),
                parent: None,
                prev_sibling: None,
                next_sibling: None,
            }],
        }
    }

    /// Parse a UTF-8 HTML byte stream into a tree.
    ///
    /// Invalid UTF-8 sequences are replaced rather than rejected. Failing to read from
    /// `reader` is reported as [`ConversionError::Parse`].
    pub fn parse<R: Read>(reader: &mut R) -> Result<Self> {
        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(reader)
            .map_err(ConversionError::Parse)?;

        let mut tree = Self::new();
        tree.lower(&dom.document);
        Ok(tree)
    }

    /// Copy the parsed DOM below `document` into the arena in document order.
    ///
    /// Walks with an explicit stack so nesting depth is bounded by memory, not by the
    /// call stack.
    fn lower(&mut self, document: &Handle) {
        let mut pending: Vec<(Handle, NodeId)> = document
            .children
            .borrow()
            .iter()
            .rev()
            .map(|child| (child.clone(), Self::ROOT))
            .collect();

        while let Some((handle, parent)) = pending.pop() {
            let id = match &handle.data {
                NodeData::Element { name, attrs, .. } => {
                    let attributes: Vec<(String, String)> = attrs
                        .borrow()
                        .iter()
                        .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                        .collect();
                    self.append_element(parent, &name.local, &attributes)
                }
                NodeData::Text { contents } => {
                    let text = contents.borrow().to_string();
                    self.append_text(parent, &text)
                }
                NodeData::Comment { contents } => self.append_comment(parent, contents),
                NodeData::Doctype { name, .. } => self.append_doctype(parent, name),
                NodeData::Document | NodeData::ProcessingInstruction { .. } => continue,
            };

            pending.extend(handle.children.borrow().iter().rev().map(|child| (child.clone(), id)));
        }
    }

    /// Append an element with the given name and attributes under `parent`.
    pub fn append_element<K, V>(&mut self, parent: NodeId, name: &str, attributes: &[(K, V)]) -> NodeId
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let attributes = attributes
            .iter()
            .map(|(key, value)| (key.as_ref().to_string(), value.as_ref().to_string()))
            .collect();
        self.append(parent, NodeKind::Element, Some(Tag::from_name(name)), attributes, name)
    }

    /// Append a text node under `parent`.
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.append(parent, NodeKind::Text, None, Vec::new(), text)
    }

    /// Append a comment node under `parent`.
    pub fn append_comment(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.append(parent, NodeKind::Comment, None, Vec::new(), text)
    }

    /// Append a doctype node under `parent`.
    pub fn append_doctype(&mut self, parent: NodeId, name: &str) -> NodeId {
        self.append(parent, NodeKind::Doctype, None, Vec::new(), name)
    }

    fn append(
        &mut self,
        parent: NodeId,
        kind: NodeKind,
        tag: Option<Tag>,
        attributes: Vec<(String, String)>,
        data: &str,
    ) -> NodeId {
        let id = self.nodes.len();
        let prev_sibling = self.nodes[parent].children.last().copied();
        if let Some(prev) = prev_sibling {
            self.nodes[prev].next_sibling = Some(id);
        }
        self.nodes.push(Node {
            kind,
            tag,
            attributes,
            data: data.to_string(),
            children: Vec::new(),
            parent: Some(parent),
            prev_sibling,
            next_sibling: None,
        });
        self.nodes[parent].children.push(id);
        id
    }

    /// Borrow a node.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Mutably borrow a node.
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id]
    }

    /// Number of nodes, including the document root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds nothing but the document root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Tag of a node, `None` for non-elements.
    #[must_use]
    pub fn tag_of(&self, id: NodeId) -> Option<Tag> {
        self.nodes[id].tag
    }

    /// First child of a node.
    #[must_use]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].children.first().copied()
    }

    /// Value of the first attribute named `key`.
    #[must_use]
    pub fn attribute(&self, id: NodeId, key: &str) -> Option<&str> {
        self.nodes[id]
            .attributes
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }
}
