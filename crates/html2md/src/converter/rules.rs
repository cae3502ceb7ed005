//! Substitution rules: one function per Markdown construct.
//!
//! Every rule receives the node's normalized content (its children's already-converted
//! fragments) and the node itself, and returns the node's Markdown fragment. Rules never
//! fail; a rule with nothing to emit returns an empty string.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::dom::{NodeId, Tree};
use crate::tags::{Rule, Tag};
use crate::text::BLANK_LINES;

static LINE_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^").expect("valid regex"));

const CODE_INDENT: &str = "    ";

/// Apply `rule` to node `id` whose converted content is `content`.
#[must_use]
pub fn apply(rule: Rule, content: &str, tree: &Tree, id: NodeId) -> String {
    match rule {
        Rule::LineBreak => line_break(),
        Rule::Heading(level) => heading(content, level),
        Rule::HorizontalRule => horizontal_rule(),
        Rule::Emphasis => emphasis(content),
        Rule::Strong => strong(content),
        Rule::Code => code(content, tree, id),
        Rule::Link => link(content, tree, id),
        Rule::Image => image(tree, id),
        Rule::Blockquote => blockquote(content),
        Rule::ListItem => list_item(content, tree, id),
        Rule::List => list(tree, id),
        Rule::Block => block(content),
        Rule::Passthrough => passthrough(content, tree, id),
        Rule::Text => tree.node(id).data.clone(),
    }
}

fn line_break() -> String {
    "  \n".to_string()
}

fn heading(content: &str, level: u8) -> String {
    format!("\n\n{} {content}\n\n", "#".repeat(usize::from(level)))
}

fn horizontal_rule() -> String {
    "\n\n* * *\n\n".to_string()
}

fn emphasis(content: &str) -> String {
    format!("_{content}_")
}

fn strong(content: &str) -> String {
    format!("**{content}**")
}

/// `<pre><code>` becomes an indented code block built from the code's raw text; a
/// standalone `<code>` becomes a code span. Anything else passes through.
fn code(content: &str, tree: &Tree, id: NodeId) -> String {
    let tag = tree.tag_of(id);

    if tag == Some(Tag::Pre) {
        if let Some(code) = tree.first_child(id).filter(|&child| tree.tag_of(child) == Some(Tag::Code)) {
            if let Some(text) = tree.first_child(code) {
                let body = tree.node(text).data.replace('\n', "\n    ");
                return format!("\n\n{CODE_INDENT}{body}\n\n");
            }
        }
    }

    if tag == Some(Tag::Code) {
        let node = tree.node(id);
        let alone = node.prev_sibling.is_none() && node.next_sibling.is_none();
        let in_code_block = alone && node.parent.and_then(|parent| tree.tag_of(parent)) == Some(Tag::Pre);

        if !in_code_block && !content.is_empty() {
            return format!("`{content}`");
        }
    }

    content.to_string()
}

fn link(content: &str, tree: &Tree, id: NodeId) -> String {
    match tree.attribute(id, "href").filter(|href| !href.is_empty()) {
        Some(href) => format!("[{content}]({href}{})", title_suffix(tree, id)),
        None => String::new(),
    }
}

fn image(tree: &Tree, id: NodeId) -> String {
    match tree.attribute(id, "src").filter(|src| !src.is_empty()) {
        Some(src) => {
            let alt = tree.attribute(id, "alt").unwrap_or_default();
            format!("![{alt}]({src}{})", title_suffix(tree, id))
        }
        None => String::new(),
    }
}

fn title_suffix(tree: &Tree, id: NodeId) -> String {
    tree.attribute(id, "title").map(|title| format!(" {title}")).unwrap_or_default()
}

fn blockquote(content: &str) -> String {
    let data = BLANK_LINES.replace_all(content.trim(), "\n\n");
    let quoted = LINE_START.replace_all(&data, "> ");
    format!("\n\n{quoted}\n\n")
}

fn list_item(content: &str, tree: &Tree, id: NodeId) -> String {
    let data = content.trim_start().replace('\n', "\n    ");

    let prefix = match tree.node(id).parent {
        Some(parent) if tree.tag_of(parent) == Some(Tag::Ol) => {
            let position = tree
                .node(parent)
                .children
                .iter()
                .filter(|&&child| tree.tag_of(child) == Some(Tag::Li))
                .position(|&child| child == id)
                .map_or(0, |index| index + 1);
            format!("{position}.   ")
        }
        _ => "*   ".to_string(),
    };

    prefix + &data
}

fn list(tree: &Tree, id: NodeId) -> String {
    let node = tree.node(id);
    let items: Vec<&str> = node
        .children
        .iter()
        .filter(|&&child| tree.tag_of(child) == Some(Tag::Li))
        .map(|&child| tree.node(child).data.as_str())
        .collect();
    let joined = items.join("\n");

    if node.parent.and_then(|parent| tree.tag_of(parent)) == Some(Tag::Li) {
        format!("\n{joined}")
    } else {
        format!("\n\n{joined}\n\n")
    }
}

fn block(content: &str) -> String {
    if content.is_empty() {
        return String::new();
    }
    format!("\n\n{content}\n\n")
}

/// Re-emit an unknown element literally. `data` still holds the tag name because a
/// node's own slot is only overwritten after its rule returns.
fn passthrough(content: &str, tree: &Tree, id: NodeId) -> String {
    let name = &tree.node(id).data;
    format!("<{name}>{content}</{name}>")
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_ATTRS: &[(&str, &str)] = &[];

    fn single(name: &str, attributes: &[(&str, &str)]) -> (Tree, NodeId) {
        let mut tree = Tree::new();
        let id = tree.append_element(Tree::ROOT, name, attributes);
        (tree, id)
    }

    #[test]
    fn line_break_is_hard_break() {
        let (tree, br) = single("br", NO_ATTRS);
        assert_eq!(apply(Rule::LineBreak, "", &tree, br), "  \n");
    }

    #[test]
    fn heading_levels() {
        let (tree, h) = single("h3", NO_ATTRS);
        assert_eq!(apply(Rule::Heading(1), "Top", &tree, h), "\n\n# Top\n\n");
        assert_eq!(apply(Rule::Heading(3), "Mid", &tree, h), "\n\n### Mid\n\n");
        assert_eq!(apply(Rule::Heading(6), "Low", &tree, h), "\n\n###### Low\n\n");
    }

    #[test]
    fn horizontal_rule_is_framed() {
        let (tree, hr) = single("hr", NO_ATTRS);
        assert_eq!(apply(Rule::HorizontalRule, "", &tree, hr), "\n\n* * *\n\n");
    }

    #[test]
    fn emphasis_and_strong_wrap_content() {
        let (tree, id) = single("em", NO_ATTRS);
        assert_eq!(apply(Rule::Emphasis, "it", &tree, id), "_it_");
        assert_eq!(apply(Rule::Strong, "bold", &tree, id), "**bold**");
    }

    #[test]
    fn pre_with_code_child_becomes_indented_block() {
        let mut tree = Tree::new();
        let pre = tree.append_element(Tree::ROOT, "pre", NO_ATTRS);
        let code = tree.append_element(pre, "code", NO_ATTRS);
        tree.append_text(code, "let x = 1;\nlet y = 2;");

        assert_eq!(
            apply(Rule::Code, "ignored", &tree, pre),
            "\n\n    let x = 1;\n    let y = 2;\n\n"
        );
        assert_eq!(apply(Rule::Code, "let x = 1; let y = 2;", &tree, code), "let x = 1; let y = 2;");
    }

    #[test]
    fn pre_without_code_child_passes_through() {
        let mut tree = Tree::new();
        let pre = tree.append_element(Tree::ROOT, "pre", NO_ATTRS);
        tree.append_text(pre, "plain");
        assert_eq!(apply(Rule::Code, "plain", &tree, pre), "plain");
    }

    #[test]
    fn inline_code_becomes_span() {
        let mut tree = Tree::new();
        let p = tree.append_element(Tree::ROOT, "p", NO_ATTRS);
        tree.append_text(p, "run ");
        let code = tree.append_element(p, "code", NO_ATTRS);
        tree.append_text(code, "ls");
        assert_eq!(apply(Rule::Code, "ls", &tree, code), "`ls`");
        assert_eq!(apply(Rule::Code, "", &tree, code), "");
    }

    #[test]
    fn code_with_siblings_inside_pre_is_a_span() {
        let mut tree = Tree::new();
        let pre = tree.append_element(Tree::ROOT, "pre", NO_ATTRS);
        tree.append_text(pre, "$ ");
        let code = tree.append_element(pre, "code", NO_ATTRS);
        assert_eq!(apply(Rule::Code, "cmd", &tree, code), "`cmd`");
    }

    #[test]
    fn link_with_and_without_title() {
        let (tree, a) = single("a", &[("href", "http://x.com"), ("title", "T")]);
        assert_eq!(apply(Rule::Link, "link", &tree, a), "[link](http://x.com T)");

        let (tree, a) = single("a", &[("href", "/docs")]);
        assert_eq!(apply(Rule::Link, "docs", &tree, a), "[docs](/docs)");
    }

    #[test]
    fn link_without_href_is_empty() {
        let (tree, a) = single("a", &[("name", "anchor")]);
        assert_eq!(apply(Rule::Link, "anchor", &tree, a), "");

        let (tree, a) = single("a", &[("href", "")]);
        assert_eq!(apply(Rule::Link, "empty", &tree, a), "");
    }

    #[test]
    fn image_uses_alt_src_and_title() {
        let (tree, img) = single("img", &[("src", "cat.png"), ("alt", "A cat"), ("title", "Meow")]);
        assert_eq!(apply(Rule::Image, "", &tree, img), "![A cat](cat.png Meow)");

        let (tree, img) = single("img", &[("src", "cat.png")]);
        assert_eq!(apply(Rule::Image, "", &tree, img), "![](cat.png)");

        let (tree, img) = single("img", &[("alt", "no source")]);
        assert_eq!(apply(Rule::Image, "", &tree, img), "");
    }

    #[test]
    fn blockquote_prefixes_every_line() {
        let (tree, q) = single("blockquote", NO_ATTRS);
        assert_eq!(
            apply(Rule::Blockquote, "\n\none\n\n\n\ntwo\n\n", &tree, q),
            "\n\n> one\n> \n> two\n\n"
        );
    }

    #[test]
    fn unordered_list_item_prefix_and_indent() {
        let mut tree = Tree::new();
        let ul = tree.append_element(Tree::ROOT, "ul", NO_ATTRS);
        let li = tree.append_element(ul, "li", NO_ATTRS);
        assert_eq!(apply(Rule::ListItem, "  first\nsecond", &tree, li), "*   first\n    second");
    }

    #[test]
    fn ordered_list_items_count_only_li_siblings() {
        let mut tree = Tree::new();
        let ol = tree.append_element(Tree::ROOT, "ol", NO_ATTRS);
        tree.append_text(ol, "\n");
        tree.append_element(ol, "li", NO_ATTRS);
        tree.append_comment(ol, "skip");
        let second = tree.append_element(ol, "li", NO_ATTRS);
        assert_eq!(apply(Rule::ListItem, "y", &tree, second), "2.   y");
    }

    #[test]
    fn list_joins_converted_items() {
        let mut tree = Tree::new();
        let ul = tree.append_element(Tree::ROOT, "ul", NO_ATTRS);
        let a = tree.append_element(ul, "li", NO_ATTRS);
        tree.append_text(ul, "\n");
        let b = tree.append_element(ul, "li", NO_ATTRS);
        tree.node_mut(a).data = "*   a".to_string();
        tree.node_mut(b).data = "*   b".to_string();
        assert_eq!(apply(Rule::List, "", &tree, ul), "\n\n*   a\n*   b\n\n");
    }

    #[test]
    fn nested_list_stays_inside_parent_item() {
        let mut tree = Tree::new();
        let outer = tree.append_element(Tree::ROOT, "ul", NO_ATTRS);
        let item = tree.append_element(outer, "li", NO_ATTRS);
        let inner = tree.append_element(item, "ul", NO_ATTRS);
        let leaf = tree.append_element(inner, "li", NO_ATTRS);
        tree.node_mut(leaf).data = "*   nested".to_string();
        assert_eq!(apply(Rule::List, "", &tree, inner), "\n*   nested");
    }

    #[test]
    fn block_wraps_non_empty_content() {
        let (tree, div) = single("div", NO_ATTRS);
        assert_eq!(apply(Rule::Block, "text", &tree, div), "\n\ntext\n\n");
        assert_eq!(apply(Rule::Block, "", &tree, div), "");
    }

    #[test]
    fn passthrough_rewraps_unknown_tag() {
        let (tree, foo) = single("foo", &[("class", "dropped")]);
        assert_eq!(apply(Rule::Passthrough, "bar", &tree, foo), "<foo>bar</foo>");
    }

    #[test]
    fn text_rule_keeps_raw_text() {
        let mut tree = Tree::new();
        let text = tree.append_text(Tree::ROOT, "  raw\ttext ");
        assert_eq!(apply(Rule::Text, "raw text", &tree, text), "  raw\ttext ");
    }
}
