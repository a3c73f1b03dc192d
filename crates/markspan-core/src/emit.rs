use crate::node::{Node, NodeContent};
use ammonia::Builder;
use std::collections::{HashMap, HashSet};

/// Serializes a node tree to HTML.
///
/// Literal text and attribute values are escaped here, exactly once;
/// nothing upstream pre-escapes.
pub fn emit_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

/// Serializes a node tree and cleans the result against an allow-list of
/// exactly the structural tags this crate emits.
pub fn emit_html_sanitized(node: &Node) -> String {
    let raw = emit_html(node);

    let tags: HashSet<&'static str> = [
        "a",
        "b",
        "blockquote",
        "code",
        "div",
        "i",
        "pre",
        "s",
        "span",
        "time",
        "u",
    ]
    .iter()
    .copied()
    .collect();

    let mut tag_attributes = HashMap::new();
    tag_attributes.insert("a", ["href"].iter().copied().collect());
    tag_attributes.insert("time", ["datetime"].iter().copied().collect());

    Builder::new()
        .tags(tags)
        .tag_attributes(tag_attributes)
        .link_rel(None)
        .clean(&raw)
        .to_string()
}

fn write_node(out: &mut String, node: &Node) {
    let tag = node.tag.as_str();
    out.push('<');
    out.push_str(tag);
    for attr in &node.attrs {
        out.push(' ');
        out.push_str(attr.name);
        out.push_str("=\"");
        out.push_str(&escape_attr(&attr.value));
        out.push('"');
    }
    out.push('>');
    match &node.content {
        NodeContent::Text(text) => out.push_str(&escape_html(text)),
        NodeContent::Children(children) => {
            for child in children {
                write_node(out, child);
            }
        }
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn escape_html(text: &str) -> String {
    let mut out = String::new();
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn escape_attr(text: &str) -> String {
    let mut out = String::new();
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
