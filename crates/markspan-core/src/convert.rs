use tracing::trace;

use crate::entity::{MarkupEntity, MarkupKind};
use crate::node::{Node, NodeContent, Tag};
use crate::runes;
use crate::timefmt::{LongDateTime, TimeFormatter, parse_timestamp};

static DEFAULT_TIME: LongDateTime = LongDateTime { zone: None };

/// Collaborators injected into a conversion.
pub struct ConvertOptions<'a> {
    /// Display rendering for time entities.
    pub time: &'a dyn TimeFormatter,
}

impl Default for ConvertOptions<'_> {
    fn default() -> Self {
        Self { time: &DEFAULT_TIME }
    }
}

/// Converts text and its markup entities into a node tree, wrapped in a
/// root container.
pub fn convert(text: &str, markup: &[MarkupEntity]) -> Node {
    convert_with(text, markup, &ConvertOptions::default())
}

pub fn convert_with(text: &str, markup: &[MarkupEntity], options: &ConvertOptions<'_>) -> Node {
    let runes = runes::codepoints(text);
    trace!(runes = runes.len(), entities = markup.len(), "converting markup");
    let mut children = Vec::new();
    convert_window(&runes, markup, &mut children, options);
    Node {
        tag: Tag::Root,
        attrs: Vec::new(),
        content: NodeContent::Children(children),
    }
}

/// Walks one sibling list against one window of text, appending gap runs
/// and entity nodes to `into`.
///
/// Offsets are taken as given: siblings are not reordered or validated,
/// every slice is clamped into the window, and the cursor lands on
/// `close + close_len` after each entity. Marker delimiters are skipped,
/// never rendered.
fn convert_window(
    window: &[char],
    markup: &[MarkupEntity],
    into: &mut Vec<Node>,
    options: &ConvertOptions<'_>,
) {
    if markup.is_empty() {
        // A window without markup is a single plain run, even when the
        // window is empty: an entity with zero-length content (a quote
        // holding only a line break) still produces an empty text node.
        into.push(Node::plain(runes::text_of(window)));
        return;
    }

    let mut cursor = 0;
    for entity in markup {
        let open = entity.open.min(window.len());
        if cursor < open {
            into.push(Node::plain(runes::text_of(&window[cursor..open])));
        }

        let mut node = wrapper(entity);
        // Content window: the coordinate origin for this entity's children.
        let content = runes::window(window, open + entity.open_len, entity.close);
        if entity.children.is_empty() {
            node.content = NodeContent::Text(leaf_content(entity, content, options));
        } else {
            trace!(kind = ?entity.kind, content = content.len(), "descending into nested markup");
            let mut nested = Vec::new();
            convert_window(content, &entity.children, &mut nested, options);
            node.content = NodeContent::Children(nested);
        }
        into.push(node);

        cursor = (entity.close + entity.close_len).min(window.len());
    }

    if cursor < window.len() {
        into.push(Node::plain(runes::text_of(&window[cursor..])));
    }
}

/// Maps an entity kind to its output node and structural attributes.
fn wrapper(entity: &MarkupEntity) -> Node {
    let tag = match entity.kind {
        MarkupKind::Bold => Tag::Bold,
        MarkupKind::Italic => Tag::Italic,
        MarkupKind::Underscore => Tag::Underscore,
        MarkupKind::Strike => Tag::Strike,
        MarkupKind::Code => Tag::Code,
        MarkupKind::CodeBlock => Tag::CodeBlock,
        MarkupKind::Quote => Tag::Quote,
        MarkupKind::Link => Tag::Link,
        MarkupKind::Time => Tag::Time,
        MarkupKind::Unsafe => Tag::Generic,
    };
    let mut node = Node::text(tag, String::new());
    match entity.kind {
        MarkupKind::Link => {
            if let Some(url) = &entity.url {
                node.set_attr("href", url.clone());
            }
        }
        MarkupKind::Time => {
            if let Some(time) = &entity.time {
                // Verbatim, regardless of how the display text renders.
                node.set_attr("datetime", time.clone());
            }
        }
        _ => {}
    }
    node
}

/// Resolves the display text of an entity with no children.
fn leaf_content(entity: &MarkupEntity, content: &[char], options: &ConvertOptions<'_>) -> String {
    if let Some(replacement) = &entity.replacement {
        return replacement.clone();
    }
    if let Some(raw) = &entity.time {
        return match parse_timestamp(raw) {
            Ok(instant) => options.time.format(instant),
            // Display is best effort; an unparseable timestamp falls back
            // to the raw string rather than aborting the conversion.
            Err(_) => raw.clone(),
        };
    }
    runes::text_of(content)
}
