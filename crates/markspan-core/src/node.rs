/// Output node kinds and the HTML tag each serializes to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Tag {
    /// The container wrapping a full conversion result.
    Root,
    /// A plain-text run between or around markup spans.
    Text,
    Bold,
    Italic,
    Underscore,
    Strike,
    Code,
    CodeBlock,
    Quote,
    Link,
    Time,
    /// Fallback inline container for unrecognized kinds and for raw
    /// characters that must be escaped rather than interpreted.
    Generic,
}

impl Tag {
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Root => "div",
            Tag::Text | Tag::Generic => "span",
            Tag::Bold => "b",
            Tag::Italic => "i",
            Tag::Underscore => "u",
            Tag::Strike => "s",
            Tag::Code => "code",
            Tag::CodeBlock => "pre",
            Tag::Quote => "blockquote",
            Tag::Link => "a",
            Tag::Time => "time",
        }
    }
}

/// One attribute; `attrs` on a node preserves insertion order.
#[derive(Clone, Debug, PartialEq)]
pub struct Attr {
    pub name: &'static str,
    pub value: String,
}

/// A node carries either literal text or child nodes, never both.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeContent {
    Text(String),
    Children(Vec<Node>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub tag: Tag,
    pub attrs: Vec<Attr>,
    pub content: NodeContent,
}

impl Node {
    pub fn text(tag: Tag, text: String) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            content: NodeContent::Text(text),
        }
    }

    /// A plain-text run.
    pub fn plain(text: String) -> Self {
        Self::text(Tag::Text, text)
    }

    pub fn set_attr(&mut self, name: &'static str, value: impl Into<String>) {
        self.attrs.push(Attr {
            name,
            value: value.into(),
        });
    }
}
