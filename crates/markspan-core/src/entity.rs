/// Formatting kinds produced by the upstream markup detector.
///
/// Anything the detector emits outside this set is mapped to [`Unsafe`]
/// at the deserialization boundary and renders as a generic inline
/// container.
///
/// [`Unsafe`]: MarkupKind::Unsafe
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum MarkupKind {
    Bold,
    Italic,
    Underscore,
    Strike,
    Code,
    CodeBlock,
    Quote,
    Link,
    Time,
    Unsafe,
}

/// A single markup span: a formatting kind plus the offsets bounding its
/// opening marker, content, and closing marker.
///
/// All offsets count Unicode code points, and child offsets are relative
/// to the parent's content window (`[open + open_len, close)` re-based to
/// zero), never to the root text.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkupEntity {
    pub kind: MarkupKind,
    /// Offset of the opening marker within the current window.
    pub open: usize,
    /// Opening marker length; the marker itself is never rendered.
    pub open_len: usize,
    /// End of the content / start of the closing marker.
    pub close: usize,
    /// Closing marker length.
    pub close_len: usize,
    /// Link target, for `Link` entities.
    pub url: Option<String>,
    /// Literal display-text override, e.g. a shortened URL.
    pub replacement: Option<String>,
    /// Verbatim ISO-8601 timestamp, for `Time` entities.
    pub time: Option<String>,
    /// Nested spans, window-relative.
    pub children: Vec<MarkupEntity>,
}

impl MarkupEntity {
    /// An entity with zero-length markers and no attributes, the shape of
    /// synthetic single-character spans like a bare `<`.
    pub fn new(kind: MarkupKind, open: usize, close: usize) -> Self {
        Self {
            kind,
            open,
            open_len: 0,
            close,
            close_len: 0,
            url: None,
            replacement: None,
            time: None,
            children: Vec::new(),
        }
    }
}
