mod convert;
mod emit;
mod entity;
mod node;
mod runes;
mod timefmt;

pub use convert::{ConvertOptions, convert, convert_with};
pub use emit::{emit_html, emit_html_sanitized};
pub use entity::{MarkupEntity, MarkupKind};
pub use node::{Attr, Node, NodeContent, Tag};
pub use runes::codepoints;
pub use timefmt::{LongDateTime, TimeFormatter, parse_timestamp};
