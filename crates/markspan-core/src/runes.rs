//! Code point indexing.
//!
//! Entity offsets count Unicode scalar values, not bytes and not UTF-16
//! units, so Cyrillic, CJK and surrogate-pair emoji never shear a slice.

/// Decomposes text into the sequence all entity offsets index.
pub fn codepoints(text: &str) -> Vec<char> {
    text.chars().collect()
}

/// A slice of `runes` with both bounds clamped into `[0, len]`.
/// An inverted range collapses to empty.
pub(crate) fn window(runes: &[char], from: usize, to: usize) -> &[char] {
    let from = from.min(runes.len());
    let to = to.clamp(from, runes.len());
    &runes[from..to]
}

pub(crate) fn text_of(runes: &[char]) -> String {
    runes.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::{codepoints, text_of, window};

    #[test]
    fn emoji_and_cyrillic_count_as_single_units() {
        let runes = codepoints("hop😂 ы");
        assert_eq!(runes.len(), 6);
        assert_eq!(text_of(window(&runes, 3, 4)), "😂");
    }

    #[test]
    fn out_of_range_bounds_clamp() {
        let runes = codepoints("abc");
        assert_eq!(text_of(window(&runes, 1, 99)), "bc");
        assert_eq!(text_of(window(&runes, 99, 100)), "");
    }

    #[test]
    fn inverted_range_is_empty() {
        let runes = codepoints("abc");
        assert!(window(&runes, 2, 1).is_empty());
    }
}
