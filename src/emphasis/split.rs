use unicode_segmentation::UnicodeSegmentation;

/// Emphasized-prefix length calculation.
///
/// A word of `len` characters is split after `floor(len × ratio)` characters,
/// but always after at least one and never past the end:
/// - ratio 0.5, "Hello" (5) → 2
/// - ratio 0.5, "ccc" (3) → 1
/// - ratio 0.0 or NaN → 1
/// - ratio above 1.0 → `len`
///
/// Returns 0 only for an empty word.
pub fn split_point(len: usize, ratio: f64) -> usize {
    if len == 0 {
        return 0;
    }

    let raw = (len as f64 * ratio).floor();
    // NaN fails the comparison; `as` saturates +inf to usize::MAX
    let n = if raw > 0.0 { raw as usize } else { 0 };
    n.clamp(1, len)
}

/// Splits `word` into its emphasized head and the remaining tail.
///
/// Lengths are counted in grapheme clusters so the cut never separates a
/// letter from its combining marks.
pub fn split_word(word: &str, ratio: f64) -> (&str, &str) {
    let len = word.graphemes(true).count();
    let n = split_point(len, ratio);
    let offset = word
        .grapheme_indices(true)
        .nth(n)
        .map_or(word.len(), |(offset, _)| offset);
    word.split_at(offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_point_half() {
        assert_eq!(split_point(5, 0.5), 2);
        assert_eq!(split_point(4, 0.5), 2);
        assert_eq!(split_point(3, 0.5), 1);
    }

    #[test]
    fn test_split_point_single_char_word() {
        assert_eq!(split_point(1, 0.5), 1);
        assert_eq!(split_point(1, 0.1), 1);
    }

    #[test]
    fn test_split_point_empty_word() {
        assert_eq!(split_point(0, 0.5), 0);
    }

    /// Test that at least one character is emphasized however small the ratio.
    #[test]
    fn test_split_point_clamps_low_ratio() {
        assert_eq!(split_point(8, 0.0), 1);
        assert_eq!(split_point(8, -2.0), 1);
        assert_eq!(split_point(8, f64::NAN), 1);
        assert_eq!(split_point(8, f64::NEG_INFINITY), 1);
    }

    #[test]
    fn test_split_point_clamps_high_ratio() {
        assert_eq!(split_point(8, 1.0), 8);
        assert_eq!(split_point(8, 3.5), 8);
        assert_eq!(split_point(8, f64::INFINITY), 8);
    }

    #[test]
    fn test_split_point_bounds_hold_for_all_lengths() {
        for len in 1..=40 {
            for step in 0..=20 {
                let ratio = step as f64 / 20.0;
                let n = split_point(len, ratio);
                assert!((1..=len).contains(&n), "len={len} ratio={ratio} n={n}");
            }
        }
    }

    #[test]
    fn test_split_word_ascii() {
        assert_eq!(split_word("Hello", 0.5), ("He", "llo"));
        assert_eq!(split_word("ccc", 0.5), ("c", "cc"));
        assert_eq!(split_word("reading", 1.0), ("reading", ""));
    }

    #[test]
    fn test_split_word_multibyte() {
        assert_eq!(split_word("Straße", 0.5), ("Str", "aße"));
        assert_eq!(split_word("日本語テキスト", 0.3), ("日本", "語テキスト"));
    }

    /// Test that the split never separates a combining mark from its base letter.
    #[test]
    fn test_split_word_keeps_combining_mark_with_base() {
        // "e" + U+0301 must stay together
        assert_eq!(split_word("e\u{301}te\u{301}", 0.5), ("e\u{301}", "te\u{301}"));
    }
}
