use crate::emphasis::Token;
use unicode_segmentation::UnicodeSegmentation;

/// Character class a word must belong to entirely before it is emphasized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Qualify {
    /// Letters only; any digit or underscore disqualifies the word.
    #[default]
    Alpha,
    /// Letters and digits.
    Alnum,
}

impl Qualify {
    /// Maps the "letters only" / "include numbers" switch pair onto a rule.
    ///
    /// Numbers are only ever considered when letters-only is switched off.
    pub fn from_flags(alpha_only: bool, include_numbers: bool) -> Self {
        if !alpha_only && include_numbers {
            Qualify::Alnum
        } else {
            Qualify::Alpha
        }
    }

    fn accepts(self, c: char) -> bool {
        match self {
            Qualify::Alpha => c.is_alphabetic(),
            Qualify::Alnum => c.is_alphanumeric(),
        }
    }
}

/// Length of a word in user-perceived characters (extended grapheme clusters).
pub fn word_length(word: &str) -> usize {
    word.graphemes(true).count()
}

/// True when `token` is a word of the accepted class that is at least `min_length` long.
///
/// Each grapheme cluster is judged by its base character, so combining
/// marks never disqualify an otherwise alphabetic word.
pub fn qualifies(token: &Token<'_>, rule: Qualify, min_length: usize) -> bool {
    if !token.is_word() || token.text.is_empty() {
        return false;
    }

    let mut length = 0;
    for grapheme in token.text.graphemes(true) {
        match grapheme.chars().next() {
            Some(base) if rule.accepts(base) => length += 1,
            _ => return false,
        }
    }

    length >= min_length
}
