use crate::emphasis::Token;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Maximal runs of non-word characters. Unicode-aware; `_` and digits are word characters.
    static ref SEPARATOR_RUN: Regex = Regex::new(r"\W+").expect("separator pattern is valid");
}

/// Splits text into alternating word and separator tokens.
///
/// Every character of `text` lands in exactly one token, in order, and no
/// token is empty. Empty input gives an empty vector; input without any word
/// characters gives a single separator token.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut cursor = 0;

    for separator in SEPARATOR_RUN.find_iter(text) {
        if separator.start() > cursor {
            tokens.push(Token::word(&text[cursor..separator.start()]));
        }
        tokens.push(Token::separator(separator.as_str()));
        cursor = separator.end();
    }

    if cursor < text.len() {
        tokens.push(Token::word(&text[cursor..]));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emphasis::TokenKind;

    fn texts<'a>(tokens: &[Token<'a>]) -> Vec<&'a str> {
        tokens.iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_tokenize_words_and_punctuation() {
        let tokens = tokenize("Hello, world!");
        assert_eq!(texts(&tokens), vec!["Hello", ", ", "world", "!"]);
        assert_eq!(tokens[0].kind, TokenKind::Word);
        assert_eq!(tokens[1].kind, TokenKind::Separator);
        assert_eq!(tokens[3].kind, TokenKind::Separator);
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_tokenize_only_separators() {
        let tokens = tokenize(" ,.;\n\t!? ");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0], Token::separator(" ,.;\n\t!? "));
    }

    #[test]
    fn test_tokenize_leading_and_trailing_separators() {
        let tokens = tokenize("  (quoted)  ");
        assert_eq!(texts(&tokens), vec!["  (", "quoted", ")  "]);
    }

    /// Test that an apostrophe is a separator, so contractions become two words.
    #[test]
    fn test_tokenize_apostrophe_splits_word() {
        assert_eq!(texts(&tokenize("Don't")), vec!["Don", "'", "t"]);
    }

    #[test]
    fn test_tokenize_keeps_digits_and_underscores_in_words() {
        assert_eq!(
            texts(&tokenize("route_66 is 2lane")),
            vec!["route_66", " ", "is", " ", "2lane"]
        );
    }

    #[test]
    fn test_tokenize_unicode_letters_are_words() {
        assert_eq!(
            texts(&tokenize("naïve café — Straße")),
            vec!["naïve", " ", "café", " — ", "Straße"]
        );
    }

    #[test]
    fn test_tokenize_round_trips_input() {
        let inputs = [
            "",
            "plain",
            "Line one.\nLine two!\r\n\tIndented…",
            "«Ça va?» — 日本語のテキスト, 123.45%",
            "**already** marked_up <b>text</b>",
        ];
        for input in inputs {
            let joined: String = tokenize(input).iter().map(|t| t.text).collect();
            assert_eq!(joined, input);
        }
    }

    /// Test that word and separator tokens never appear twice in a row.
    #[test]
    fn test_tokenize_alternates_kinds() {
        let tokens = tokenize("a, b; c. d");
        for pair in tokens.windows(2) {
            assert_ne!(pair[0].kind, pair[1].kind);
        }
    }
}
