/// Whether a token is a run of word characters or of separators between words.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    Word,
    /// Whitespace, punctuation and symbols, kept verbatim in the output.
    Separator,
}

/// A contiguous slice of the input text.
///
/// Tokens borrow from the text they were produced from, so concatenating
/// `text` of every token in order gives back the input exactly.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

impl<'a> Token<'a> {
    pub fn word(text: &'a str) -> Self {
        Self {
            text,
            kind: TokenKind::Word,
        }
    }

    pub fn separator(text: &'a str) -> Self {
        Self {
            text,
            kind: TokenKind::Separator,
        }
    }

    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}
