//! Emphasis rendering.
//!
//! `annotate` turns text into a stream of [`Segment`]s that records which
//! words are emphasized and where each one is cut. A [`Renderer`] then turns
//! those segments into a concrete surface: [`MarkupRenderer`] produces the
//! markdown/inline-HTML form returned by [`emphasize`]; the terminal backend
//! lives in `output::ansi`.

use crate::emphasis::gradient::gradient_position;
use crate::emphasis::qualify::qualifies;
use crate::emphasis::split::split_word;
use crate::emphasis::tokenizer::tokenize;
use crate::emphasis::{EmphasisParams, Mode, Rgb};

/// Narrow separator used by [`Mode::MicroSpace`].
pub const THIN_SPACE: char = '\u{2009}';

/// How an emphasized word is styled, resolved from the [`Mode`] at annotation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordStyle {
    Bold,
    Spaced,
    Colored(Rgb),
}

/// A qualifying word with its emphasis cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Emphasis<'a> {
    pub word: &'a str,
    /// Byte offset of the cut; always on a grapheme boundary.
    pub split: usize,
    pub style: WordStyle,
}

impl<'a> Emphasis<'a> {
    pub fn head(&self) -> &'a str {
        &self.word[..self.split]
    }

    pub fn tail(&self) -> &'a str {
        &self.word[self.split..]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Separators and non-qualifying words, emitted verbatim.
    Plain(&'a str),
    Word(Emphasis<'a>),
}

impl<'a> Segment<'a> {
    /// The input text this segment covers, without any emphasis.
    pub fn source(&self) -> &'a str {
        match self {
            Segment::Plain(text) => text,
            Segment::Word(emphasis) => emphasis.word,
        }
    }
}

/// Marks every qualifying word of `text` according to `params`.
///
/// Gradient colors depend on each word's ordinal among all qualifying
/// words, so the whole text is classified before anything is styled.
pub fn annotate<'a>(text: &'a str, params: &EmphasisParams) -> Vec<Segment<'a>> {
    let classified: Vec<_> = tokenize(text)
        .into_iter()
        .map(|token| (token, qualifies(&token, params.qualify, params.min_length)))
        .collect();
    let total = classified.iter().filter(|(_, q)| *q).count();

    let mut index = 0;
    classified
        .into_iter()
        .map(|(token, qualifying)| {
            if !qualifying {
                return Segment::Plain(token.text);
            }

            let style = match params.mode {
                Mode::BoldPrefix => WordStyle::Bold,
                Mode::MicroSpace => WordStyle::Spaced,
                Mode::Gradient => {
                    let t = gradient_position(index, total);
                    WordStyle::Colored(params.gradient_start.lerp(params.gradient_end, t))
                }
            };
            index += 1;

            let (head, _) = split_word(token.text, params.ratio);
            Segment::Word(Emphasis {
                word: token.text,
                split: head.len(),
                style,
            })
        })
        .collect()
}

/// Output backend for annotated text.
pub trait Renderer {
    /// Append an emphasized word to `out`.
    fn write_word(&self, out: &mut String, word: &Emphasis<'_>);

    /// Append verbatim text to `out`.
    fn write_plain(&self, out: &mut String, text: &str) {
        out.push_str(text);
    }

    fn render(&self, segments: &[Segment<'_>]) -> String {
        let capacity = segments.iter().map(|s| s.source().len()).sum::<usize>() * 2;
        let mut out = String::with_capacity(capacity);
        for segment in segments {
            match segment {
                Segment::Plain(text) => self.write_plain(&mut out, text),
                Segment::Word(word) => self.write_word(&mut out, word),
            }
        }
        out
    }
}

/// Markdown bold, thin-space, or inline `<span>` markup.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkupRenderer;

impl Renderer for MarkupRenderer {
    fn write_word(&self, out: &mut String, word: &Emphasis<'_>) {
        let (head, tail) = (word.head(), word.tail());
        match word.style {
            WordStyle::Bold => {
                out.push_str("**");
                out.push_str(head);
                out.push_str("**");
                out.push_str(tail);
            }
            WordStyle::Spaced => {
                out.push_str(head);
                out.push(THIN_SPACE);
                out.push_str(tail);
            }
            WordStyle::Colored(color) => {
                out.push_str(&format!(
                    "<span style='color:{color}'><b>{head}</b>{tail}</span>"
                ));
            }
        }
    }
}

/// Emphasizes `text` and returns it as markup for a markdown/HTML-capable display.
///
/// Never fails: empty input gives empty output and out-of-range parameters
/// are clamped during the split.
pub fn emphasize(text: &str, params: &EmphasisParams) -> String {
    MarkupRenderer.render(&annotate(text, params))
}
