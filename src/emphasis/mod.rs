pub mod gradient;
pub mod params;
pub mod qualify;
pub mod render;
pub mod split;
pub mod token;
pub mod tokenizer;

pub use gradient::{ColorParseError, Rgb};
pub use params::{EmphasisParams, Mode};
pub use qualify::{qualifies, word_length, Qualify};
pub use render::{annotate, emphasize, Emphasis, MarkupRenderer, Renderer, Segment, WordStyle};
pub use split::{split_point, split_word};
pub use token::{Token, TokenKind};
pub use tokenizer::tokenize;
