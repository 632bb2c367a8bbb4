use crate::emphasis::{Qualify, Rgb};
use clap::ValueEnum;
use serde::Deserialize;

/// How the emphasized head of a word is marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
pub enum Mode {
    /// `**He**llo`
    #[default]
    #[serde(rename = "bold", alias = "bold-first")]
    #[value(name = "bold", alias = "bold-first")]
    BoldPrefix,

    /// Head and tail separated by a thin space (U+2009), no markup.
    #[serde(rename = "micro-space")]
    #[value(name = "micro-space")]
    MicroSpace,

    /// Bold head, whole word colored along a start-to-end gradient.
    #[serde(rename = "gradient")]
    #[value(name = "gradient")]
    Gradient,
}

/// Inputs to a single emphasis pass. Nothing here outlives the call.
#[derive(Debug, Clone, PartialEq)]
pub struct EmphasisParams {
    /// Fraction of each qualifying word to emphasize (nominally in (0, 1]).
    pub ratio: f64,
    /// Words shorter than this are left alone.
    pub min_length: usize,
    pub qualify: Qualify,
    pub mode: Mode,
    pub gradient_start: Rgb,
    pub gradient_end: Rgb,
}

impl Default for EmphasisParams {
    fn default() -> Self {
        Self {
            ratio: 0.5,
            min_length: 3,
            qualify: Qualify::Alpha,
            mode: Mode::BoldPrefix,
            gradient_start: Rgb::BLUE,
            gradient_end: Rgb::RED,
        }
    }
}

impl EmphasisParams {
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn with_qualify(mut self, qualify: Qualify) -> Self {
        self.qualify = qualify;
        self
    }

    pub fn with_gradient(mut self, start: Rgb, end: Rgb) -> Self {
        self.gradient_start = start;
        self.gradient_end = end;
        self
    }
}
