//! Output surfaces for emphasized text.

use crate::emphasis::{MarkupRenderer, Renderer, Segment};
use clap::ValueEnum;
use serde::Deserialize;

pub mod ansi;

pub use ansi::AnsiRenderer;

/// Where the emphasized text will be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Markdown bold / inline HTML, for markdown- or HTML-capable viewers
    #[default]
    Markup,
    /// ANSI escape sequences for a terminal
    Ansi,
}

impl OutputFormat {
    pub fn renderer(self) -> &'static dyn Renderer {
        match self {
            OutputFormat::Markup => &MarkupRenderer,
            OutputFormat::Ansi => &AnsiRenderer,
        }
    }

    pub fn render(self, segments: &[Segment<'_>]) -> String {
        self.renderer().render(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emphasis::{annotate, emphasize, EmphasisParams};

    #[test]
    fn test_markup_format_matches_emphasize() {
        let params = EmphasisParams::default();
        let text = "Reading aids help focus.";
        assert_eq!(
            OutputFormat::Markup.render(&annotate(text, &params)),
            emphasize(text, &params)
        );
    }

    #[test]
    fn test_ansi_format_has_no_markdown() {
        let params = EmphasisParams::default();
        let rendered = OutputFormat::Ansi.render(&annotate("Reading aids help.", &params));
        assert!(!rendered.contains("**"));
        assert!(rendered.contains('\u{1b}'));
    }
}
