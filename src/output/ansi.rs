use crate::emphasis::render::THIN_SPACE;
use crate::emphasis::{Emphasis, Renderer, Rgb, WordStyle};
use crossterm::style::{style, Color, Stylize};

/// Renders emphasis with terminal escape sequences.
///
/// Bold heads use SGR bold; gradient words are drawn in 24-bit color.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnsiRenderer;

fn terminal_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

impl Renderer for AnsiRenderer {
    fn write_word(&self, out: &mut String, word: &Emphasis<'_>) {
        let (head, tail) = (word.head(), word.tail());
        let rendered = match word.style {
            WordStyle::Bold => format!("{}{}", style(head).bold(), tail),
            WordStyle::Spaced => format!("{head}{THIN_SPACE}{tail}"),
            WordStyle::Colored(rgb) => {
                let color = terminal_color(rgb);
                format!(
                    "{}{}",
                    style(head).bold().with(color),
                    style(tail).with(color)
                )
            }
        };
        out.push_str(&rendered);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emphasis::{annotate, EmphasisParams, Mode};

    const BOLD: &str = "\u{1b}[1m";

    /// Test that the head is wrapped in SGR bold and the tail is left plain.
    #[test]
    fn test_bold_prefix_uses_sgr_bold() {
        let rendered = AnsiRenderer.render(&annotate("Hello, world!", &EmphasisParams::default()));
        assert!(rendered.starts_with(&format!("{BOLD}He")));
        assert!(rendered.contains("llo, "));
        assert!(rendered.ends_with("rld!"));
    }

    #[test]
    fn test_separators_are_untouched() {
        let rendered = AnsiRenderer.render(&annotate(" -- a bb -- ", &EmphasisParams::default()));
        assert_eq!(rendered, " -- a bb -- ");
    }

    /// Test that micro-space output is identical to the markup renderer.
    #[test]
    fn test_micro_space_has_no_escapes() {
        let params = EmphasisParams::default().with_mode(Mode::MicroSpace);
        let rendered = AnsiRenderer.render(&annotate("Hello, world!", &params));
        assert_eq!(rendered, "He\u{2009}llo, wo\u{2009}rld!");
    }

    #[test]
    fn test_gradient_words_are_bold() {
        let params = EmphasisParams::default().with_mode(Mode::Gradient);
        let rendered = AnsiRenderer.render(&annotate("first last", &params));
        assert_eq!(rendered.matches(BOLD).count(), 2);
        // colors are suppressed when NO_COLOR is set
        if std::env::var_os("NO_COLOR").is_none() {
            assert!(rendered.contains("38;2;0;0;255"));
            assert!(rendered.contains("38;2;255;0;0"));
        }
    }

    #[test]
    fn test_terminal_color() {
        assert_eq!(
            terminal_color(Rgb::new(1, 2, 3)),
            Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }
}
