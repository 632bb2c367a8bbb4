// App module - wires a text source, emphasis parameters and an output sink together
use crate::emphasis::{annotate, EmphasisParams};
use crate::engine::error::{require_text, SalientError};
use crate::input::{self, LoadedDocument};
use crate::output::OutputFormat;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Where the text to emphasize comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A .txt, .docx or .pdf file; the MIME type overrides extension sniffing.
    File {
        path: PathBuf,
        mime: Option<String>,
    },
    /// Text given directly on the command line.
    Text(String),
    Stdin,
    Clipboard,
}

/// One configured emphasis job. Holds no state between runs.
pub struct App {
    pub params: EmphasisParams,
    pub format: OutputFormat,
}

impl App {
    pub fn new(params: EmphasisParams, format: OutputFormat) -> Self {
        Self { params, format }
    }

    pub fn load(&self, source: &Source) -> Result<LoadedDocument, SalientError> {
        let document = match source {
            Source::File { path, mime } => input::load(path, mime.as_deref())?,
            Source::Text(text) => LoadedDocument {
                text: text.clone(),
                source: "argument".to_string(),
            },
            Source::Stdin => input::text::load_reader(io::stdin().lock(), "stdin")?,
            Source::Clipboard => input::clipboard::load()?,
        };
        debug!(source = %document.source, chars = document.text.chars().count(), "text loaded");
        Ok(document)
    }

    /// Emphasizes `text` for the configured output format.
    ///
    /// Fails only with [`SalientError::EmptyInput`].
    pub fn transform(&self, text: &str) -> Result<String, SalientError> {
        let text = require_text(text)?;
        let segments = annotate(text, &self.params);
        Ok(self.format.render(&segments))
    }

    /// Loads, transforms and writes the result to `output`, or stdout when `None`.
    pub fn run(&self, source: &Source, output: Option<&Path>) -> Result<(), SalientError> {
        let document = self.load(source)?;
        let rendered = self.transform(&document.text)?;

        match output {
            Some(path) => {
                std::fs::write(path, rendered.as_bytes()).map_err(|source| {
                    SalientError::Output {
                        path: path.to_path_buf(),
                        source,
                    }
                })?;
                info!(path = %path.display(), from = %document.source, "wrote emphasized text");
            }
            None => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(rendered.as_bytes())?;
                if !rendered.ends_with('\n') {
                    stdout.write_all(b"\n")?;
                }
                stdout.flush()?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emphasis::Mode;

    fn app() -> App {
        App::new(EmphasisParams::default(), OutputFormat::Markup)
    }

    #[test]
    fn test_transform_markup() {
        assert_eq!(
            app().transform("Hello, world!").unwrap(),
            "**He**llo, **wo**rld!"
        );
    }

    #[test]
    fn test_transform_rejects_blank_text() {
        assert!(matches!(app().transform(""), Err(SalientError::EmptyInput)));
        assert!(matches!(
            app().transform(" \n "),
            Err(SalientError::EmptyInput)
        ));
    }

    /// Test that an App stays usable after a transform error.
    #[test]
    fn test_failed_run_does_not_affect_next() {
        let app = App::new(
            EmphasisParams::default().with_mode(Mode::MicroSpace),
            OutputFormat::Markup,
        );
        assert!(app.transform("").is_err());
        assert_eq!(app.transform("quick fox").unwrap(), "qu\u{2009}ick f\u{2009}ox");
    }

    #[test]
    fn test_load_text_source() {
        let doc = app().load(&Source::Text("typed".to_string())).unwrap();
        assert_eq!(doc.text, "typed");
        assert_eq!(doc.source, "argument");
    }

    #[test]
    fn test_load_missing_file() {
        let source = Source::File {
            path: PathBuf::from("/nonexistent/input.txt"),
            mime: None,
        };
        assert!(matches!(
            app().load(&source),
            Err(SalientError::Load(input::LoadError::FileNotFound(_)))
        ));
    }

    /// Test that run writes the rendered text to the output path without a trailing newline.
    #[test]
    fn test_run_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let input_path = dir.path().join("in.txt");
        let output_path = dir.path().join("out.md");
        std::fs::write(&input_path, "Salient reading").unwrap();

        let source = Source::File {
            path: input_path,
            mime: None,
        };
        app().run(&source, Some(&output_path)).unwrap();

        assert_eq!(
            std::fs::read_to_string(&output_path).unwrap(),
            "**Sal**ient **rea**ding"
        );
    }
}
