use crate::engine::config::ConfigError;
use crate::input::LoadError;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a single emphasis run.
///
/// Each variant is reported to the user as a message; none of them leave
/// state behind that would affect the next run.
#[derive(Error, Debug)]
pub enum SalientError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("No text to emphasize. Please enter or upload some text first")]
    EmptyInput,

    #[error("failed to write {path}: {source}")]
    Output {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Returns `text` unchanged, or [`SalientError::EmptyInput`] if it is empty or only whitespace.
pub fn require_text(text: &str) -> Result<&str, SalientError> {
    if text.trim().is_empty() {
        return Err(SalientError::EmptyInput);
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_error() {
        assert!(matches!(require_text(""), Err(SalientError::EmptyInput)));
    }

    #[test]
    fn test_whitespace_only_text_error() {
        assert!(matches!(
            require_text("  \n\t "),
            Err(SalientError::EmptyInput)
        ));
    }

    #[test]
    fn test_valid_text_passes_through() {
        assert_eq!(require_text(" hello world ").unwrap(), " hello world ");
    }

    /// Test that a load error displays its own message, not a generic prefix.
    #[test]
    fn test_load_error_message_is_not_wrapped() {
        let err: SalientError = LoadError::UnsupportedFileType("image/png".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Unsupported file type: image/png. Please provide a .txt, .docx, or .pdf file"
        );
    }
}
