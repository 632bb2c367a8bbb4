//! Text sources: uploaded documents, stdin and the clipboard.
//!
//! Documents are recognized by declared MIME type, or by file extension when
//! no type is given. Exactly three kinds are supported; see [`DocumentKind`].

use std::fmt;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

pub mod clipboard;
pub mod docx;
pub mod pdf;
pub mod text;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Unsupported file type: {0}. Please provide a .txt, .docx, or .pdf file")]
    UnsupportedFileType(String),

    #[error("Missing dependency: {0}")]
    MissingDependency(String),

    #[error("Could not read {format} content: {reason}")]
    DecodeFailure {
        format: DocumentKind,
        reason: String,
    },

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Document formats that can be turned into plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    PlainText,
    /// Office Open XML word-processing document (.docx)
    WordProcessing,
    Pdf,
}

pub const MIME_PLAIN_TEXT: &str = "text/plain";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const MIME_PDF: &str = "application/pdf";

impl DocumentKind {
    /// Recognizes a declared MIME type. Case and parameters (`; charset=...`) are ignored.
    pub fn from_mime(mime: &str) -> Result<Self, LoadError> {
        let essence = mime
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            MIME_PLAIN_TEXT => Ok(DocumentKind::PlainText),
            MIME_DOCX => Ok(DocumentKind::WordProcessing),
            MIME_PDF => Ok(DocumentKind::Pdf),
            _ => Err(LoadError::UnsupportedFileType(mime.to_string())),
        }
    }

    /// Recognizes a file by its extension.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("txt") | Some("text") => Ok(DocumentKind::PlainText),
            Some("docx") => Ok(DocumentKind::WordProcessing),
            Some("pdf") => Ok(DocumentKind::Pdf),
            _ => Err(LoadError::UnsupportedFileType(path.display().to_string())),
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            DocumentKind::PlainText => MIME_PLAIN_TEXT,
            DocumentKind::WordProcessing => MIME_DOCX,
            DocumentKind::Pdf => MIME_PDF,
        }
    }

    /// Short tag used in [`LoadedDocument::source`].
    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::PlainText => "txt",
            DocumentKind::WordProcessing => "docx",
            DocumentKind::Pdf => "pdf",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentKind::PlainText => "plain text",
            DocumentKind::WordProcessing => "DOCX",
            DocumentKind::Pdf => "PDF",
        };
        f.write_str(name)
    }
}

/// Plain text pulled out of some source, tagged with where it came from
/// (`pdf:/path/to/file.pdf`, `stdin`, `clipboard`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDocument {
    pub text: String,
    pub source: String,
}

/// Decodes raw document bytes of a known kind into plain text.
pub fn decode_bytes(bytes: &[u8], kind: DocumentKind) -> Result<String, LoadError> {
    let text = match kind {
        DocumentKind::PlainText => text::decode(bytes),
        DocumentKind::WordProcessing => docx::decode(bytes)?,
        DocumentKind::Pdf => pdf::decode(bytes)?,
    };
    debug!(
        kind = kind.label(),
        bytes = bytes.len(),
        chars = text.chars().count(),
        "decoded document"
    );
    Ok(text)
}

/// Reads an uploaded document from `reader` and decodes it according to its declared MIME type.
///
/// The type is checked before anything is read, so unsupported uploads are
/// rejected without consuming the reader.
pub fn decode<R: Read>(mut reader: R, mime: &str) -> Result<String, LoadError> {
    let kind = DocumentKind::from_mime(mime)?;
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    decode_bytes(&bytes, kind)
}

/// Loads a document from disk.
///
/// The kind comes from `mime` when given, otherwise from the file extension.
pub fn load(path: impl AsRef<Path>, mime: Option<&str>) -> Result<LoadedDocument, LoadError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let kind = match mime {
        Some(mime) => DocumentKind::from_mime(mime)?,
        None => DocumentKind::from_path(path)?,
    };

    let bytes = fs::read(path)?;
    let text = decode_bytes(&bytes, kind)?;
    info!(path = %path.display(), kind = kind.label(), "loaded document");

    Ok(LoadedDocument {
        text,
        source: format!("{}:{}", kind.label(), path.display()),
    })
}
