//! Word-processing (.docx) text extraction.
//!
//! A .docx file is a zip archive; the body text lives in `word/document.xml`.
//! Body paragraphs are joined with newlines. Tables and text boxes are skipped.
//!
//! Extraction needs the `docx` cargo feature (on by default). Builds without it
//! report [`LoadError::MissingDependency`] for .docx input.

use super::LoadError;
#[cfg(feature = "docx")]
use super::DocumentKind;

#[cfg(feature = "docx")]
const DOCUMENT_PART: &str = "word/document.xml";

#[cfg(feature = "docx")]
pub fn decode(bytes: &[u8]) -> Result<String, LoadError> {
    use std::io::{BufReader, Cursor};

    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(failure)?;
    let part = archive.by_name(DOCUMENT_PART).map_err(failure)?;
    let paragraphs = read_paragraphs(BufReader::new(part))?;

    Ok(paragraphs.join("\n"))
}

#[cfg(not(feature = "docx"))]
pub fn decode(_bytes: &[u8]) -> Result<String, LoadError> {
    Err(LoadError::MissingDependency(
        "DOCX support is not available in this build; rebuild with `--features docx`".to_string(),
    ))
}

#[cfg(feature = "docx")]
fn failure(err: impl std::fmt::Display) -> LoadError {
    LoadError::DecodeFailure {
        format: DocumentKind::WordProcessing,
        reason: err.to_string(),
    }
}

/// Collects the text of each body-level `w:p`.
///
/// Runs contribute their `w:t` text; `w:tab` becomes a tab and `w:br` /
/// `w:cr` a newline. Text boxes are dropped: Word stores each one twice
/// under `mc:AlternateContent` (and older files under `w:txbxContent`).
#[cfg(feature = "docx")]
fn read_paragraphs<R: std::io::BufRead>(source: R) -> Result<Vec<String>, LoadError> {
    use quick_xml::events::Event;
    use quick_xml::Reader;

    let mut reader = Reader::from_reader(source);
    let mut buf = Vec::new();

    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut paragraph_depth = 0usize;
    let mut table_depth = 0usize;
    let mut skip_depth = 0usize;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf).map_err(failure)? {
            Event::Start(e) if is_text_box_container(e.name().as_ref()) => skip_depth += 1,
            Event::End(e) if is_text_box_container(e.name().as_ref()) => {
                skip_depth = skip_depth.saturating_sub(1)
            }
            Event::Eof => break,
            _ if skip_depth > 0 => {}
            Event::Start(e) => match e.name().as_ref() {
                b"w:tbl" => table_depth += 1,
                b"w:p" if table_depth == 0 => paragraph_depth += 1,
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::Empty(e) if table_depth == 0 => match e.name().as_ref() {
                b"w:p" if paragraph_depth == 0 => paragraphs.push(String::new()),
                b"w:tab" if paragraph_depth > 0 => current.push('\t'),
                b"w:br" | b"w:cr" if paragraph_depth > 0 => current.push('\n'),
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:tbl" => table_depth = table_depth.saturating_sub(1),
                b"w:p" if table_depth == 0 && paragraph_depth > 0 => {
                    paragraph_depth -= 1;
                    if paragraph_depth == 0 {
                        paragraphs.push(std::mem::take(&mut current));
                    }
                }
                b"w:t" => in_text = false,
                _ => {}
            },
            Event::Text(t) if in_text && paragraph_depth > 0 && table_depth == 0 => {
                current.push_str(&t.unescape().map_err(failure)?);
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs)
}

#[cfg(feature = "docx")]
fn is_text_box_container(name: &[u8]) -> bool {
    matches!(name, b"mc:AlternateContent" | b"w:txbxContent")
}
