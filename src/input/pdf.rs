use super::{DocumentKind, LoadError};
use tracing::debug;

/// Extract text from PDF bytes using pdf-extract.
///
/// Pages are concatenated in order. Pages without extractable text (blank
/// pages, scanned images) are skipped.
pub fn decode(bytes: &[u8]) -> Result<String, LoadError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes).map_err(|e| {
        LoadError::DecodeFailure {
            format: DocumentKind::Pdf,
            reason: e.to_string(),
        }
    })?;

    Ok(join_pages(pages))
}

fn join_pages(pages: Vec<String>) -> String {
    let mut content = String::new();

    for (index, page) in pages.into_iter().enumerate() {
        if page.trim().is_empty() {
            debug!(page = index + 1, "skipping PDF page without extractable text");
            continue;
        }
        content.push_str(&page);
    }

    content
}
