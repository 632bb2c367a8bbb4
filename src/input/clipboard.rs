use super::{LoadError, LoadedDocument};

/// Load whatever text is currently on the system clipboard.
pub fn load() -> Result<LoadedDocument, LoadError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))?;

    Ok(LoadedDocument {
        text,
        source: "clipboard".to_string(),
    })
}
