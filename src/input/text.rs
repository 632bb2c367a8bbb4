use super::{LoadError, LoadedDocument};
use std::io::Read;

/// Decodes UTF-8, dropping invalid byte sequences instead of failing.
///
/// Unlike `String::from_utf8_lossy` nothing is substituted, so a stray
/// Latin-1 byte disappears rather than turning into U+FFFD.
pub fn decode(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

/// Reads all of `reader` as text, e.g. piped stdin.
pub fn load_reader<R: Read>(mut reader: R, source: &str) -> Result<LoadedDocument, LoadError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(LoadedDocument {
        text: decode(&bytes),
        source: source.to_string(),
    })
}
