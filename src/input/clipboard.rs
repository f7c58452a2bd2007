use super::{LoadError, LoadedDocument};
use arboard::Clipboard;

/// Reads the system clipboard. A blank or empty clipboard loads nothing.
pub fn load() -> Result<Option<LoadedDocument>, LoadError> {
    let mut clipboard = Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;

    match clipboard.get_text() {
        Ok(text) => Ok(from_clipboard_text(text)),
        Err(arboard::Error::ContentNotAvailable) => Ok(None),
        Err(e) => Err(LoadError::Clipboard(e.to_string())),
    }
}

fn from_clipboard_text(text: String) -> Option<LoadedDocument> {
    if text.trim().is_empty() {
        return None;
    }
    Some(LoadedDocument {
        text,
        source: "clipboard".to_string(),
    })
}
