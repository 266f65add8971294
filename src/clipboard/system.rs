use arboard::Clipboard;

use super::backend::ClipboardError;

pub fn copy(text: &str) -> Result<(), ClipboardError> {
    Clipboard::new()
        .map_err(|_| ClipboardError::SystemUnavailable)?
        .set_text(text)
        .map_err(|_| ClipboardError::WriteError)
}
