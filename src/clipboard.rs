//! Clipboard module: export the transformed text
//!
//! Thin wrapper around `arboard`. Clipboard initialization can fail on
//! headless machines, so callers should treat errors as non-fatal and fall
//! back to a warning.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy `text` to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text.to_string())
        .context("Failed to copy to clipboard")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_does_not_panic() {
        // May fail on headless CI; only the error path matters here.
        let _ = copy_to_clipboard("KHOOR");
    }
}
