//! Saving generated text to disk

use std::fs;
use std::path::Path;
use tracing::info;
use crate::error::{GeneratorError, Result};

/// Write generated text to `path` as UTF-8.
///
/// Surrounding whitespace is trimmed and the rest is written in a single
/// call; there is no partial-write recovery. Empty text is rejected so a
/// blank file is never produced.
pub fn save_text(path: &Path, text: &str) -> Result<()> {
    let content = text.trim();
    if content.is_empty() {
        return Err(GeneratorError::InvalidInput(
            "Nothing to save: generate some cards first".to_string(),
        ));
    }

    fs::write(path, content)
        .map_err(|e| GeneratorError::Save(format!("Failed to write {}: {}", path.display(), e)))?;

    info!(path = %path.display(), bytes = content.len(), "saved generated cards");
    Ok(())
}
