use super::{LoadError, LoadedDocument};
use crate::engine::error::load_text_file;
use std::path::Path;

/// Load a plain UTF-8 text file.
pub fn load(path: &Path) -> Result<LoadedDocument, LoadError> {
    Ok(LoadedDocument {
        text: load_text_file(path)?,
        source: format!("text:{}", path.display()),
    })
}
