use super::{LoadError, LoadedDocument};
use log::info;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load text from PDF file using pdf-extract crate.
///
/// Layout is not preserved; pages come back as plain text joined by the
/// extractor's own line breaks.
pub fn load(path: &Path) -> Result<LoadedDocument, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    // Read PDF file into memory
    let mut file = File::open(path)?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;

    let text = pdf_extract::extract_text_from_mem(&buffer)
        .map_err(|e| LoadError::PdfParse(e.to_string()))?;
    info!("extracted {} byte(s) of text from {}", text.len(), path.display());

    Ok(LoadedDocument {
        text,
        source: format!("pdf:{}", path.display()),
    })
}
