use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("PDF parse error: {0}")]
    PdfParse(String),

    #[error("EPUB parse error: {0}")]
    EpubParse(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Invalid file encoding: {}", .0.display())]
    InvalidEncoding(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Raw text pulled from a source, ready for analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDocument {
    pub text: String,
    pub source: String,
}

pub mod clipboard;
pub mod epub;
pub mod pdf;
pub mod text;

/// Loads a file, picking the reader from its extension.
///
/// `.pdf` and `.epub` (any case) go to their extractors; everything else is
/// read as UTF-8 text.
pub fn load_path(path: impl AsRef<Path>) -> Result<LoadedDocument, LoadError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("pdf") => pdf::load(path),
        Some("epub") => epub::load(path),
        _ => text::load(path),
    }
}
