use std::io;
use std::path::{Path, PathBuf};

use log::info;

use crate::input::LoadError;

/// Reads a UTF-8 text file.
///
/// A missing file and a file that is not valid UTF-8 get their own
/// variants; every other I/O failure is passed through. Empty files load
/// fine and analyze to zero counts.
pub fn load_text_file(path: impl AsRef<Path>) -> Result<String, LoadError> {
    let path = path.as_ref();

    let content = std::fs::read_to_string(path).map_err(|err| classify(err, path))?;
    info!("loaded {} byte(s) from {}", content.len(), path.display());

    Ok(content)
}

fn classify(err: io::Error, path: &Path) -> LoadError {
    match err.kind() {
        io::ErrorKind::NotFound => LoadError::FileNotFound(PathBuf::from(path)),
        io::ErrorKind::InvalidData => LoadError::InvalidEncoding(PathBuf::from(path)),
        _ => LoadError::Io(err),
    }
}
