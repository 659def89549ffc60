use crate::input::{self, LoadError, LoadedDocument};

/// Where the text to analyze comes from
#[derive(Debug, Clone, PartialEq)]
pub enum SourceCommand {
    /// Load a file (text, PDF, EPUB supported)
    LoadFile(String),

    /// Load from clipboard
    LoadClipboard,
}

/// Run the loader a parsed source command points at.
pub fn load_source(command: &SourceCommand) -> Result<LoadedDocument, LoadError> {
    match command {
        SourceCommand::LoadFile(path) => input::load_path(path),
        SourceCommand::LoadClipboard => input::clipboard::load(),
    }
}
