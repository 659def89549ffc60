use super::SourceCommand;

/// Parse a source argument into a command
///
/// Supports:
/// - `@@` → Load clipboard
/// - `@filename` → Load file
/// - `filename` → Load file
pub fn parse_source(input: &str) -> SourceCommand {
    let input = input.trim();

    if let Some(rest) = input.strip_prefix('@') {
        let filename = rest.trim();
        if filename == "@" {
            SourceCommand::LoadClipboard
        } else {
            SourceCommand::LoadFile(filename.to_string())
        }
    } else {
        SourceCommand::LoadFile(input.to_string())
    }
}
