use super::{LoadError, LoadedDocument};
use log::{debug, info};
use std::path::Path;

/// Load text from EPUB file using epub crate.
///
/// Chapters are concatenated in spine order with a blank line between them
/// so the last sentence of one chapter never runs into the next.
pub fn load(path: &Path) -> Result<LoadedDocument, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let mut doc =
        epub::doc::EpubDoc::new(path).map_err(|e| LoadError::EpubParse(e.to_string()))?;

    let num_chapters = doc.get_num_chapters();

    if num_chapters == 0 {
        return Err(LoadError::EpubParse(
            "No chapters found in EPUB".to_string(),
        ));
    }

    let mut content = String::new();

    for chapter_idx in 0..num_chapters {
        if !doc.set_current_chapter(chapter_idx) {
            debug!("skipping unreadable chapter {}", chapter_idx);
            continue;
        }

        if let Some((chapter_content, _mime)) = doc.get_current_str() {
            let plain_text = extract_plain_text(&chapter_content);
            if !plain_text.is_empty() {
                if !content.is_empty() {
                    content.push_str("\n\n");
                }
                content.push_str(&plain_text);
            }
        }
    }

    if content.is_empty() {
        return Err(LoadError::EpubParse(
            "No extractable text content found in EPUB".to_string(),
        ));
    }

    info!(
        "extracted {} chapter(s) of text from {}",
        num_chapters,
        path.display()
    );

    Ok(LoadedDocument {
        text: content,
        source: format!("epub:{}", path.display()),
    })
}

/// Extract plain text from HTML content by removing tags.
fn extract_plain_text(html: &str) -> String {
    let mut result = String::new();
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            // Closing a tag acts as a word break so "<p>a</p><p>b</p>"
            // does not glue "a" and "b" together.
            '>' => {
                in_tag = false;
                result.push(' ');
            }
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
