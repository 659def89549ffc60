use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

/// Stand-in for "..." while splitting. It contains no terminator and no
/// whitespace, so it can never create or remove a split point.
const ELLIPSIS_PLACEHOLDER: &str = "\u{2026}";

lazy_static! {
    static ref SENTENCE_BREAK: Regex = Regex::new(r"[.!?;]+\s+").expect("valid regex");
}

/// Counts sentences in `text`.
///
/// Ellipses are masked first, then the text is split on runs of `.`, `!`,
/// `;`, `?` followed by whitespace. Fragments that are empty after trimming
/// are not counted. A terminator at the very end of the text, or one
/// followed directly by a non-space character ("3.14"), never splits.
pub fn split_sentences(text: &str) -> usize {
    let masked = text.replace("...", ELLIPSIS_PLACEHOLDER);

    let mut count = SENTENCE_BREAK
        .split(&masked)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .count();

    // Terminator-only text such as "! " splits into nothing but is still
    // one sentence.
    if count == 0 && !text.trim().is_empty() {
        count = 1;
    }

    debug!("sentence splitter: {} fragment(s)", count);
    count
}
