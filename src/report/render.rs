use crate::analysis::{AnalysisResult, TokenClass};
use crate::engine::config::ReportConfig;
use clap::ValueEnum;
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

/// Output format for analysis results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report.
    #[default]
    Text,
    /// JSON output.
    Json,
}

/// Left-align `text` in `width` terminal columns. Wide glyphs (CJK, emoji)
/// count as two columns; text already wider than `width` is left as is.
fn pad_to_width(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    let mut padded = String::with_capacity(text.len() + width.saturating_sub(used));
    padded.push_str(text);
    padded.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
    padded
}

/// One numbered report line. The token is padded to `token_width` columns
/// and the count right-aligned in `count_width` digits.
pub fn render_rank_line(rank: usize, token: &str, count: usize, config: &ReportConfig) -> String {
    format!(
        "{:2}. {} - {:>width$} occurrences",
        rank,
        pad_to_width(token, config.token_width),
        count,
        width = config.count_width
    )
}

/// Render the full text report. `top_n` is the configured cap, used in the
/// heading even when fewer distinct tokens exist.
pub fn render_report(
    result: &AnalysisResult,
    top_n: usize,
    config: &ReportConfig,
    classes: Option<&[(TokenClass, usize)]>,
) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "Text Analysis Results");
    let _ = writeln!(out, "---------------------");
    let _ = writeln!(out, "Word count: {}", result.word_count);
    let _ = writeln!(out, "Sentence count: {}", result.sentence_count);
    let _ = writeln!(out);
    let _ = writeln!(out, "Top {} most frequent words:", top_n);

    for (i, (token, count)) in result.top_words.iter().enumerate() {
        let _ = writeln!(out, "{}", render_rank_line(i + 1, token, *count, config));
    }

    if let Some(classes) = classes {
        let _ = writeln!(out);
        let _ = writeln!(out, "Tokens by class:");
        for (class, count) in classes {
            let _ = writeln!(out, "  {} {}", pad_to_width(class.label(), 16), count);
        }
    }

    out
}

pub fn render_json(result: &AnalysisResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}
