use clap::Parser;

use textlens::report::OutputFormat;
use textlens::DashPolicy;

/// Count sentences, tokens and the most frequent tokens of a text.
#[derive(Parser, Debug)]
#[command(name = "textlens", version, about)]
pub struct Cli {
    /// Text, PDF or EPUB file to analyze; `@@` reads the clipboard.
    #[arg(default_value = "sample_text.txt")]
    pub source: String,

    /// Number of most frequent tokens to report (1 to 10).
    #[arg(
        long,
        default_value_t = 10,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..=10)
    )]
    pub top: usize,

    /// Which dashes join hyphenated compounds.
    #[arg(long, value_enum, default_value_t = DashPolicy::AsciiHyphen)]
    pub dash_policy: DashPolicy,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Append a per-class token breakdown to the text report.
    #[arg(long)]
    pub classes: bool,
}
