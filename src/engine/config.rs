// Configuration for textlens analysis and report rendering
// Defaults reproduce the classic ten-line frequency report

use clap::ValueEnum;

/// Which dash characters join a hyphenated compound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DashPolicy {
    /// Only ASCII `-` joins segments; words around an em dash stay separate.
    #[default]
    #[value(name = "ascii")]
    AsciiHyphen,
    /// `-`, en dash and em dash all join segments.
    #[value(name = "any")]
    AnyDash,
}

/// Analysis configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    /// Length cap for `top_words` (default 10)
    pub top_n: usize,

    /// Compound joining rule for the hyphenated pass (default ASCII only)
    pub dash_policy: DashPolicy,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            dash_policy: DashPolicy::default(),
        }
    }
}

/// Report layout configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Display columns reserved for the token (default 20)
    pub token_width: usize,

    /// Minimum digits for the occurrence count (default 3)
    pub count_width: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            token_width: 20,
            count_width: 3,
        }
    }
}

/// Master configuration combining all textlens settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub analyzer: AnalyzerConfig,
    pub report: ReportConfig,
}
