//! Lexical text analysis: sentence counts, token counts and the most
//! frequent tokens of free-form text.
//!
//! ```
//! let result = textlens::analyze("Hello world. Hello again!");
//! assert_eq!(result.sentence_count, 2);
//! assert_eq!(result.word_count, 4);
//! assert_eq!(result.top_words[0], ("Hello".to_string(), 2));
//! ```

pub mod analysis;
pub mod engine;
pub mod input;
pub mod report;
pub mod source;

pub use analysis::{analyze, tokenize, AnalysisResult, Analyzer};
pub use engine::config::{AnalyzerConfig, Config, DashPolicy, ReportConfig};
