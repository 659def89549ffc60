pub mod frequency;
pub mod result;
pub mod sentence;
pub mod token;
pub mod tokenizer;

pub use frequency::rank;
pub use result::{analyze, AnalysisResult, Analyzer};
pub use sentence::split_sentences;
pub use token::{class_counts, Token, TokenClass};
pub use tokenizer::{tokenize, tokenize_classified, Tokenizer};
