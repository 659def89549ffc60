use log::debug;
use serde::Serialize;

use super::frequency::rank;
use super::sentence::split_sentences;
use super::token::Token;
use super::tokenizer::Tokenizer;
use crate::engine::config::AnalyzerConfig;

/// Counts produced by one analysis call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub word_count: usize,
    pub sentence_count: usize,
    /// `(token, count)` pairs, highest count first, at most `top_n` long.
    pub top_words: Vec<(String, usize)>,
}

/// Stateless analysis entry point. One `Analyzer` can be shared freely
/// between threads; every call works on its own copy of the text.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
    tokenizer: Tokenizer,
}

impl Analyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            tokenizer: Tokenizer::new(config.dash_policy),
            config,
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn analyze(&self, text: &str) -> AnalysisResult {
        self.analyze_classified(text).0
    }

    /// Like [`Analyzer::analyze`] but also hands back the classified token
    /// stream the counts were computed from.
    pub fn analyze_classified(&self, text: &str) -> (AnalysisResult, Vec<Token>) {
        let sentence_count = split_sentences(text);
        let tokens = self.tokenizer.tokenize_classified(text);
        let top_words = rank(
            &tokens.iter().map(|t| t.text.as_str()).collect::<Vec<_>>(),
            self.config.top_n,
        );

        debug!(
            "analyzed {} byte(s): {} token(s), {} sentence(s)",
            text.len(),
            tokens.len(),
            sentence_count
        );

        let result = AnalysisResult {
            word_count: tokens.len(),
            sentence_count,
            top_words,
        };
        (result, tokens)
    }
}

/// Analyzes `text` with the default configuration.
pub fn analyze(text: &str) -> AnalysisResult {
    Analyzer::default().analyze(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenize;
    use crate::engine::config::DashPolicy;

    #[test]
    fn test_analyze_greeting() {
        let result = analyze("Hello world. Hello again!");
        assert_eq!(result.sentence_count, 2);
        assert_eq!(result.word_count, 4);
        assert_eq!(result.top_words[0], ("Hello".to_string(), 2));
    }

    #[test]
    fn test_analyze_empty() {
        let result = analyze("");
        assert_eq!(
            result,
            AnalysisResult {
                word_count: 0,
                sentence_count: 0,
                top_words: vec![],
            }
        );
    }

    #[test]
    fn test_analyze_special_tokens() {
        let result =
            analyze("Contact us at test@example.com or visit https://example.com today.");
        assert_eq!(result.word_count, 8);
        assert_eq!(result.sentence_count, 1);
        assert!(result
            .top_words
            .contains(&("test@example.com".to_string(), 1)));
        assert!(result
            .top_words
            .contains(&("https://example.com".to_string(), 1)));
    }

    #[test]
    fn test_analyze_ellipsis() {
        assert_eq!(analyze("Wait... what?").sentence_count, 1);
    }

    #[test]
    fn test_word_count_of_mixed_tokens() {
        let text = "Mixed bag: $20, 15%, #tag, 2.5, co-op, a@b.io and www.x.org!";
        assert_eq!(analyze(text).word_count, 10);
        assert_eq!(
            tokenize(text),
            vec![
                "a@b.io",
                "www.x.org!",
                "$20",
                "15%",
                "#tag",
                "2.5",
                "co-op",
                "Mixed",
                "bag",
                "and",
            ]
        );
    }

    #[test]
    fn test_top_words_bounded_and_non_increasing() {
        let text = "a b c d e f g h i j k l a b c a";
        let result = analyze(text);
        assert_eq!(result.top_words.len(), 10);
        assert!(result.top_words.windows(2).all(|w| w[0].1 >= w[1].1));
        assert_eq!(result.top_words[0], ("a".to_string(), 3));
    }

    #[test]
    fn test_custom_top_n() {
        let analyzer = Analyzer::new(AnalyzerConfig {
            top_n: 2,
            ..AnalyzerConfig::default()
        });
        assert_eq!(analyzer.analyze("x y z x").top_words.len(), 2);
    }

    #[test]
    fn test_dash_policy_reaches_tokenizer() {
        let analyzer = Analyzer::new(AnalyzerConfig {
            dash_policy: DashPolicy::AnyDash,
            ..AnalyzerConfig::default()
        });
        assert_eq!(analyzer.analyze("long\u{2014}awaited").word_count, 1);
        assert_eq!(analyze("long\u{2014}awaited").word_count, 2);
    }

    #[test]
    fn test_analyze_is_repeatable() {
        let text = "Repeat me. Repeat me again... and again!";
        assert_eq!(analyze(text), analyze(text));
    }

    #[test]
    fn test_analyze_classified_returns_stream() {
        let (result, tokens) = Analyzer::default().analyze_classified("go $5 go");
        assert_eq!(result.word_count, tokens.len());
        assert_eq!(tokens[0].text, "$5");
    }

    #[test]
    fn test_serializes_pairs_as_arrays() {
        let json = serde_json::to_string(&analyze("hi hi")).unwrap();
        assert_eq!(
            json,
            r#"{"word_count":2,"sentence_count":1,"top_words":[["hi",2]]}"#
        );
    }
}
