// Tokenizer - ordered extraction cascade over a shrinking working text

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use super::token::{Token, TokenClass};
use crate::engine::config::DashPolicy;

lazy_static! {
    static ref EMAIL: Regex =
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid regex");
    static ref URL: Regex = Regex::new(r"https?://\S+|www\.\S+").expect("valid regex");
    static ref DOLLAR: Regex = Regex::new(r"\$\d+\b").expect("valid regex");
    static ref PERCENT: Regex = Regex::new(r"\b\d+%").expect("valid regex");
    static ref TAG: Regex = Regex::new(r"[@#]\w+").expect("valid regex");
    static ref DECIMAL: Regex = Regex::new(r"\b\d+[.,]\d+\b").expect("valid regex");
    static ref HYPHENATED: Regex = Regex::new(r"\b\w+(?:-\w+)+\b").expect("valid regex");
    // en dash (U+2013) and em dash (U+2014) join compounds too
    static ref HYPHENATED_ANY_DASH: Regex =
        Regex::new("\\b\\w+(?:[-\u{2013}\u{2014}]\\w+)+\\b").expect("valid regex");
    static ref WORD: Regex = Regex::new(r"\b\w+(?:['\x{2019}]\w+)?\b").expect("valid regex");
}

/// Runs the extraction passes in priority order.
///
/// Each pass collects every non-overlapping match of its pattern from the
/// working text and deletes those matches before the next pass runs, so no
/// character is ever claimed by two token classes.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer {
    dash_policy: DashPolicy,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(DashPolicy::default())
    }
}

impl Tokenizer {
    pub fn new(dash_policy: DashPolicy) -> Self {
        Self { dash_policy }
    }

    /// The cascade. Reordering these entries changes how ambiguous text is
    /// classified, e.g. "3.14" only survives as one token because the
    /// decimal pass runs before the word pass.
    fn passes(&self) -> [(TokenClass, &'static Regex); 8] {
        let hyphenated: &'static Regex = match self.dash_policy {
            DashPolicy::AsciiHyphen => &*HYPHENATED,
            DashPolicy::AnyDash => &*HYPHENATED_ANY_DASH,
        };

        [
            (TokenClass::Email, &*EMAIL),
            (TokenClass::Url, &*URL),
            (TokenClass::Dollar, &*DOLLAR),
            (TokenClass::Percent, &*PERCENT),
            (TokenClass::Tag, &*TAG),
            (TokenClass::Decimal, &*DECIMAL),
            (TokenClass::Hyphenated, hyphenated),
            (TokenClass::Word, &*WORD),
        ]
    }

    pub fn tokenize_classified(&self, text: &str) -> Vec<Token> {
        let (tokens, _) = self.passes().iter().fold(
            (Vec::new(), text.to_string()),
            |(mut tokens, remaining), &(class, pattern)| {
                let (matches, rest) = extract(pattern, &remaining);
                debug!("{} pass: {} token(s)", class.label(), matches.len());
                tokens.extend(matches.into_iter().map(|text| Token { text, class }));
                (tokens, rest)
            },
        );
        tokens
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.tokenize_classified(text)
            .into_iter()
            .map(|token| token.text)
            .collect()
    }
}

/// Splits `remaining` into the matches of `pattern` and the text left once
/// they are deleted. Neighbouring text is not re-joined with a separator.
fn extract(pattern: &Regex, remaining: &str) -> (Vec<String>, String) {
    let mut matches = Vec::new();
    let mut rest = String::with_capacity(remaining.len());
    let mut last = 0;

    for m in pattern.find_iter(remaining) {
        rest.push_str(&remaining[last..m.start()]);
        matches.push(m.as_str().to_string());
        last = m.end();
    }
    rest.push_str(&remaining[last..]);

    (matches, rest)
}

/// Tokenizes with the default dash policy.
pub fn tokenize(text: &str) -> Vec<String> {
    Tokenizer::default().tokenize(text)
}

/// Tokenizes with the default dash policy, keeping each token's class.
pub fn tokenize_classified(text: &str) -> Vec<Token> {
    Tokenizer::default().tokenize_classified(text)
}
