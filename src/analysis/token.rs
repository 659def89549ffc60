/// Which extraction pass produced a token.
///
/// Variants are declared in pass order; `TokenClass::ALL` iterates them the
/// same way the tokenizer runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    Email,
    Url,
    Dollar,
    Percent,
    Tag,
    Decimal,
    Hyphenated,
    Word,
}

impl TokenClass {
    pub const ALL: [TokenClass; 8] = [
        TokenClass::Email,
        TokenClass::Url,
        TokenClass::Dollar,
        TokenClass::Percent,
        TokenClass::Tag,
        TokenClass::Decimal,
        TokenClass::Hyphenated,
        TokenClass::Word,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TokenClass::Email => "email",
            TokenClass::Url => "url",
            TokenClass::Dollar => "dollar",
            TokenClass::Percent => "percent",
            TokenClass::Tag => "hashtag/mention",
            TokenClass::Decimal => "decimal",
            TokenClass::Hyphenated => "hyphenated",
            TokenClass::Word => "word",
        }
    }
}

/// Token struct produced by the tokenizer cascade
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub text: String,
    /// The pass that claimed this substring.
    pub class: TokenClass,
}

/// Count tokens per class, in pass order. Classes with no tokens are omitted.
pub fn class_counts(tokens: &[Token]) -> Vec<(TokenClass, usize)> {
    TokenClass::ALL
        .iter()
        .map(|&class| (class, tokens.iter().filter(|t| t.class == class).count()))
        .filter(|&(_, count)| count > 0)
        .collect()
}
