//! Word tokenization
//!
//! Word tokens follow Treebank conventions closely enough for filtering:
//! punctuation marks become tokens of their own, sentence-final periods are
//! split from the preceding word, while dotted abbreviations (`U.S.`, `e.g.`),
//! decimal numbers (`3.14`, `1,000`) and hyphenated words stay whole.

use regex::Regex;

/// Token pattern, tried left to right
const TOKEN_PATTERN: &str = r"(?x)
      \.{2,} | …                         # ellipsis
    | -{2,}                              # dash run
    | (?:\p{L}\.){2,}                    # dotted abbreviation
    | \p{N}+(?:[.,]\p{N}+)+              # number with separators
    | [\p{L}\p{N}_]+(?:-[\p{L}\p{N}_]+)* # word, optionally hyphenated
    | \S                                 # any other symbol
";

/// Regex-driven word tokenizer
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pattern: Regex,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Create a tokenizer
    pub fn new() -> Self {
        let pattern = Regex::new(TOKEN_PATTERN).expect("token pattern is valid");
        Self { pattern }
    }

    /// Split `text` into word tokens, in stream order
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.pattern.find_iter(text).map(|m| m.as_str()).collect()
    }
}

/// Remove straight and typographic apostrophes
///
/// Contractions collapse into single words: `don't` becomes `dont`.
pub fn strip_apostrophes(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '\'' | '’')).collect()
}
