//! Token-level linguistic filtering
//!
//! Tokenizes text, drops punctuation and stopwords (negations always
//! survive), optionally stems what is left and joins the result back into a
//! single string.

use crate::config::TrimConfig;
use crate::error::Result;
use crate::resources::LinguisticResources;
use crate::stemmer::{build_stemmer, Stemmer};
use crate::tokenizer::Tokenizer;
use regex::Regex;
use std::sync::Arc;

/// Result of one filter pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Filtered text
    pub text: String,
    /// Tokens produced by the tokenizer
    pub tokens_in: usize,
    /// Tokens that survived filtering
    pub tokens_out: usize,
}

/// Stopword, punctuation and stemming filter
pub struct LinguisticFilter {
    remove_spaces: bool,
    remove_stopwords: bool,
    remove_punctuation: bool,
    resources: Arc<LinguisticResources>,
    stemmer: Option<Box<dyn Stemmer>>,
    tokenizer: Tokenizer,
    whitespace: Regex,
    space_before_punctuation: Regex,
}

impl std::fmt::Debug for LinguisticFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinguisticFilter")
            .field("remove_spaces", &self.remove_spaces)
            .field("remove_stopwords", &self.remove_stopwords)
            .field("remove_punctuation", &self.remove_punctuation)
            .field("language", &self.resources.code())
            .field("stemmer", &self.stemmer_name())
            .finish()
    }
}

impl LinguisticFilter {
    /// Build a filter from the token-level options of `config`
    ///
    /// Fails if the configured stemmer is unavailable for the resource
    /// language.
    pub fn new(config: &TrimConfig, resources: Arc<LinguisticResources>) -> Result<Self> {
        let stemmer = build_stemmer(config.stemmer, &resources)?;

        Ok(Self {
            remove_spaces: config.remove_spaces,
            remove_stopwords: config.remove_stopwords,
            remove_punctuation: config.remove_punctuation,
            resources,
            stemmer,
            tokenizer: Tokenizer::new(),
            whitespace: Regex::new(r"\s+").expect("whitespace pattern is valid"),
            space_before_punctuation: Regex::new(r"\s([?.!,:;])")
                .expect("punctuation spacing pattern is valid"),
        })
    }

    /// Name of the active stemmer, if any
    pub fn stemmer_name(&self) -> Option<&'static str> {
        self.stemmer.as_ref().map(|s| s.name())
    }

    /// Filter `text`
    pub fn apply(&self, text: &str) -> String {
        self.apply_counted(text).text
    }

    /// Filter `text` and report token counts
    pub fn apply_counted(&self, text: &str) -> FilterOutcome {
        let tokens = self.tokenizer.tokenize(text);
        let tokens_in = tokens.len();

        let kept: Vec<&str> = tokens
            .into_iter()
            .filter(|surface| !(self.remove_punctuation && self.resources.is_punctuation(surface)))
            .filter(|surface| {
                !(self.remove_stopwords && self.resources.is_excluded(&surface.to_lowercase()))
            })
            .collect();
        let tokens_out = kept.len();

        let words: Vec<String> = match &self.stemmer {
            Some(stemmer) => kept
                .iter()
                .map(|original| restore_case(&stemmer.stem(original), original))
                .collect(),
            None => kept.iter().map(|s| s.to_string()).collect(),
        };

        let separator = if self.remove_spaces { "" } else { " " };
        let joined = words.join(separator);
        let collapsed = self.whitespace.replace_all(joined.trim(), " ");

        let text = if self.remove_punctuation {
            collapsed.into_owned()
        } else {
            self.space_before_punctuation
                .replace_all(&collapsed, "$1")
                .into_owned()
        };

        log::trace!("filter kept {tokens_out} of {tokens_in} tokens");

        FilterOutcome {
            text,
            tokens_in,
            tokens_out,
        }
    }
}

/// Give `stem` the casing pattern of `original`
///
/// Title-case originals produce title-case stems, all-caps originals
/// produce all-caps stems; anything else keeps the stem as produced.
pub fn restore_case(stem: &str, original: &str) -> String {
    if is_title(original) {
        to_title(stem)
    } else if is_upper(original) {
        stem.to_uppercase()
    } else {
        stem.to_string()
    }
}

fn is_cased(c: char) -> bool {
    c.is_uppercase() || c.is_lowercase()
}

/// Every cased run starts upper-case and continues lower-case
fn is_title(word: &str) -> bool {
    let mut previous_cased = false;
    let mut any_cased = false;

    for c in word.chars() {
        if c.is_uppercase() {
            if previous_cased {
                return false;
            }
            previous_cased = true;
            any_cased = true;
        } else if c.is_lowercase() {
            if !previous_cased {
                return false;
            }
            previous_cased = true;
            any_cased = true;
        } else {
            previous_cased = false;
        }
    }

    any_cased
}

fn is_upper(word: &str) -> bool {
    let mut any_upper = false;
    for c in word.chars() {
        if c.is_lowercase() {
            return false;
        }
        any_upper |= c.is_uppercase();
    }
    any_upper
}

fn to_title(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut previous_cased = false;

    for c in word.chars() {
        if is_cased(c) {
            if previous_cased {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            previous_cased = true;
        } else {
            out.push(c);
            previous_cased = false;
        }
    }

    out
}
