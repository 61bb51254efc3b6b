//! Snowball stemmer backed by `rust-stemmers`

use super::Stemmer;
use crate::error::{EngineError, Result};
use rust_stemmers::Algorithm;

/// Map a snowball language name to its algorithm
pub fn algorithm_for(language: &str) -> Option<Algorithm> {
    let algorithm = match language.trim().to_ascii_lowercase().as_str() {
        "danish" => Algorithm::Danish,
        "dutch" => Algorithm::Dutch,
        "english" => Algorithm::English,
        "finnish" => Algorithm::Finnish,
        "french" => Algorithm::French,
        "german" => Algorithm::German,
        "hungarian" => Algorithm::Hungarian,
        "italian" => Algorithm::Italian,
        "norwegian" => Algorithm::Norwegian,
        "portuguese" => Algorithm::Portuguese,
        "romanian" => Algorithm::Romanian,
        "russian" => Algorithm::Russian,
        "spanish" => Algorithm::Spanish,
        "swedish" => Algorithm::Swedish,
        "turkish" => Algorithm::Turkish,
        _ => return None,
    };
    Some(algorithm)
}

/// Snowball stemmer for one language
pub struct SnowballStemmer {
    inner: rust_stemmers::Stemmer,
    language: String,
}

impl std::fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("language", &self.language)
            .finish()
    }
}

impl SnowballStemmer {
    /// Create a stemmer for a snowball language name
    pub fn new(language: &str) -> Result<Self> {
        let algorithm = algorithm_for(language).ok_or_else(|| EngineError::UnsupportedLanguage {
            code: language.to_string(),
        })?;

        Ok(Self {
            inner: rust_stemmers::Stemmer::create(algorithm),
            language: language.to_ascii_lowercase(),
        })
    }

    /// Snowball language name
    pub fn language(&self) -> &str {
        &self.language
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, word: &str) -> String {
        self.inner.stem(&word.to_lowercase()).into_owned()
    }

    fn name(&self) -> &'static str {
        "snowball"
    }
}
