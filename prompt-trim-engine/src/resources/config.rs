//! Resource file schema
//!
//! TOML layout for linguistic resources: stopwords, negation words and
//! punctuation symbols for one language.

use serde::{Deserialize, Serialize};

/// Root resource configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub stopwords: Stopwords,
    #[serde(default)]
    pub negations: Negations,
    #[serde(default)]
    pub punctuation: Punctuation,
}

/// Language metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
    /// Snowball algorithm name, if one exists for this language
    #[serde(default)]
    pub snowball: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Stopwords {
    #[serde(default)]
    pub words: Vec<String>,
    /// Extra words removed alongside stopwords (articles, prepositions)
    #[serde(default)]
    pub extra: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Negations {
    #[serde(default)]
    pub words: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Punctuation {
    #[serde(default)]
    pub symbols: Vec<String>,
}

impl ResourceConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.trim().is_empty() {
            return Err("Language code cannot be empty".to_string());
        }

        if let Some(word) = self
            .stopwords
            .words
            .iter()
            .chain(&self.stopwords.extra)
            .chain(&self.negations.words)
            .find(|w| w.trim().is_empty() || w.chars().any(char::is_whitespace))
        {
            return Err(format!("Invalid word entry {word:?}: words must be non-empty and contain no whitespace"));
        }

        if let Some(symbol) = self.punctuation.symbols.iter().find(|s| s.is_empty()) {
            return Err(format!("Invalid punctuation symbol {symbol:?}"));
        }

        Ok(())
    }
}
