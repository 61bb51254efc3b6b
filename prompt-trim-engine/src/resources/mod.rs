//! Linguistic resources
//!
//! Stopwords, negation words and punctuation for one language, bundled in an
//! immutable [`LinguisticResources`] value. Callers build it once (from the
//! embedded tables or a TOML file) and hand it to every
//! [`Trimmer`](crate::Trimmer) that needs it; nothing is cached globally.

pub(crate) mod config;

use crate::error::{EngineError, Result};
use crate::stemmer::snowball;
use config::ResourceConfig;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Embedded resource tables: (code, aliases, TOML source)
const EMBEDDED: &[(&str, &[&str], &str)] = &[(
    "en",
    &["english"],
    include_str!("../../configs/languages/english.toml"),
)];

/// Stopword, negation and punctuation sets for one language
#[derive(Debug, Clone)]
pub struct LinguisticResources {
    code: String,
    name: String,
    snowball: Option<String>,
    stopwords: HashSet<String>,
    /// Stopwords plus extras, minus negations
    excluded: HashSet<String>,
    punctuation: HashSet<String>,
}

impl LinguisticResources {
    /// Load embedded resources by language code or name
    pub fn builtin(language: &str) -> Result<Self> {
        let wanted = language.trim().to_ascii_lowercase();
        let (code, _, source) = EMBEDDED
            .iter()
            .find(|(code, aliases, _)| *code == wanted || aliases.contains(&wanted.as_str()))
            .ok_or_else(|| EngineError::UnsupportedLanguage {
                code: language.to_string(),
            })?;

        Self::from_toml_str(source, &format!("<embedded:{code}>"))
    }

    /// Built-in English resources
    pub fn english() -> Result<Self> {
        Self::builtin("en")
    }

    /// Codes of the embedded languages
    pub fn available_languages() -> Vec<&'static str> {
        EMBEDDED.iter().map(|(code, _, _)| *code).collect()
    }

    /// Load resources from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content, &path.display().to_string())
    }

    /// Parse resources from TOML text; `source_name` labels errors
    pub fn from_toml_str(content: &str, source_name: &str) -> Result<Self> {
        let config: ResourceConfig =
            toml::from_str(content).map_err(|e| EngineError::ResourceParse {
                source_name: source_name.to_string(),
                reason: e.to_string(),
            })?;

        Self::from_config(config).map_err(|reason| EngineError::ResourceParse {
            source_name: source_name.to_string(),
            reason,
        })
    }

    fn from_config(config: ResourceConfig) -> std::result::Result<Self, String> {
        config.validate()?;

        if let Some(name) = &config.metadata.snowball {
            if snowball::algorithm_for(name).is_none() {
                return Err(format!("Unknown snowball language: {name}"));
            }
        }

        let lower = |words: &[String]| -> HashSet<String> {
            words.iter().map(|w| w.to_lowercase()).collect()
        };

        let stopwords = lower(&config.stopwords.words);
        let negations = lower(&config.negations.words);
        let excluded: HashSet<String> = stopwords
            .iter()
            .chain(&lower(&config.stopwords.extra))
            .filter(|w| !negations.contains(*w))
            .cloned()
            .collect();

        if stopwords.is_empty() {
            log::warn!(
                "resources for '{}' define no stopwords; stopword removal will be a no-op",
                config.metadata.code
            );
        }

        log::debug!(
            "loaded resources '{}': {} stopwords, {} negations, {} excluded, {} punctuation symbols",
            config.metadata.code,
            stopwords.len(),
            negations.len(),
            excluded.len(),
            config.punctuation.symbols.len()
        );

        Ok(Self {
            code: config.metadata.code,
            name: config.metadata.name,
            snowball: config.metadata.snowball,
            stopwords,
            excluded,
            punctuation: config.punctuation.symbols.into_iter().collect(),
        })
    }

    /// Language code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Language display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Snowball algorithm name, if the language has one
    pub fn snowball_language(&self) -> Option<&str> {
        self.snowball.as_deref()
    }

    /// Whether a lower-cased word is removed by stopword filtering
    pub fn is_excluded(&self, lowercase_word: &str) -> bool {
        self.excluded.contains(lowercase_word)
    }

    /// Whether a lower-cased word is a stopword (before negation protection)
    pub fn is_stopword(&self, lowercase_word: &str) -> bool {
        self.stopwords.contains(lowercase_word)
    }

    /// Whether a token is exactly one punctuation symbol
    pub fn is_punctuation(&self, token: &str) -> bool {
        self.punctuation.contains(token)
    }

    /// Number of words removed by stopword filtering
    pub fn excluded_count(&self) -> usize {
        self.excluded.len()
    }
}
