//! Trimming configuration

use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stemming algorithm applied to surviving tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StemmerKind {
    /// Keep tokens as they are
    #[default]
    None,
    /// Porter (1980)
    Porter,
    /// Snowball, in the resource language
    Snowball,
    /// Lancaster (Paice/Husk)
    Lancaster,
}

impl StemmerKind {
    /// All selectable stemmers
    pub const ALL: [StemmerKind; 4] = [
        StemmerKind::None,
        StemmerKind::Porter,
        StemmerKind::Snowball,
        StemmerKind::Lancaster,
    ];

    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            StemmerKind::None => "none",
            StemmerKind::Porter => "porter",
            StemmerKind::Snowball => "snowball",
            StemmerKind::Lancaster => "lancaster",
        }
    }
}

impl fmt::Display for StemmerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StemmerKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(StemmerKind::None),
            "porter" => Ok(StemmerKind::Porter),
            "snowball" => Ok(StemmerKind::Snowball),
            "lancaster" => Ok(StemmerKind::Lancaster),
            _ => Err(EngineError::UnsupportedStemmer {
                name: s.to_string(),
            }),
        }
    }
}

/// Options for one trimming run
///
/// Defaults trim aggressively: every filter is on, tokens are joined without
/// spaces, and chunks of at least 15 characters repeated twice are removed
/// (keeping the first occurrence).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrimConfig {
    /// Stemming algorithm
    pub stemmer: StemmerKind,
    /// Join tokens without separators
    pub remove_spaces: bool,
    /// Drop stopwords, never negations
    pub remove_stopwords: bool,
    /// Drop punctuation tokens
    pub remove_punctuation: bool,
    /// Run the repeated-chunk pass
    pub remove_chunks: bool,
    /// Minimum chunk length in characters
    pub min_chunk_length: usize,
    /// Minimum occurrences for a chunk
    pub min_chunk_occurrences: usize,
    /// Keep the first occurrence of each removed chunk
    pub keep_first_chunk: bool,
}

impl Default for TrimConfig {
    fn default() -> Self {
        Self {
            stemmer: StemmerKind::None,
            remove_spaces: true,
            remove_stopwords: true,
            remove_punctuation: true,
            remove_chunks: true,
            min_chunk_length: 15,
            min_chunk_occurrences: 2,
            keep_first_chunk: true,
        }
    }
}

impl TrimConfig {
    /// Create a builder starting from the defaults
    pub fn builder() -> TrimConfigBuilder {
        TrimConfigBuilder::default()
    }

    /// Configuration that only removes repeated chunks and keeps spacing
    pub fn chunks_only() -> Self {
        Self {
            remove_spaces: false,
            remove_stopwords: false,
            remove_punctuation: false,
            ..Self::default()
        }
    }

    /// Configuration that keeps text readable: spaces and punctuation stay
    pub fn readable() -> Self {
        Self {
            remove_spaces: false,
            remove_punctuation: false,
            ..Self::default()
        }
    }

    /// Check option ranges
    pub fn validate(&self) -> Result<()> {
        if self.min_chunk_length == 0 {
            return Err(EngineError::InvalidOption {
                option: "min_chunk_length",
                reason: "must be at least 1".to_string(),
            });
        }

        if self.min_chunk_occurrences == 0 {
            return Err(EngineError::InvalidOption {
                option: "min_chunk_occurrences",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for [`TrimConfig`]
#[derive(Debug, Default)]
pub struct TrimConfigBuilder {
    config: TrimConfig,
}

impl TrimConfigBuilder {
    /// Set the stemmer
    pub fn stemmer(mut self, stemmer: StemmerKind) -> Self {
        self.config.stemmer = stemmer;
        self
    }

    /// Set the stemmer by name
    pub fn stemmer_name(mut self, name: &str) -> Result<Self> {
        self.config.stemmer = name.parse()?;
        Ok(self)
    }

    /// Join tokens without separators
    pub fn remove_spaces(mut self, enabled: bool) -> Self {
        self.config.remove_spaces = enabled;
        self
    }

    /// Drop stopwords
    pub fn remove_stopwords(mut self, enabled: bool) -> Self {
        self.config.remove_stopwords = enabled;
        self
    }

    /// Drop punctuation tokens
    pub fn remove_punctuation(mut self, enabled: bool) -> Self {
        self.config.remove_punctuation = enabled;
        self
    }

    /// Run the repeated-chunk pass
    pub fn remove_chunks(mut self, enabled: bool) -> Self {
        self.config.remove_chunks = enabled;
        self
    }

    /// Minimum chunk length in characters
    pub fn min_chunk_length(mut self, length: usize) -> Self {
        self.config.min_chunk_length = length;
        self
    }

    /// Minimum occurrences for a chunk
    pub fn min_chunk_occurrences(mut self, occurrences: usize) -> Self {
        self.config.min_chunk_occurrences = occurrences;
        self
    }

    /// Keep the first occurrence of each removed chunk
    pub fn keep_first_chunk(mut self, keep: bool) -> Self {
        self.config.keep_first_chunk = keep;
        self
    }

    /// Validate and build
    pub fn build(self) -> Result<TrimConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
