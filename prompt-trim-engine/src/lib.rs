//! Prompt trimming engine
//!
//! Combines repeated-chunk removal from `prompt-trim-core` with a
//! token-level linguistic filter:
//!
//! 1. apostrophes are stripped (`don't` becomes `dont`)
//! 2. redundant occurrences of long repeated substrings are deleted
//! 3. punctuation and stopwords are dropped, negation words always kept
//! 4. surviving tokens are optionally stemmed with case restored
//! 5. tokens are joined back, with or without spaces
//!
//! # Example
//!
//! ```rust
//! use prompt_trim_engine::{TrimConfig, Trimmer};
//!
//! let trimmer = Trimmer::new(TrimConfig::readable()).unwrap();
//! let trimmed = trimmer.trim("I do not like this at all.").unwrap();
//! assert!(trimmed.contains("not"));
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod filter;
pub mod processor;
pub mod resources;
pub mod stemmer;
pub mod tokenizer;

pub use config::{StemmerKind, TrimConfig, TrimConfigBuilder};
pub use error::{EngineError, Result};
pub use filter::{FilterOutcome, LinguisticFilter};
pub use processor::{TrimMetadata, TrimOutput, Trimmer, TrimmerBuilder};
pub use prompt_trim_core::{find_repeated_chunks, select_non_overlapping, Chunk};
pub use resources::LinguisticResources;
pub use stemmer::Stemmer;
pub use tokenizer::Tokenizer;

/// Trim `text` with the built-in English resources
///
/// Builds a one-off [`Trimmer`]; reuse a `Trimmer` when trimming many texts.
pub fn trim(text: &str, config: &TrimConfig) -> Result<String> {
    Trimmer::new(config.clone())?.trim(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_convenience() {
        assert_eq!(trim("", &TrimConfig::default()).unwrap(), "");
        assert_eq!(
            trim("the lazy dog", &TrimConfig::default()).unwrap(),
            "lazydog"
        );
    }

    #[test]
    fn test_trim_rejects_invalid_config() {
        let config = TrimConfig {
            min_chunk_length: 0,
            ..TrimConfig::default()
        };
        assert!(trim("text", &config).is_err());
    }
}
