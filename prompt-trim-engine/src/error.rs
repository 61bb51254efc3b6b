//! Engine error types
//!
//! Every variant here is a configuration error: the engine performs no I/O
//! while trimming, so anything that can fail does so while a
//! [`Trimmer`](crate::Trimmer) or its resources are being built.

use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Stemmer name not recognised
    #[error("unsupported stemmer '{name}' (expected one of: none, porter, snowball, lancaster)")]
    UnsupportedStemmer {
        /// The rejected stemmer name
        name: String,
    },

    /// No linguistic resources for this language
    #[error("language '{code}' not supported")]
    UnsupportedLanguage {
        /// The rejected language code
        code: String,
    },

    /// An option value is out of range
    #[error("invalid option {option}: {reason}")]
    InvalidOption {
        /// Option name
        option: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// Resource file could not be parsed or failed validation
    #[error("invalid resource configuration in {source_name}: {reason}")]
    ResourceParse {
        /// File path or embedded table name
        source_name: String,
        /// Parse or validation failure
        reason: String,
    },

    /// I/O error while reading a resource file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    /// Whether this error stems from caller configuration
    ///
    /// Always true except for I/O failures while loading resource files.
    pub fn is_configuration_error(&self) -> bool {
        !matches!(self, EngineError::Io(_))
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
