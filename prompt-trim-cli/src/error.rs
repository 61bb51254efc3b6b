//! Error handling for the CLI application

use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// File not found or inaccessible
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Invalid file pattern
    #[error("Invalid file pattern: {0}")]
    InvalidPattern(String),

    /// Configuration file or option error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Resource file failed validation
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}
