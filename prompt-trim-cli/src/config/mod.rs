//! Configuration module
//!
//! Optional TOML file passed with `--config`. Every section and field has a
//! default; command-line flags override whatever the file sets.
//!
//! ```toml
//! [trim]
//! stemmer = "porter"
//! remove_spaces = false
//! min_chunk_length = 20
//!
//! [resources]
//! language = "en"          # or: file = "my-language.toml"
//!
//! [output]
//! format = "json"
//! pretty_json = true
//! ```

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use prompt_trim_engine::TrimConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Trimming options
    #[serde(default)]
    pub trim: TrimConfig,

    /// Linguistic resource selection
    #[serde(default)]
    pub resources: ResourcesConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where linguistic resources come from
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ResourcesConfig {
    /// Built-in language code or name
    pub language: Option<String>,

    /// External resources TOML file, takes precedence over `language`
    pub file: Option<PathBuf>,
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;

        config
            .trim
            .validate()
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}
