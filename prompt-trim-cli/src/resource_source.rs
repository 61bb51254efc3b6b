//! Linguistic resource selection for the CLI

use crate::config::ResourcesConfig;
use anyhow::{Context, Result};
use clap::Args;
use prompt_trim_engine::LinguisticResources;
use std::path::PathBuf;

/// Command-line options selecting linguistic resources
#[derive(Debug, Clone, Default, Args)]
pub struct ResourceArgs {
    /// Built-in language code or name
    #[arg(short, long, value_name = "CODE")]
    pub language: Option<String>,

    /// External resources TOML file (stopwords, negations, punctuation)
    #[arg(short, long, value_name = "FILE", conflicts_with = "language")]
    pub resources: Option<PathBuf>,
}

/// Source of linguistic resources
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceSource {
    /// Embedded table
    BuiltIn(String),
    /// External configuration file
    External(PathBuf),
}

impl Default for ResourceSource {
    fn default() -> Self {
        ResourceSource::BuiltIn("en".to_string())
    }
}

impl ResourceSource {
    /// Pick the source: flags first, then the config file, then English
    ///
    /// A file always wins over a language at the same level.
    pub fn resolve(args: &ResourceArgs, config: &ResourcesConfig) -> Self {
        if let Some(path) = &args.resources {
            return ResourceSource::External(path.clone());
        }
        if let Some(language) = &args.language {
            return ResourceSource::BuiltIn(language.clone());
        }
        if let Some(path) = &config.file {
            return ResourceSource::External(path.clone());
        }
        if let Some(language) = &config.language {
            return ResourceSource::BuiltIn(language.clone());
        }
        ResourceSource::default()
    }

    /// Load the resources
    pub fn load(&self) -> Result<LinguisticResources> {
        let resources = match self {
            ResourceSource::BuiltIn(language) => LinguisticResources::builtin(language)?,
            ResourceSource::External(path) => LinguisticResources::from_file(path)
                .with_context(|| format!("Failed to load resources from {}", path.display()))?,
        };

        log::info!("Using resources: {}", self.display_name());
        Ok(resources)
    }

    /// Get the display name for the resource source
    pub fn display_name(&self) -> String {
        match self {
            ResourceSource::BuiltIn(language) => format!("Built-in: {language}"),
            ResourceSource::External(path) => format!("External: {}", path.display()),
        }
    }
}
