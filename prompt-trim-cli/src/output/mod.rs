//! Output formatting module

use anyhow::{Context, Result};
use prompt_trim_engine::TrimOutput;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output one trimmed document
    fn format_document(&mut self, source: &str, output: &TrimOutput) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Trimmed text only
    #[default]
    Text,
    /// JSON array with text, removed chunks and statistics
    Json,
}

impl OutputFormat {
    /// All formats with a short description
    pub const DESCRIPTIONS: [(OutputFormat, &'static str); 2] = [
        (OutputFormat::Text, "Trimmed text, one block per input"),
        (OutputFormat::Json, "JSON array with text, removed chunks and statistics"),
    ];

    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

/// Open the output destination, stdout when `path` is `None`
pub fn open_writer(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

/// Create the formatter for `format`
pub fn create_formatter<W: Write + 'static>(
    format: OutputFormat,
    writer: W,
    pretty_json: bool,
    with_headers: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, with_headers)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
    }
}
