//! File reading utilities

use super::InputDocument;
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read a file into an [`InputDocument`] labelled with its path
    pub fn read_document(path: &Path) -> Result<InputDocument> {
        Ok(InputDocument {
            source: path.display().to_string(),
            text: Self::read_text(path)?,
        })
    }

    /// Read all of standard input
    pub fn read_stdin() -> Result<InputDocument> {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read standard input")?;

        Ok(InputDocument {
            source: InputDocument::STDIN.to_string(),
            text,
        })
    }
}
