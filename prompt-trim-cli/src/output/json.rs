//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use prompt_trim_engine::TrimOutput;
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs documents as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    documents: Vec<DocumentData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct DocumentData {
    /// File path or `<stdin>`
    pub source: String,
    /// Trimmed text, removed chunks and statistics
    #[serde(flatten)]
    pub output: TrimOutput,
    /// Fraction of characters removed
    pub reduction_ratio: f64,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            documents: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, source: &str, output: &TrimOutput) -> Result<()> {
        self.documents.push(DocumentData {
            source: source.to_string(),
            output: output.clone(),
            reduction_ratio: output.metadata.reduction_ratio(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
