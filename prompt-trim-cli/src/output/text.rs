//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use prompt_trim_engine::TrimOutput;
use std::io::Write;

/// Plain text formatter - outputs the trimmed text of each document
///
/// With headers enabled each document is preceded by `==> source <==`.
pub struct TextFormatter<W: Write> {
    writer: W,
    with_headers: bool,
    documents: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, with_headers: bool) -> Self {
        Self {
            writer,
            with_headers,
            documents: 0,
        }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, source: &str, output: &TrimOutput) -> Result<()> {
        if self.with_headers {
            if self.documents > 0 {
                writeln!(self.writer)?;
            }
            writeln!(self.writer, "==> {source} <==")?;
        }
        writeln!(self.writer, "{}", output.text)?;
        self.documents += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
