//! Chunks command implementation
//!
//! Lists the repeated substrings the trimmer would consider, ranked by
//! occurrence count, then length, then first position.

use super::{init_logging, TrimOptions};
use crate::config::CliConfig;
use crate::input::FileReader;
use crate::output::{open_writer, OutputFormat};
use crate::resource_source::{ResourceArgs, ResourceSource};
use anyhow::Result;
use clap::Args;
use prompt_trim_engine::{select_non_overlapping, Chunk, Trimmer};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

/// Arguments for the chunks command
#[derive(Debug, Args)]
pub struct ChunksArgs {
    /// Input file; reads stdin when omitted
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Minimum chunk length in characters
    #[arg(long, value_name = "CHARS", default_value_t = 15)]
    pub min_length: usize,

    /// Minimum number of occurrences
    #[arg(long, value_name = "COUNT", default_value_t = 2)]
    pub min_occurrences: usize,

    /// Only show the non-overlapping selection that trimming would remove
    #[arg(long)]
    pub selected: bool,

    /// Trim the text first and inspect the trimmed result
    #[arg(long)]
    pub preprocess: bool,

    /// Show at most this many chunks
    #[arg(short = 'n', long, value_name = "COUNT")]
    pub limit: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Configuration file (used with --preprocess)
    #[arg(short, long, value_name = "FILE", env = "PROMPT_TRIM_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub resources: ResourceArgs,

    #[command(flatten)]
    pub options: TrimOptions,

    /// Suppress logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Chunk data for JSON output
#[derive(Debug, Serialize)]
pub struct ChunkData<'a> {
    /// Repeated text
    pub text: &'a str,
    /// Number of occurrences
    pub occurrences: usize,
    /// Length in characters
    pub length: usize,
    /// Character offsets, ascending
    pub positions: Vec<usize>,
}

impl<'a> From<&'a Chunk> for ChunkData<'a> {
    fn from(chunk: &'a Chunk) -> Self {
        let mut positions = chunk.positions.clone();
        positions.sort_unstable();
        Self {
            text: &chunk.text,
            occurrences: chunk.occurrences(),
            length: chunk.len(),
            positions,
        }
    }
}

impl ChunksArgs {
    /// Execute the chunks command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        let text = match &self.input {
            Some(path) => FileReader::read_text(path)?,
            None => FileReader::read_stdin()?.text,
        };

        let chunks = self.find(&text)?;
        let shown = &chunks[..self.limit.unwrap_or(chunks.len()).min(chunks.len())];

        let mut writer = open_writer(None)?;
        write_chunks(&mut writer, shown, self.format)?;
        writer.flush()?;
        Ok(())
    }

    /// Detect (and optionally select) chunks in `text`
    pub fn find(&self, text: &str) -> Result<Vec<Chunk>> {
        let cli_config = CliConfig::load(self.config.as_deref())?;
        let source = ResourceSource::resolve(&self.resources, &cli_config.resources);
        let trimmer = Trimmer::builder()
            .config(self.options.apply(cli_config.trim))
            .resources(source.load()?)
            .build()?;

        let chunks =
            trimmer.find_chunks(text, self.min_length, self.min_occurrences, self.preprocess)?;

        if self.selected {
            Ok(select_non_overlapping(&chunks))
        } else {
            Ok(chunks)
        }
    }
}

/// Write `chunks` in the requested format
pub fn write_chunks<W: Write + ?Sized>(
    writer: &mut W,
    chunks: &[Chunk],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let data: Vec<ChunkData<'_>> = chunks.iter().map(ChunkData::from).collect();
            serde_json::to_writer_pretty(&mut *writer, &data)?;
            writeln!(writer)?;
        }
        OutputFormat::Text => {
            for chunk in chunks {
                let data = ChunkData::from(chunk);
                writeln!(
                    writer,
                    "{}x len={} at {:?}: {:?}",
                    data.occurrences, data.length, data.positions, data.text
                )?;
            }
            if chunks.is_empty() {
                writeln!(writer, "No repeated chunks found")?;
            }
        }
    }
    Ok(())
}
