//! Trim command implementation

use super::{init_logging, TrimOptions};
use crate::config::CliConfig;
use crate::input::{resolve_patterns, FileReader, InputDocument};
use crate::output::{create_formatter, open_writer, OutputFormat};
use crate::progress::ProgressReporter;
use crate::resource_source::{ResourceArgs, ResourceSource};
use anyhow::Result;
use clap::Args;
use prompt_trim_engine::{TrimOutput, Trimmer};
use rayon::prelude::*;
use std::path::PathBuf;

/// Arguments for the trim command
#[derive(Debug, Args)]
pub struct TrimArgs {
    /// Input files or patterns (supports glob); reads stdin when omitted
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "PROMPT_TRIM_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub resources: ResourceArgs,

    #[command(flatten)]
    pub options: TrimOptions,

    /// Print size and chunk statistics to stderr
    #[arg(long)]
    pub report: bool,

    /// Suppress progress output and logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl TrimArgs {
    /// Execute the trim command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);
        log::debug!("Arguments: {self:?}");

        let cli_config = CliConfig::load(self.config.as_deref())?;
        let trimmer = self.build_trimmer(&cli_config)?;
        let format = self.format.unwrap_or(cli_config.output.format);

        let results = self.trim_inputs(&trimmer)?;

        let writer = open_writer(self.output.as_deref())?;
        let mut formatter = create_formatter(
            format,
            writer,
            cli_config.output.pretty_json,
            results.len() > 1,
        );
        for (source, output) in &results {
            formatter.format_document(source, output)?;
            if self.report {
                print_report(source, output);
            }
        }
        formatter.finish()?;

        log::info!("Trimmed {} document(s)", results.len());
        Ok(())
    }

    /// Build the trimmer from config file, flags and resources
    pub fn build_trimmer(&self, cli_config: &CliConfig) -> Result<Trimmer> {
        let trim_config = self.options.apply(cli_config.trim.clone());
        let source = ResourceSource::resolve(&self.resources, &cli_config.resources);

        let trimmer = Trimmer::builder()
            .config(trim_config)
            .resources(source.load()?)
            .build()?;

        log::debug!("Trimmer: {trimmer:?}");
        Ok(trimmer)
    }

    fn trim_inputs(&self, trimmer: &Trimmer) -> Result<Vec<(String, TrimOutput)>> {
        if self.input.is_empty() {
            let doc = FileReader::read_stdin()?;
            let output = trimmer.trim_with_report(&doc.text)?;
            return Ok(vec![(doc.source, output)]);
        }

        let files = resolve_patterns(&self.input)?;
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let results = files
            .par_iter()
            .map(|path| -> Result<(String, TrimOutput)> {
                let InputDocument { source, text } = FileReader::read_document(path)?;
                let output = trimmer.trim_with_report(&text)?;
                progress.file_completed(&source);
                Ok((source, output))
            })
            .collect::<Result<Vec<_>>>();

        progress.finish();
        results
    }
}

fn print_report(source: &str, output: &TrimOutput) {
    let meta = &output.metadata;
    eprintln!(
        "{source}: {} -> {} chars ({:.1}% removed), {} chunk(s) / {} occurrence(s) removed, {} -> {} tokens, {:.2} ms",
        meta.input_chars,
        meta.output_chars,
        meta.reduction_ratio() * 100.0,
        meta.chunks_removed,
        meta.occurrences_removed,
        meta.tokens_in,
        meta.tokens_out,
        meta.processing_time_ms
    );
}
