//! CLI command implementations

use clap::{Args, Subcommand};
use prompt_trim_engine::{StemmerKind, TrimConfig};

pub mod chunks;
pub mod generate_config;
pub mod list;
pub mod trim;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Trim text files or standard input
    Trim(trim::TrimArgs),

    /// Inspect repeated chunks in a text
    Chunks(chunks::ChunksArgs),

    /// Validate a linguistic resources file
    Validate(validate::ValidateArgs),

    /// Generate a linguistic resources template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List available stemmers
    Stemmers,

    /// List built-in languages
    Languages,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Trim(args) => args.execute(),
            Commands::Chunks(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => list::execute(*subcommand),
        }
    }
}

/// Trimming options; each flag overrides the config file
#[derive(Debug, Clone, Default, Args)]
pub struct TrimOptions {
    /// Stemmer: none, porter, snowball or lancaster
    #[arg(short, long, value_name = "NAME")]
    pub stemmer: Option<StemmerKind>,

    /// Join tokens with spaces instead of removing them
    #[arg(long)]
    pub keep_spaces: bool,

    /// Keep stopwords
    #[arg(long)]
    pub keep_stopwords: bool,

    /// Keep punctuation tokens
    #[arg(long)]
    pub keep_punctuation: bool,

    /// Skip repeated-chunk removal
    #[arg(long)]
    pub no_chunks: bool,

    /// Minimum repeated chunk length in characters
    #[arg(long, value_name = "CHARS")]
    pub min_chunk_length: Option<usize>,

    /// Minimum number of occurrences for a repeated chunk
    #[arg(long, value_name = "COUNT")]
    pub min_chunk_occurrences: Option<usize>,

    /// Remove every occurrence of a repeated chunk, including the first
    #[arg(long)]
    pub drop_first_chunk: bool,
}

impl TrimOptions {
    /// Apply the flags on top of `base`
    pub fn apply(&self, mut base: TrimConfig) -> TrimConfig {
        if let Some(stemmer) = self.stemmer {
            base.stemmer = stemmer;
        }
        if self.keep_spaces {
            base.remove_spaces = false;
        }
        if self.keep_stopwords {
            base.remove_stopwords = false;
        }
        if self.keep_punctuation {
            base.remove_punctuation = false;
        }
        if self.no_chunks {
            base.remove_chunks = false;
        }
        if let Some(length) = self.min_chunk_length {
            base.min_chunk_length = length;
        }
        if let Some(occurrences) = self.min_chunk_occurrences {
            base.min_chunk_occurrences = occurrences;
        }
        if self.drop_first_chunk {
            base.keep_first_chunk = false;
        }
        base
    }
}

/// Initialize logging based on verbosity level
///
/// Quiet mode disables logging entirely. Safe to call more than once.
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
