//! prompt-trim command-line entry point

use clap::Parser;
use prompt_trim_cli::commands::Commands;
use std::process::ExitCode;

/// Shrink prompts by removing repeated text, stopwords and punctuation
#[derive(Debug, Parser)]
#[command(name = "prompt-trim", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
