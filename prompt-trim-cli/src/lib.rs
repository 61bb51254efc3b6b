//! prompt-trim CLI library
//!
//! Command-line interface for trimming prompts: repeated-chunk removal
//! and linguistic filtering of text files or standard input.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;
pub mod resource_source;

pub use error::CliError;
