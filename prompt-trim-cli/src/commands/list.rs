//! List command implementation

use super::ListCommands;
use crate::output::OutputFormat;
use anyhow::Result;
use prompt_trim_engine::{LinguisticResources, StemmerKind};

/// Execute a list subcommand
pub fn execute(subcommand: ListCommands) -> Result<()> {
    for line in lines(subcommand)? {
        println!("{line}");
    }
    Ok(())
}

/// Lines printed for a list subcommand
pub fn lines(subcommand: ListCommands) -> Result<Vec<String>> {
    let lines = match subcommand {
        ListCommands::Stemmers => {
            let mut lines = vec!["Available stemmers:".to_string()];
            lines.extend(
                StemmerKind::ALL
                    .iter()
                    .map(|kind| format!("  {:<10} - {}", kind.as_str(), describe_stemmer(*kind))),
            );
            lines
        }
        ListCommands::Languages => {
            let mut lines = vec!["Built-in languages:".to_string()];
            for code in LinguisticResources::available_languages() {
                let resources = LinguisticResources::builtin(code)?;
                lines.push(format!("  {:<10} - {}", code, resources.name()));
            }
            lines
        }
        ListCommands::Formats => {
            let mut lines = vec!["Available output formats:".to_string()];
            lines.extend(
                OutputFormat::DESCRIPTIONS
                    .iter()
                    .map(|(format, description)| format!("  {:<10} - {}", format.as_str(), description)),
            );
            lines
        }
    };
    Ok(lines)
}

fn describe_stemmer(kind: StemmerKind) -> &'static str {
    match kind {
        StemmerKind::None => "Keep words as they are (default)",
        StemmerKind::Porter => "Porter (1980), moderate English suffix stripping",
        StemmerKind::Snowball => "Snowball, in the resource language",
        StemmerKind::Lancaster => "Lancaster (Paice/Husk), aggressive English stemming",
    }
}
