//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Language code for the new resources file
    #[arg(short = 'l', long, value_name = "CODE", required = true)]
    pub language_code: String,

    /// Snowball algorithm name for the language (e.g. french)
    #[arg(long, value_name = "NAME")]
    pub snowball: Option<String>,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating resources template...");
        println!("  Language code: {}", self.language_code);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Resources template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the file to list your language's stopwords and negations");
        println!("2. Validate your resources:");
        println!("   prompt-trim validate --resources {}", self.output.display());
        println!("3. Use them for trimming:");
        println!(
            "   prompt-trim trim -i input.txt --resources {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template resources content
    fn generate_template(&self) -> String {
        let snowball = match &self.snowball {
            Some(name) => format!("snowball = \"{name}\""),
            None => "# snowball = \"english\"  # enables --stemmer snowball".to_string(),
        };

        format!(
            r#"# Linguistic resources for {code}

[metadata]
code = "{code}"
name = "Custom Language"
{snowball}

# Words dropped when stopword removal is on (compared lower-cased)
[stopwords]
words = ["the", "a", "is", "are", "was"]

# Additional words dropped alongside stopwords, such as articles and prepositions
extra = ["in", "on", "at"]

# Never dropped, even when listed as stopwords
[negations]
words = ["no", "not", "never"]

# Tokens dropped when punctuation removal is on (exact match)
[punctuation]
symbols = [".", ",", "!", "?", ";", ":", "-", "'", "\""]
"#,
            code = self.language_code,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prompt_trim_engine::LinguisticResources;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_args_debug() {
        let args = GenerateConfigArgs {
            language_code: "fr".to_string(),
            snowball: None,
            output: PathBuf::from("french.toml"),
        };

        let debug_str = format!("{args:?}");
        assert!(debug_str.contains("GenerateConfigArgs"));
        assert!(debug_str.contains("fr"));
        assert!(debug_str.contains("french.toml"));
    }

    #[test]
    fn test_generate_template() {
        let args = GenerateConfigArgs {
            language_code: "test".to_string(),
            snowball: None,
            output: PathBuf::from("test.toml"),
        };

        let template = args.generate_template();
        assert!(template.contains("code = \"test\""));
        assert!(template.contains("[metadata]"));
        assert!(template.contains("[stopwords]"));
        assert!(template.contains("[negations]"));
        assert!(template.contains("[punctuation]"));
    }

    #[test]
    fn test_generated_file_loads() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("french.toml");

        let args = GenerateConfigArgs {
            language_code: "fr".to_string(),
            snowball: Some("french".to_string()),
            output: output_path.clone(),
        };
        args.execute().unwrap();

        let resources = LinguisticResources::from_file(&output_path).unwrap();
        assert_eq!(resources.code(), "fr");
        assert_eq!(resources.snowball_language(), Some("french"));
        assert!(resources.is_excluded("the"));
        assert!(!resources.is_excluded("not"));
        assert!(resources.is_punctuation("\""));
    }
}
