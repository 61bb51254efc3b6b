//! Validate command implementation

use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use prompt_trim_engine::LinguisticResources;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to linguistic resources file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub resources: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating resources configuration: {}",
            self.resources.display()
        );

        match LinguisticResources::from_file(&self.resources) {
            Ok(resources) => {
                println!("✓ Configuration is valid!");
                println!("  Language code: {}", resources.code());
                println!("  Language name: {}", resources.name());
                println!(
                    "  Snowball stemmer: {}",
                    resources.snowball_language().unwrap_or("(none)")
                );
                println!("  Words removed as stopwords: {}", resources.excluded_count());
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(CliError::ValidationFailed(e.to_string()).into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_resources(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{content}").unwrap();
        temp_file
    }

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            resources: PathBuf::from("test.toml"),
        };

        let debug_str = format!("{args:?}");
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("test.toml"));
    }

    #[test]
    fn test_validate_valid_config() {
        let file = write_resources(
            r#"
[metadata]
code = "test"
name = "Test Language"

[stopwords]
words = ["le", "la"]

[negations]
words = ["pas"]

[punctuation]
symbols = ["."]
"#,
        );

        let args = ValidateArgs {
            resources: file.path().to_path_buf(),
        };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_invalid_config() {
        let file = write_resources(
            r#"
[metadata]
code = ""
name = "Test"
"#,
        );

        let args = ValidateArgs {
            resources: file.path().to_path_buf(),
        };
        let err = args.execute().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ValidationFailed(_))
        ));
    }

    #[test]
    fn test_validate_missing_file() {
        let args = ValidateArgs {
            resources: PathBuf::from("/nonexistent/resources.toml"),
        };
        assert!(args.execute().is_err());
    }
}
