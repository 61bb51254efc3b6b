//! Integration tests for the prompt-trim CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn prompt_trim() -> Command {
    let mut cmd = Command::cargo_bin("prompt-trim").unwrap();
    cmd.env_remove("PROMPT_TRIM_CONFIG");
    cmd
}

#[test]
fn test_trim_file_keeps_negations() {
    prompt_trim()
        .args(["trim", "--keep-spaces", "-i"])
        .arg(fixture_path("negation.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("not think good idea"));
}

#[test]
fn test_trim_stdin() {
    prompt_trim()
        .args(["trim", "--keep-spaces"])
        .write_stdin("Hello, world!")
        .assert()
        .success()
        .stdout("Hello world\n");
}

#[test]
fn test_trim_removes_spaces_by_default() {
    prompt_trim()
        .arg("trim")
        .write_stdin("the lazy dog.")
        .assert()
        .success()
        .stdout("lazydog\n");
}

#[test]
fn test_json_output_reports_chunks() {
    let output = prompt_trim()
        .args(["trim", "--keep-spaces", "--min-chunk-length", "10", "-f", "json", "-i"])
        .arg(fixture_path("repeated.txt"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let doc = &value[0];
    assert!(doc["source"].as_str().unwrap().ends_with("repeated.txt"));
    assert_eq!(
        doc["removed_chunks"][0]["text"],
        "The quick brown fox jumps over "
    );
    assert!(doc["metadata"]["output_chars"].as_u64().unwrap() > 0);
}

#[test]
fn test_report_goes_to_stderr() {
    prompt_trim()
        .args(["trim", "--report", "-i"])
        .arg(fixture_path("repeated.txt"))
        .assert()
        .success()
        .stderr(predicate::str::contains("chunk(s)"))
        .stdout(predicate::str::contains("chunk(s)").not());
}

#[test]
fn test_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("trimmed.txt");

    prompt_trim()
        .args(["trim", "--keep-spaces", "-i"])
        .arg(fixture_path("negation.txt"))
        .arg("-o")
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = fs::read_to_string(&output_path).unwrap();
    assert!(content.contains("not think"));
}

#[test]
fn test_config_file_sets_format_and_stemmer() {
    let output = prompt_trim()
        .args(["trim", "-c"])
        .arg(fixture_path("trim_config.toml"))
        .write_stdin("Running dogs")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["text"], "Run dog");
}

#[test]
fn test_flags_override_config_file() {
    prompt_trim()
        .args(["trim", "-f", "text", "--stemmer", "none", "-c"])
        .arg(fixture_path("trim_config.toml"))
        .write_stdin("Running dogs")
        .assert()
        .success()
        .stdout("Running dogs\n");
}

#[test]
fn test_external_resources() {
    prompt_trim()
        .args(["trim", "--keep-spaces", "-r"])
        .arg(fixture_path("custom_resources.toml"))
        .write_stdin("Le chat est sur la table.")
        .assert()
        .success()
        .stdout("chat table\n");
}

#[test]
fn test_unknown_stemmer() {
    prompt_trim()
        .args(["trim", "--stemmer", "krovetz"])
        .write_stdin("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("krovetz"));
}

#[test]
fn test_unknown_language() {
    prompt_trim()
        .args(["trim", "--language", "tlh"])
        .write_stdin("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_missing_input_file() {
    prompt_trim()
        .args(["trim", "-i", "tests/fixtures/does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.txt"));
}

#[test]
fn test_chunks_command() {
    prompt_trim()
        .args(["chunks", "--min-length", "10", "--selected", "-i"])
        .arg(fixture_path("repeated.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "2x len=31 at [0, 45]: \"The quick brown fox jumps over \"",
        ));
}

#[test]
fn test_chunks_none_found() {
    prompt_trim()
        .arg("chunks")
        .write_stdin("nothing repeats here")
        .assert()
        .success()
        .stdout("No repeated chunks found\n");
}

#[test]
fn test_validate_resources() {
    prompt_trim()
        .args(["validate", "-r"])
        .arg(fixture_path("custom_resources.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("Language code: fr"));

    prompt_trim()
        .args(["validate", "-r"])
        .arg(fixture_path("invalid_resources.toml"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("Configuration is invalid"));
}

#[test]
fn test_generate_then_validate() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("custom.toml");

    prompt_trim()
        .args(["generate-config", "--language-code", "xx", "--output"])
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Resources template generated successfully",
        ));

    prompt_trim()
        .args(["validate", "--resources"])
        .arg(&output_path)
        .assert()
        .success();
}

#[test]
fn test_list_commands() {
    prompt_trim()
        .args(["list", "stemmers"])
        .assert()
        .success()
        .stdout(predicate::str::contains("porter"))
        .stdout(predicate::str::contains("lancaster"));

    prompt_trim()
        .args(["list", "languages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("English"));

    prompt_trim()
        .args(["list", "formats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("json"));
}
