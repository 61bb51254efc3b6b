//! End-to-end trimming behaviour

use prompt_trim_engine::{
    trim, EngineError, LinguisticResources, StemmerKind, TrimConfig, Trimmer,
};

const FOX: &str = "The quick brown fox jumps over the lazy dog. \
                   The quick brown fox jumps over another lazy dog.";

fn readable_no_filters() -> TrimConfig {
    TrimConfig::builder()
        .remove_stopwords(false)
        .remove_punctuation(false)
        .remove_spaces(false)
        .build()
        .expect("valid config")
}

#[test]
fn test_empty_input() {
    assert_eq!(trim("", &TrimConfig::default()).unwrap(), "");

    let trimmer = Trimmer::new(TrimConfig::default()).unwrap();
    let output = trimmer.trim_with_report("").unwrap();
    assert_eq!(output.text, "");
    assert_eq!(output.metadata.input_chars, 0);
    assert!(output.removed_chunks.is_empty());
}

#[test]
fn test_minimal_input_unchanged() {
    assert_eq!(trim("a b c", &readable_no_filters()).unwrap(), "a b c");
}

#[test]
fn test_quick_brown_fox() {
    let config = TrimConfig::builder()
        .min_chunk_length(10)
        .min_chunk_occurrences(2)
        .keep_first_chunk(true)
        .remove_spaces(false)
        .build()
        .unwrap();
    let trimmer = Trimmer::new(config).unwrap();
    let output = trimmer.trim_with_report(FOX).unwrap();

    let top = &output.removed_chunks[0];
    assert_eq!(top.text, "The quick brown fox jumps over ");
    assert_eq!(top.occurrences(), 2);
    assert_eq!(top.first_position(), Some(0));

    let words: Vec<&str> = output.text.split(' ').collect();
    assert!(words.contains(&"lazy"));
    assert!(words.contains(&"dog"));
    assert!(!words.iter().any(|w| w.eq_ignore_ascii_case("the")));
    assert_eq!(words.iter().filter(|w| **w == "quick").count(), 1);
}

#[test]
fn test_chunk_removal_replaces_with_space() {
    let config = TrimConfig {
        min_chunk_length: 10,
        ..readable_no_filters()
    };
    let trimmer = Trimmer::new(config).unwrap();

    // Whitespace is collapsed afterwards, so the replacement space merges
    assert_eq!(
        trimmer.trim("one two three four|one two three four").unwrap(),
        "one two three four |"
    );
}

#[test]
fn test_keep_first_disabled_removes_every_occurrence() {
    let config = TrimConfig {
        min_chunk_length: 10,
        keep_first_chunk: false,
        ..readable_no_filters()
    };
    let trimmer = Trimmer::new(config).unwrap();
    assert_eq!(
        trimmer.trim("repeated words here|repeated words here").unwrap(),
        "|"
    );
}

#[test]
fn test_negation_preserved() {
    for config in [TrimConfig::default(), TrimConfig::readable()] {
        let out = trim("I do not like this", &config).unwrap();
        assert!(out.contains("not"), "{out:?}");
        assert!(!out.contains("do"), "{out:?}");
    }
}

#[test]
fn test_contractions_become_negations() {
    let out = trim("I don't think it won't work", &TrimConfig::readable()).unwrap();
    assert_eq!(out, "dont think wont work");
}

#[test]
fn test_stemming_with_case_restoration() {
    for kind in [StemmerKind::Porter, StemmerKind::Snowball, StemmerKind::Lancaster] {
        let config = TrimConfig {
            stemmer: kind,
            ..TrimConfig::readable()
        };
        assert_eq!(trim("Running", &config).unwrap(), "Run", "{kind}");
        assert_eq!(trim("RUNNING", &config).unwrap(), "RUN", "{kind}");
    }
}

#[test]
fn test_unsupported_stemmer_is_config_error() {
    let err = TrimConfig::builder().stemmer_name("krovetz").unwrap_err();
    assert!(matches!(err, EngineError::UnsupportedStemmer { .. }));
    assert!(err.is_configuration_error());
}

#[test]
fn test_unsupported_language_is_config_error() {
    let err = Trimmer::builder().language("tlh").build().unwrap_err();
    assert!(matches!(err, EngineError::UnsupportedLanguage { .. }));
}

#[test]
fn test_invalid_thresholds_rejected_before_processing() {
    let err = Trimmer::new(TrimConfig {
        min_chunk_length: 0,
        ..TrimConfig::default()
    })
    .unwrap_err();
    assert!(matches!(
        err,
        EngineError::InvalidOption {
            option: "min_chunk_length",
            ..
        }
    ));
}

#[test]
fn test_custom_resources_with_snowball() {
    let resources = LinguisticResources::from_toml_str(
        r#"
[metadata]
code = "de"
name = "German"
snowball = "german"

[stopwords]
words = ["der", "die", "das", "und"]

[punctuation]
symbols = [".", ","]
"#,
        "german.toml",
    )
    .unwrap();

    let trimmer = Trimmer::builder()
        .resources(resources)
        .config(TrimConfig {
            stemmer: StemmerKind::Snowball,
            ..TrimConfig::readable()
        })
        .build()
        .unwrap();

    let out = trimmer.trim("Der Hund und die Katzen.").unwrap();
    let words: Vec<&str> = out.split(' ').collect();
    assert!(!words.contains(&"Der"));
    assert!(!words.contains(&"und"));
    assert_eq!(words[0], "Hund");
}

#[test]
fn test_shared_across_threads() {
    let trimmer = std::sync::Arc::new(Trimmer::new(TrimConfig::readable()).unwrap());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let trimmer = std::sync::Arc::clone(&trimmer);
            std::thread::spawn(move || trimmer.trim(&format!("thread number {i} is here")))
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let out = handle.join().unwrap().unwrap();
        assert_eq!(out, format!("thread number {i}"));
    }
}

#[test]
fn test_batch_matches_single() {
    let trimmer = Trimmer::new(TrimConfig::default()).unwrap();
    let texts = [FOX, "I do not like this", "", "Hello, world!"];

    let batch = trimmer.trim_batch(&texts).unwrap();
    let single: Vec<String> = texts.iter().map(|t| trimmer.trim(t).unwrap()).collect();
    assert_eq!(batch, single);
}

#[test]
fn test_separator_run_collapses_to_one_copy() {
    let trimmer = Trimmer::new(TrimConfig::chunks_only()).unwrap();
    let text = format!("Intro\n{}\nBody", "=".repeat(40));
    let output = trimmer.trim_with_report(&text).unwrap();

    assert_eq!(output.removed_chunks.len(), 1);
    assert_eq!(output.removed_chunks[0].text, "=".repeat(15));
    assert_eq!(output.metadata.occurrences_removed, 25);
    // Tokenizing spaces the kept copy out; only its 15 characters remain
    assert_eq!(output.text.chars().filter(|&c| c == '=').count(), 15);
    assert!(output.text.starts_with("Intro"));
    assert!(output.text.ends_with("Body"));
}
