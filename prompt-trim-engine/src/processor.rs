//! Trimming pipeline and builder
//!
//! A [`Trimmer`] owns everything that can fail to set up (resources,
//! stemmer, validated options) so that trimming itself never fails on input.

use crate::config::TrimConfig;
use crate::error::{EngineError, Result};
use crate::filter::LinguisticFilter;
use crate::resources::LinguisticResources;
use crate::tokenizer::strip_apostrophes;
use prompt_trim_core::{find_repeated_chunks, select_non_overlapping, Chunk, DeletionPlan};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// Trimmed text plus what was removed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrimOutput {
    /// Trimmed text
    pub text: String,
    /// Chunks whose redundant occurrences were deleted
    pub removed_chunks: Vec<Chunk>,
    /// Processing statistics
    pub metadata: TrimMetadata,
}

/// Processing statistics for one trim
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrimMetadata {
    /// Input length in characters
    pub input_chars: usize,
    /// Output length in characters
    pub output_chars: usize,
    /// Repeated chunks found by the detector
    pub chunks_detected: usize,
    /// Chunks kept by overlap resolution and removed from the text
    pub chunks_removed: usize,
    /// Individual occurrences deleted
    pub occurrences_removed: usize,
    /// Tokens entering the filter
    pub tokens_in: usize,
    /// Tokens surviving the filter
    pub tokens_out: usize,
    /// Wall-clock processing time in milliseconds
    pub processing_time_ms: f64,
}

impl TrimMetadata {
    /// Fraction of characters removed, 0.0 for empty input
    pub fn reduction_ratio(&self) -> f64 {
        if self.input_chars == 0 {
            return 0.0;
        }
        1.0 - self.output_chars as f64 / self.input_chars as f64
    }
}

/// Configured trimming pipeline
///
/// Immutable once built and safe to share across threads.
pub struct Trimmer {
    config: TrimConfig,
    resources: Arc<LinguisticResources>,
    filter: LinguisticFilter,
}

impl std::fmt::Debug for Trimmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trimmer")
            .field("config", &self.config)
            .field("language", &self.resources.code())
            .finish()
    }
}

impl Trimmer {
    /// Create a trimmer with the built-in English resources
    pub fn new(config: TrimConfig) -> Result<Self> {
        Self::builder().config(config).build()
    }

    /// Create a builder
    pub fn builder() -> TrimmerBuilder {
        TrimmerBuilder::new()
    }

    /// Active configuration
    pub fn config(&self) -> &TrimConfig {
        &self.config
    }

    /// Linguistic resources in use
    pub fn resources(&self) -> &LinguisticResources {
        &self.resources
    }

    /// Trim `text`
    pub fn trim(&self, text: &str) -> Result<String> {
        Ok(self.trim_with_report(text)?.text)
    }

    /// Trim `text` and report what was removed
    pub fn trim_with_report(&self, text: &str) -> Result<TrimOutput> {
        let start = Instant::now();
        let normalized = strip_apostrophes(text);

        let mut metadata = TrimMetadata {
            input_chars: text.chars().count(),
            ..TrimMetadata::default()
        };

        let (reduced, removed_chunks) = if self.config.remove_chunks {
            let detected = find_repeated_chunks(
                &normalized,
                self.config.min_chunk_length,
                self.config.min_chunk_occurrences,
            );
            let selected = select_non_overlapping(&detected);
            let plan = DeletionPlan::new(&selected, self.config.keep_first_chunk);

            log::debug!(
                "chunks: {} detected, {} selected, {} occurrences in {} spans to delete",
                detected.len(),
                selected.len(),
                plan.occurrences(),
                plan.len()
            );
            for chunk in &selected {
                log::trace!("removing {:?} x{}", chunk.text, chunk.occurrences());
            }

            metadata.chunks_detected = detected.len();
            metadata.chunks_removed = selected.len();
            metadata.occurrences_removed = plan.occurrences();
            (plan.apply(&normalized), selected)
        } else {
            (normalized, Vec::new())
        };

        let outcome = self.filter.apply_counted(&reduced);
        log::debug!(
            "filter: {} of {} tokens kept",
            outcome.tokens_out,
            outcome.tokens_in
        );

        metadata.tokens_in = outcome.tokens_in;
        metadata.tokens_out = outcome.tokens_out;
        metadata.output_chars = outcome.text.chars().count();
        metadata.processing_time_ms = start.elapsed().as_secs_f64() * 1000.0;

        Ok(TrimOutput {
            text: outcome.text,
            removed_chunks,
            metadata,
        })
    }

    /// Detect repeated chunks, optionally in the trimmed text
    ///
    /// With `preprocess`, `text` is first run through [`Trimmer::trim`] and
    /// positions refer to the trimmed text.
    pub fn find_chunks(
        &self,
        text: &str,
        min_length: usize,
        min_occurrences: usize,
        preprocess: bool,
    ) -> Result<Vec<Chunk>> {
        if min_length == 0 {
            return Err(EngineError::InvalidOption {
                option: "min_length",
                reason: "must be at least 1".to_string(),
            });
        }
        if min_occurrences == 0 {
            return Err(EngineError::InvalidOption {
                option: "min_occurrences",
                reason: "must be at least 1".to_string(),
            });
        }

        let chunks = if preprocess {
            find_repeated_chunks(&self.trim(text)?, min_length, min_occurrences)
        } else {
            find_repeated_chunks(text, min_length, min_occurrences)
        };
        log::debug!("found {} repeated chunks", chunks.len());
        Ok(chunks)
    }

    /// Trim many texts, in parallel when the `parallel` feature is on
    ///
    /// Output order matches input order.
    pub fn trim_batch<S>(&self, texts: &[S]) -> Result<Vec<String>>
    where
        S: AsRef<str> + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            texts.par_iter().map(|t| self.trim(t.as_ref())).collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            texts.iter().map(|t| self.trim(t.as_ref())).collect()
        }
    }
}

/// Builder for [`Trimmer`]
///
/// Explicit resources take precedence over a language code; with neither,
/// the built-in English table is used.
#[derive(Debug, Default)]
pub struct TrimmerBuilder {
    config: TrimConfig,
    language: Option<String>,
    resources: Option<Arc<LinguisticResources>>,
}

impl TrimmerBuilder {
    /// Create a builder with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set all options at once
    pub fn config(mut self, config: TrimConfig) -> Self {
        self.config = config;
        self
    }

    /// Use built-in resources for a language code or name
    pub fn language<S: Into<String>>(mut self, language: S) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Use caller-provided resources
    pub fn resources(mut self, resources: impl Into<Arc<LinguisticResources>>) -> Self {
        self.resources = Some(resources.into());
        self
    }

    /// Validate the options, load resources and set up the stemmer
    pub fn build(self) -> Result<Trimmer> {
        self.config.validate()?;

        let resources = match (self.resources, self.language) {
            (Some(resources), _) => resources,
            (None, Some(language)) => Arc::new(LinguisticResources::builtin(&language)?),
            (None, None) => Arc::new(LinguisticResources::english()?),
        };

        let filter = LinguisticFilter::new(&self.config, Arc::clone(&resources))?;
        log::debug!(
            "trimmer ready: language={}, stemmer={}",
            resources.code(),
            self.config.stemmer
        );

        Ok(Trimmer {
            config: self.config,
            resources,
            filter,
        })
    }
}
