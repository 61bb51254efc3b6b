//! Stemming algorithms
//!
//! Every stemmer lower-cases its input and returns a lower-case stem; case
//! restoration happens in the filter.

pub mod lancaster;
pub mod porter;
pub mod snowball;

use crate::config::StemmerKind;
use crate::error::{EngineError, Result};
use crate::resources::LinguisticResources;

pub use lancaster::LancasterStemmer;
pub use porter::PorterStemmer;
pub use snowball::SnowballStemmer;

/// Reduces a word to its stem
pub trait Stemmer: Send + Sync {
    /// Stem one word
    fn stem(&self, word: &str) -> String;

    /// Algorithm name for diagnostics
    fn name(&self) -> &'static str;
}

/// Instantiate the stemmer selected by `kind`
///
/// Returns `Ok(None)` for [`StemmerKind::None`]. Fails when the snowball
/// stemmer is requested for a language without a snowball algorithm.
pub fn build_stemmer(
    kind: StemmerKind,
    resources: &LinguisticResources,
) -> Result<Option<Box<dyn Stemmer>>> {
    let stemmer: Box<dyn Stemmer> = match kind {
        StemmerKind::None => return Ok(None),
        StemmerKind::Porter => Box::new(PorterStemmer::new()),
        StemmerKind::Lancaster => Box::new(LancasterStemmer::new()),
        StemmerKind::Snowball => {
            let language = resources.snowball_language().ok_or_else(|| {
                EngineError::UnsupportedLanguage {
                    code: format!("{} (no snowball stemmer)", resources.code()),
                }
            })?;
            Box::new(SnowballStemmer::new(language)?)
        }
    };

    log::debug!("using {} stemmer", stemmer.name());
    Ok(Some(stemmer))
}
