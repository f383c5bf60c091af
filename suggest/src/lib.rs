//! Phrase suggestions for players who need inspiration.
//!
//! A [`Corpus`] maps category names to candidate phrases. A [`SuggestionPool`]
//! keeps the short ones, title-cases and deduplicates them, and draws uniform
//! random samples. [`Sampler`] ties the two together and fails closed: callers
//! get an empty list (and a logged warning) instead of an error.

mod corpus;
mod pool;

pub use corpus::{Corpus, CorpusSource, SuggestError};
pub use pool::SuggestionPool;

use rand::Rng;

pub use phrasewheel_types::{DEFAULT_SUGGESTION_COUNT, MAX_PHRASE_CHARS};

/// Draws suggestion batches from one corpus source.
#[derive(Debug, Clone)]
pub struct Sampler {
    source: CorpusSource,
    max_phrase_chars: usize,
    categories: Vec<String>,
}

impl Sampler {
    #[must_use]
    pub fn new(source: CorpusSource) -> Self {
        Self {
            source,
            max_phrase_chars: MAX_PHRASE_CHARS,
            categories: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_max_phrase_chars(mut self, max_phrase_chars: usize) -> Self {
        self.max_phrase_chars = max_phrase_chars;
        self
    }

    /// Only draw from these categories. An empty list means all of them.
    #[must_use]
    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    #[must_use]
    pub fn source(&self) -> &CorpusSource {
        &self.source
    }

    /// Load the corpus and draw up to `count` suggestions, surfacing failures.
    pub fn try_sample<R: Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<String>, SuggestError> {
        let mut corpus = Corpus::load(&self.source)?;
        if !self.categories.is_empty() {
            corpus.retain_categories(&self.categories);
        }
        let pool = SuggestionPool::from_corpus(&corpus, self.max_phrase_chars);
        tracing::debug!(
            source = %self.source,
            pool = pool.len(),
            count,
            "Sampling suggestions"
        );
        Ok(pool.sample(count, rng))
    }

    /// Draw up to `count` suggestions; any failure yields an empty list.
    #[must_use]
    pub fn sample(&self, count: usize) -> Vec<String> {
        match self.try_sample(count, &mut rand::rng()) {
            Ok(suggestions) => suggestions,
            Err(err) => {
                tracing::warn!(source = %self.source, "Suggestions unavailable: {err}");
                Vec::new()
            }
        }
    }
}

/// Draw up to `count` title-cased suggestions from `source`.
///
/// Fails closed: an unreadable or malformed corpus yields an empty list.
#[must_use]
pub fn sample_suggestions(source: &CorpusSource, count: usize) -> Vec<String> {
    Sampler::new(source.clone()).sample(count)
}
