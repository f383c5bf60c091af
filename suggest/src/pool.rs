use std::collections::HashSet;

use phrasewheel_core::normalize_title;
use rand::Rng;
use rand::seq::index;

use crate::Corpus;

/// Title-cased, deduplicated phrases short enough for a card slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionPool {
    phrases: Vec<String>,
}

impl SuggestionPool {
    /// Keep phrases of at most `max_phrase_chars` characters (measured before
    /// title casing), normalize them, and drop repeats of the normalized form.
    #[must_use]
    pub fn from_corpus(corpus: &Corpus, max_phrase_chars: usize) -> Self {
        let mut seen = HashSet::new();
        let phrases = corpus
            .phrases()
            .filter(|phrase| phrase.chars().count() <= max_phrase_chars)
            .map(normalize_title)
            .filter(|phrase| seen.insert(phrase.clone()))
            .collect();
        Self { phrases }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.phrases
    }

    /// Uniform sample of `count` distinct phrases in random order, or the whole
    /// pool (shuffled) when it is smaller.
    pub fn sample<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<String> {
        let amount = count.min(self.phrases.len());
        index::sample(rng, self.phrases.len(), amount)
            .into_iter()
            .map(|i| self.phrases[i].clone())
            .collect()
    }
}
