//! Turning raw phrases into the slot sequence for one card.

use std::collections::HashSet;

use phrasewheel_types::{Capacity, Seed, SlotSequence};

use crate::shuffle::shuffle;
use crate::title::normalize_title;

/// Build the exact-length slot sequence for a card.
///
/// Steps, in order:
/// 1. drop case-insensitive duplicates of the raw text (first occurrence wins)
/// 2. title-case every kept phrase
/// 3. truncate to `capacity.total_slots()`, or pad with `"???"`
/// 4. if `seed` is given, apply the seeded [`shuffle`]
///
/// The result always holds `2 x capacity` phrases; the front face is the first half.
#[must_use]
pub fn arrange<S: AsRef<str>>(
    raw_phrases: &[S],
    capacity: Capacity,
    seed: Option<Seed>,
) -> SlotSequence {
    let normalized = dedup_case_insensitive(raw_phrases)
        .into_iter()
        .map(normalize_title)
        .collect();
    let fitted = SlotSequence::fit(normalized, capacity);

    match seed {
        Some(seed) => fitted.permute_with(seed, |slots| shuffle(slots, seed)),
        None => fitted,
    }
}

/// Keep the first occurrence of every phrase, comparing raw text case-insensitively.
#[must_use]
pub fn dedup_case_insensitive<S: AsRef<str>>(raw_phrases: &[S]) -> Vec<&str> {
    let mut seen = HashSet::with_capacity(raw_phrases.len());
    raw_phrases
        .iter()
        .map(|phrase| phrase.as_ref())
        .filter(|phrase| seen.insert(phrase.to_lowercase()))
        .collect()
}
