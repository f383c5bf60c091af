//! Seeded, reproducible permutation.
//!
//! Each element draws a sort key from an integer-hash generator, in original index
//! order, and the elements are then stably sorted by ascending key. The generator
//! has no hidden state: the current state is a plain `i32` and [`hash`] maps it to
//! the next one.
//!
//! The keys must match previously published cards bit for bit, so the hash keeps
//! the published arithmetic exactly, including how the multiply rounds (see [`hash`]).

use std::iter;

use phrasewheel_types::Seed;

/// Odd multiplier of the mixing step.
const MULTIPLIER: i64 = 0x27d4_eb2d;

/// Advance the generator: mix a 32-bit state into the next one.
///
/// Shifts are arithmetic, and the shift-add is wrapping 32-bit math. The multiply
/// is different: the exact product is rounded to the nearest `f64` and only then
/// reduced modulo 2^32. Products above 2^53 lose their low bits to that rounding,
/// and the published layouts depend on it, so a plain `wrapping_mul` would
/// produce different cards.
#[must_use]
pub fn hash(state: i32) -> i32 {
    let mut a = state ^ 61 ^ (state >> 16);
    a = a.wrapping_add(a << 3);
    a ^= a >> 4;
    // |a * MULTIPLIER| < 2^61, so the i64 product is exact and the f64 is integral.
    a = ((i64::from(a) * MULTIPLIER) as f64) as i64 as i32;
    a ^= a >> 15;
    a
}

/// Endless key stream for `seed`: `hash(seed)`, `hash(hash(seed))`, ...
pub fn keys(seed: Seed) -> impl Iterator<Item = i32> {
    iter::successors(Some(hash(seed.get())), |&state| Some(hash(state)))
}

/// Reorder `items` deterministically for `seed`.
///
/// The result is always a permutation of the input; equal seeds give equal orders.
#[must_use]
pub fn shuffle<T>(items: Vec<T>, seed: Seed) -> Vec<T> {
    let mut keyed: Vec<(i32, T)> = keys(seed).zip(items).collect();
    // Stable: elements that draw equal keys keep their input order.
    keyed.sort_by_key(|(key, _)| *key);
    keyed.into_iter().map(|(_, item)| item).collect()
}
