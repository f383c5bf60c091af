//! Phrase pipeline for phrasewheel cards.
//!
//! Raw phrases flow through three stages, each usable on its own:
//!
//! - **`title`**: headline-style title casing ([`normalize_title`])
//! - **`arrange`**: dedup, normalize and fit to a card ([`arrange`])
//! - **`shuffle`**: seeded, reproducible permutation ([`shuffle`])
//!
//! Everything here is pure: no IO, no logging, no state shared between calls.

pub mod arrange;
pub mod shuffle;
pub mod title;

pub use arrange::{arrange, dedup_case_insensitive};
pub use shuffle::{hash, keys, shuffle};
pub use title::normalize_title;
