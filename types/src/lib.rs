//! Core domain types for phrasewheel.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod layout;
mod text;

pub use layout::{CardFace, CardLayout, FaceSide, Slot, SlotSequence, slot_angle};
pub use text::parse_phrase_list;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;
use thiserror::Error;

/// Phrase used verbatim for every slot the caller did not fill.
pub const PLACEHOLDER: &str = "???";

/// Number of faces on a printed card.
pub const FACES_PER_CARD: usize = 2;

/// Suggestions per request; enough to fill both faces of a default card.
pub const DEFAULT_SUGGESTION_COUNT: usize = 144;

/// Longest suggestion (in characters) that still fits a card slot.
pub const MAX_PHRASE_CHARS: usize = 20;

// ============================================================================
// Capacity
// ============================================================================

/// Number of phrase slots on one card face.
///
/// A capacity is always in `1..=MAX_PER_FACE`: a zero-slot card cannot be
/// requested, and neither can one too large to allocate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Capacity(NonZeroUsize);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CapacityError {
    #[error("card capacity must be greater than zero")]
    Zero,
    #[error(
        "card capacity {requested} exceeds the maximum of {} slots per face",
        Capacity::MAX_PER_FACE
    )]
    TooLarge { requested: usize },
}

impl Capacity {
    /// Reference layout: 72 slots per face, 144 phrases per card.
    pub const DEFAULT: Capacity = Capacity::from_static(72);

    /// Largest accepted capacity; far beyond anything printable on one card.
    pub const MAX_PER_FACE: usize = 4096;

    pub fn new(slots_per_face: usize) -> Result<Self, CapacityError> {
        if slots_per_face > Self::MAX_PER_FACE {
            return Err(CapacityError::TooLarge {
                requested: slots_per_face,
            });
        }
        NonZeroUsize::new(slots_per_face)
            .map(Self)
            .ok_or(CapacityError::Zero)
    }

    /// Compile-time checked capacity for constants.
    #[must_use]
    pub const fn from_static(slots_per_face: usize) -> Self {
        assert!(
            slots_per_face <= Self::MAX_PER_FACE,
            "Capacity exceeds MAX_PER_FACE"
        );
        match NonZeroUsize::new(slots_per_face) {
            Some(value) => Self(value),
            None => panic!("Capacity must be greater than zero"),
        }
    }

    /// Slots on a single face.
    #[must_use]
    pub const fn per_face(self) -> usize {
        self.0.get()
    }

    /// Slots across both faces; the exact length of every slot sequence.
    #[must_use]
    pub const fn total_slots(self) -> usize {
        self.0.get() * FACES_PER_CARD
    }
}

impl Default for Capacity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for Capacity {
    type Error = CapacityError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Capacity> for usize {
    fn from(value: Capacity) -> Self {
        value.per_face()
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Seed
// ============================================================================

/// Selects one deterministic permutation of a slot sequence.
///
/// The same seed applied to the same phrases always yields the same order,
/// so a seed is enough to share or reprint a shuffled card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(i32);

impl Seed {
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for Seed {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
