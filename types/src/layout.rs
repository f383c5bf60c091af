//! Slot sequences and their placement on the two card faces.
//!
//! A [`SlotSequence`] is the exact-length phrase list for one card. It is split
//! in half for the front and back faces, and each face spaces its phrases evenly
//! around the circle (see [`slot_angle`]).

use std::fmt;
use std::ops::Deref;

use serde::Serialize;

use crate::{Capacity, PLACEHOLDER, Seed};

/// Angle in degrees of slot `index` on a face holding `count` slots.
///
/// Slot 0 sits at 0 degrees and the rest follow clockwise at `360 / count`
/// intervals. A zero `count` yields 0 rather than a NaN.
#[must_use]
pub fn slot_angle(index: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    360.0 * index as f64 / count as f64
}

/// Ordered phrases filling every slot of one card, exactly `2 x capacity` long.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotSequence {
    slots: Vec<String>,
    capacity: Capacity,
    seed: Option<Seed>,
}

impl SlotSequence {
    /// Fit `phrases` to the capacity of a card.
    ///
    /// Extra phrases past `capacity.total_slots()` are dropped; missing ones are
    /// filled with [`PLACEHOLDER`], which is used verbatim.
    #[must_use]
    pub fn fit(mut phrases: Vec<String>, capacity: Capacity) -> Self {
        let total = capacity.total_slots();
        phrases.truncate(total);
        phrases.resize_with(total, || PLACEHOLDER.to_string());
        Self {
            slots: phrases,
            capacity,
            seed: None,
        }
    }

    /// Reorder the slots with a seeded permutation.
    ///
    /// `permute` must return every slot it was given; the sequence length is
    /// part of the type's contract and is asserted.
    #[must_use]
    pub fn permute_with(self, seed: Seed, permute: impl FnOnce(Vec<String>) -> Vec<String>) -> Self {
        let total = self.slots.len();
        let slots = permute(self.slots);
        assert_eq!(slots.len(), total, "permutation must keep every slot");
        Self {
            slots,
            capacity: self.capacity,
            seed: Some(seed),
        }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.slots
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<String> {
        self.slots
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Seed that ordered this sequence, if it was shuffled.
    #[must_use]
    pub fn seed(&self) -> Option<Seed> {
        self.seed
    }

    /// Phrases printed on the front face.
    #[must_use]
    pub fn front(&self) -> &[String] {
        &self.slots[..self.capacity.per_face()]
    }

    /// Phrases printed on the back face.
    #[must_use]
    pub fn back(&self) -> &[String] {
        &self.slots[self.capacity.per_face()..]
    }

    /// Number of slots holding a real phrase rather than padding.
    #[must_use]
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|s| s.as_str() != PLACEHOLDER).count()
    }

    /// Place both faces' phrases at their angles.
    #[must_use]
    pub fn layout(&self) -> CardLayout {
        CardLayout {
            capacity: self.capacity,
            seed: self.seed,
            faces: [
                CardFace::new(FaceSide::Front, self.front()),
                CardFace::new(FaceSide::Back, self.back()),
            ],
        }
    }
}

impl Deref for SlotSequence {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceSide {
    Front,
    Back,
}

impl FaceSide {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            FaceSide::Front => "front",
            FaceSide::Back => "back",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            FaceSide::Front => "Front",
            FaceSide::Back => "Back",
        }
    }
}

/// One phrase at its position on a face.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slot {
    pub index: usize,
    /// Rotation in degrees around the face center.
    pub angle: f64,
    pub phrase: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardFace {
    pub side: FaceSide,
    pub slots: Vec<Slot>,
}

impl CardFace {
    fn new(side: FaceSide, phrases: &[String]) -> Self {
        let count = phrases.len();
        let slots = phrases
            .iter()
            .enumerate()
            .map(|(index, phrase)| Slot {
                index,
                angle: slot_angle(index, count),
                phrase: phrase.clone(),
            })
            .collect();
        Self { side, slots }
    }
}

/// Rendering input: both faces with every slot's angle resolved.
///
/// `Display` prints a plain-text listing, one slot per line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardLayout {
    pub capacity: Capacity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<Seed>,
    pub faces: [CardFace; 2],
}

impl fmt::Display for CardLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, face) in self.faces.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", face.side.display_name())?;
            if let Some(seed) = self.seed {
                write!(f, " (seed {seed})")?;
            }
            writeln!(f)?;
            for slot in &face.slots {
                writeln!(f, "{:>7.1}  {}", slot.angle, slot.phrase)?;
            }
        }
        Ok(())
    }
}
