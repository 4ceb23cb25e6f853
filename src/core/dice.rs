//! Dice multiset: a fixed-size counter of six-sided die faces.
//!
//! A `Dice` value records how many dice currently show each face 1-6.
//! It is a `Copy` value type backed by a small array, so every
//! transformation (scoring, subtracting a keep) works on its own copy
//! and turn steps never alias each other's state.

use serde::{Deserialize, Serialize};

use crate::core::rng::GameRng;

/// Number of faces on a die.
pub const FACES: u8 = 6;

/// A multiset of six-sided die faces.
///
/// Counts are indexed by face value; index 0 is unused so that
/// `counts[face]` reads naturally for faces 1-6. Total count equals the
/// number of dice currently in hand for the active roll.
///
/// ## Example
///
/// ```
/// use farkle_sim::core::Dice;
///
/// let dice = Dice::from_faces(&[1, 1, 5, 3]);
/// assert_eq!(dice.count(1), 2);
/// assert_eq!(dice.count(5), 1);
/// assert_eq!(dice.total(), 4);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dice {
    counts: [u8; FACES as usize + 1],
}

impl Dice {
    /// Create an empty multiset.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: [0; FACES as usize + 1],
        }
    }

    /// Build a multiset from explicit face values.
    ///
    /// Panics if any value is outside 1-6. Intended for tests and
    /// fixed scenarios; rolled dice come from [`Dice::roll`].
    #[must_use]
    pub fn from_faces(faces: &[u8]) -> Self {
        let mut dice = Self::new();
        for &face in faces {
            dice.add(face, 1);
        }
        dice
    }

    /// Roll `n` dice uniformly and collect them into a multiset.
    #[must_use]
    pub fn roll(rng: &mut GameRng, n: u8) -> Self {
        let mut dice = Self::new();
        for _ in 0..n {
            dice.add(rng.roll_face(), 1);
        }
        dice
    }

    /// Add `n` dice showing `face`.
    ///
    /// Panics if `face` is outside 1-6.
    pub fn add(&mut self, face: u8, n: u8) {
        assert!((1..=FACES).contains(&face), "die face must be 1-6, got {face}");
        self.counts[face as usize] += n;
    }

    /// Number of dice showing `face` (0 for faces not present).
    ///
    /// Panics if `face` is outside 1-6.
    #[must_use]
    pub fn count(&self, face: u8) -> u8 {
        assert!((1..=FACES).contains(&face), "die face must be 1-6, got {face}");
        self.counts[face as usize]
    }

    /// Remove all dice showing `face`, returning how many were removed.
    pub fn take_all(&mut self, face: u8) -> u8 {
        assert!((1..=FACES).contains(&face), "die face must be 1-6, got {face}");
        std::mem::take(&mut self.counts[face as usize])
    }

    /// Remove `n` dice showing `face`.
    ///
    /// Panics if fewer than `n` are present; callers check counts first.
    pub fn remove(&mut self, face: u8, n: u8) {
        assert!((1..=FACES).contains(&face), "die face must be 1-6, got {face}");
        let count = &mut self.counts[face as usize];
        assert!(*count >= n, "cannot remove {n} dice of face {face}, only {count} present");
        *count -= n;
    }

    /// Total number of dice in the multiset.
    #[must_use]
    pub fn total(&self) -> u8 {
        self.counts.iter().sum()
    }

    /// True if no dice are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Componentwise difference, clamped at zero.
    ///
    /// Used to derive the "remaining" partition once a keep has been
    /// claimed: `rolled.subtract(&kept)` is whatever was not kept.
    #[must_use]
    pub fn subtract(&self, other: &Dice) -> Self {
        let mut out = Self::new();
        for face in 1..=FACES {
            out.counts[face as usize] = self.count(face).saturating_sub(other.count(face));
        }
        out
    }

    /// True if every face count in `self` is at most the count in `other`.
    #[must_use]
    pub fn is_subset_of(&self, other: &Dice) -> bool {
        (1..=FACES).all(|face| self.count(face) <= other.count(face))
    }

    /// Iterate over `(face, count)` pairs for faces that are present.
    pub fn faces(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        (1..=FACES)
            .map(|face| (face, self.count(face)))
            .filter(|&(_, count)| count > 0)
    }
}

impl std::fmt::Display for Dice {
    /// Renders as sorted face values, e.g. `[1 1 5]`. Used in
    /// contract-violation diagnostics.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        let mut first = true;
        for (face, count) in self.faces() {
            for _ in 0..count {
                if !first {
                    write!(f, " ")?;
                }
                write!(f, "{face}")?;
                first = false;
            }
        }
        write!(f, "]")
    }
}
