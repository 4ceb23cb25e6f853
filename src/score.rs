//! Scoring engine: the maximum score obtainable from a set of rolled dice.
//!
//! [`score`] is a pure function from a dice multiset to points plus the
//! "remainder" — the dice that contributed nothing. A fresh roll whose
//! score is zero (remainder equals the input) is a bust; the turn
//! controller checks exactly that on every roll.
//!
//! Rules run in fixed precedence against a working copy, each rule
//! consuming the dice it scores before the next inspects what remains:
//! full 1-6 straight, then three-or-more-of-a-kind, then single 1s and 5s.

use crate::core::Dice;

/// Points for a full 1-2-3-4-5-6 straight.
pub const STRAIGHT_POINTS: u32 = 1500;
/// Points for a triple of 1s; other faces pay `face * TRIPLE_MULTIPLIER`.
pub const TRIPLE_ONES_POINTS: u32 = 1000;
/// Per-face multiplier for triples of faces 2-6.
pub const TRIPLE_MULTIPLIER: u32 = 100;
/// Points for each single 1 left after triples.
pub const SINGLE_ONE_POINTS: u32 = 100;
/// Points for each single 5 left after triples.
pub const SINGLE_FIVE_POINTS: u32 = 50;

/// A scoring ruleset: maps prior points plus a dice multiset to updated
/// points and the non-scoring remainder.
///
/// [`score`] is the standard ruleset; callers may inject an alternate one
/// when starting a game.
pub type ScoreFn = fn(u32, &Dice) -> (u32, Dice);

/// Score a dice multiset under the standard Farkle rules.
///
/// Returns `prior + points` and the remainder of dice that scored
/// nothing. Pure and deterministic: same input, same output.
///
/// ```
/// use farkle_sim::core::Dice;
/// use farkle_sim::score::score;
///
/// let (points, rem) = score(0, &Dice::from_faces(&[1, 1, 1, 2, 3, 5]));
/// assert_eq!(points, 1050); // triple 1s + single 5
/// assert_eq!(rem, Dice::from_faces(&[2, 3]));
/// ```
#[must_use]
pub fn score(prior: u32, dice: &Dice) -> (u32, Dice) {
    let (points, rem) = score_straight(prior, *dice);
    let (points, rem) = score_triples(points, rem);
    score_singles(points, rem)
}

/// The scoring dice within a roll: the input minus [`score`]'s remainder,
/// together with the points they are worth.
///
/// This is the "keep everything that scores" helper the bundled
/// strategies build their keep from.
#[must_use]
pub fn scoring_subset(score_fn: ScoreFn, dice: &Dice) -> (u32, Dice) {
    let (points, rem) = score_fn(0, dice);
    (points, dice.subtract(&rem))
}

/// Full 1-6 straight: every face present at least once.
///
/// Consumes all dice. Structurally only a full six-die roll can trigger
/// it, since six distinct faces need six dice.
fn score_straight(prior: u32, dice: Dice) -> (u32, Dice) {
    if (1..=6).all(|face| dice.count(face) > 0) {
        (prior + STRAIGHT_POINTS, Dice::new())
    } else {
        (prior, dice)
    }
}

/// Three-or-more-of-a-kind: each face with count >= 3 pays per complete
/// triple (six of a kind is two triples' worth), leaving 0-2 dice of
/// that face for single-die scoring.
fn score_triples(prior: u32, dice: Dice) -> (u32, Dice) {
    let mut rem = dice;
    let mut points = 0;
    for (face, count) in dice.faces() {
        if count >= 3 {
            let triples = u32::from(count / 3);
            let per_triple = if face == 1 {
                TRIPLE_ONES_POINTS
            } else {
                u32::from(face) * TRIPLE_MULTIPLIER
            };
            points += per_triple * triples;
            rem.remove(face, (count / 3) * 3);
        }
    }
    (prior + points, rem)
}

/// Leftover singles: each 1 pays 100, each 5 pays 50; faces 2, 3, 4 and 6
/// score nothing and form the final remainder.
fn score_singles(prior: u32, dice: Dice) -> (u32, Dice) {
    let mut rem = dice;
    let ones = u32::from(rem.take_all(1));
    let fives = u32::from(rem.take_all(5));
    (prior + ones * SINGLE_ONE_POINTS + fives * SINGLE_FIVE_POINTS, rem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_straight_pays_1500() {
        let (points, rem) = score(0, &Dice::from_faces(&[1, 2, 3, 4, 5, 6]));
        assert_eq!(points, 1500);
        assert!(rem.is_empty());
    }

    #[test]
    fn test_six_ones_is_two_triples() {
        let (points, rem) = score(0, &Dice::from_faces(&[1, 1, 1, 1, 1, 1]));
        assert_eq!(points, 2000);
        assert!(rem.is_empty());
    }

    #[test]
    fn test_triple_values_per_face() {
        let expected = [(1u8, 1000u32), (2, 200), (3, 300), (4, 400), (5, 500), (6, 600)];
        for (face, want) in expected {
            let (points, rem) = score(0, &Dice::from_faces(&[face, face, face]));
            assert_eq!(points, want, "triple of {face}s");
            assert!(rem.is_empty(), "triple of {face}s leaves no remainder");
        }
    }

    #[test]
    fn test_triple_leftover_goes_to_singles() {
        // Four 1s: one triple plus one single.
        let (points, rem) = score(0, &Dice::from_faces(&[1, 1, 1, 1]));
        assert_eq!(points, 1100);
        assert!(rem.is_empty());

        // Five 5s: one triple plus two singles.
        let (points, rem) = score(0, &Dice::from_faces(&[5, 5, 5, 5, 5]));
        assert_eq!(points, 600);
        assert!(rem.is_empty());
    }

    #[test]
    fn test_singles_only() {
        let (points, rem) = score(0, &Dice::from_faces(&[1, 5, 5, 2, 6]));
        assert_eq!(points, 200);
        assert_eq!(rem, Dice::from_faces(&[2, 6]));
    }

    #[test]
    fn test_bust_returns_input() {
        let dice = Dice::from_faces(&[2, 2, 3, 3, 4, 4]);
        let (points, rem) = score(0, &dice);
        assert_eq!(points, 0);
        assert_eq!(rem, dice);
    }

    #[test]
    fn test_prior_points_accumulate() {
        let (points, _) = score(250, &Dice::from_faces(&[5]));
        assert_eq!(points, 300);
    }

    #[test]
    fn test_empty_multiset_scores_zero() {
        let (points, rem) = score(0, &Dice::new());
        assert_eq!(points, 0);
        assert!(rem.is_empty());
    }

    #[test]
    fn test_mixed_triple_and_singles() {
        let (points, rem) = score(0, &Dice::from_faces(&[3, 3, 3, 1, 5, 6]));
        assert_eq!(points, 450);
        assert_eq!(rem, Dice::from_faces(&[6]));
    }

    #[test]
    fn test_scoring_subset_splits_roll() {
        let roll = Dice::from_faces(&[1, 1, 5, 2, 3, 6]);
        let (points, keep) = scoring_subset(score, &roll);
        assert_eq!(points, 250);
        assert_eq!(keep, Dice::from_faces(&[1, 1, 5]));
    }

    #[test]
    fn test_scoring_subset_of_bust_is_empty() {
        let roll = Dice::from_faces(&[2, 3, 4, 6]);
        let (points, keep) = scoring_subset(score, &roll);
        assert_eq!(points, 0);
        assert!(keep.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let dice = Dice::from_faces(&[1, 1, 1, 4, 5, 6]);
        assert_eq!(score(0, &dice), score(0, &dice));
    }
}
