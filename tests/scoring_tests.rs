//! Scoring engine verification: fixed rule vectors plus the properties
//! every scoring call must satisfy on arbitrary dice.

use farkle_sim::core::Dice;
use farkle_sim::score::{score, scoring_subset};

use proptest::prelude::*;

struct Roll {
    faces: &'static [u8],
    points: u32,
    remainder: usize,
}

const ROLLS: &[Roll] = &[
    // Double triples: six of a kind is two triples' worth.
    Roll { faces: &[1, 1, 1, 1, 1, 1], points: 2000, remainder: 0 },
    Roll { faces: &[2, 2, 2, 2, 2, 2], points: 400, remainder: 0 },
    Roll { faces: &[3, 3, 3, 3, 3, 3], points: 600, remainder: 0 },
    Roll { faces: &[4, 4, 4, 4, 4, 4], points: 800, remainder: 0 },
    Roll { faces: &[5, 5, 5, 5, 5, 5], points: 1000, remainder: 0 },
    Roll { faces: &[6, 6, 6, 6, 6, 6], points: 1200, remainder: 0 },
    // Full straight.
    Roll { faces: &[1, 2, 3, 4, 5, 6], points: 1500, remainder: 0 },
    // Three pairs are not a category: pure bust.
    Roll { faces: &[2, 2, 3, 3, 4, 4], points: 0, remainder: 6 },
    // Triples with leftovers.
    Roll { faces: &[1, 1, 1, 2, 3, 5], points: 1050, remainder: 2 },
    Roll { faces: &[6, 6, 6, 6, 5, 2], points: 650, remainder: 2 },
    // Singles only.
    Roll { faces: &[1, 5, 2, 3, 4, 6], points: 150, remainder: 4 },
    Roll { faces: &[5, 5, 2, 2, 6, 6], points: 100, remainder: 4 },
    // Partial hands after dice have been banked.
    Roll { faces: &[1], points: 100, remainder: 0 },
    Roll { faces: &[5], points: 50, remainder: 0 },
    Roll { faces: &[2], points: 0, remainder: 1 },
    Roll { faces: &[4, 6], points: 0, remainder: 2 },
];

#[test]
fn test_rule_vectors() {
    for roll in ROLLS {
        let dice = Dice::from_faces(roll.faces);
        let (points, rem) = score(0, &dice);
        assert_eq!(points, roll.points, "points for {dice}");
        assert_eq!(usize::from(rem.total()), roll.remainder, "remainder for {dice}");
    }
}

#[test]
fn test_straight_needs_a_full_hand() {
    // Five distinct faces cannot be a straight; only the 1 and 5 pay.
    let (points, rem) = score(0, &Dice::from_faces(&[1, 2, 3, 4, 5]));
    assert_eq!(points, 150);
    assert_eq!(rem, Dice::from_faces(&[2, 3, 4]));
}

/// A multiset of at most `max` dice.
fn arb_dice(max: usize) -> impl proptest::strategy::Strategy<Value = Dice> {
    prop::collection::vec(1u8..=6, 0..=max).prop_map(|faces| Dice::from_faces(&faces))
}

/// Dice that provably score nothing: faces from {2, 3, 4, 6} with at
/// most two of each, so no triple, no straight, no 1s or 5s.
fn arb_bust_dice() -> impl proptest::strategy::Strategy<Value = Dice> {
    let face_counts = (0u8..=2, 0u8..=2, 0u8..=2, 0u8..=2);
    face_counts.prop_map(|(twos, threes, fours, sixes)| {
        let mut dice = Dice::new();
        dice.add(2, twos);
        dice.add(3, threes);
        dice.add(4, fours);
        dice.add(6, sixes);
        dice
    })
}

proptest! {
    #[test]
    fn prop_score_is_deterministic(dice in arb_dice(6)) {
        prop_assert_eq!(score(0, &dice), score(0, &dice));
    }

    #[test]
    fn prop_prior_points_pass_through(dice in arb_dice(6), prior in 0u32..10_000) {
        let (base, base_rem) = score(0, &dice);
        let (total, rem) = score(prior, &dice);
        prop_assert_eq!(total, base + prior);
        prop_assert_eq!(rem, base_rem);
    }

    #[test]
    fn prop_remainder_is_contained_in_input(dice in arb_dice(6)) {
        let (_, rem) = score(0, &dice);
        prop_assert!(rem.is_subset_of(&dice));
    }

    #[test]
    fn prop_consumed_plus_remainder_is_input(dice in arb_dice(6)) {
        let (points, rem) = score(0, &dice);
        let consumed = dice.subtract(&rem);
        prop_assert_eq!(consumed.total() + rem.total(), dice.total());
        // Consumed dice are exactly what scoring_subset reports as kept.
        let (subset_points, kept) = scoring_subset(score, &dice);
        prop_assert_eq!(kept, consumed);
        prop_assert_eq!(subset_points, points);
    }

    #[test]
    fn prop_zero_score_means_full_remainder(dice in arb_dice(6)) {
        let (points, rem) = score(0, &dice);
        if points == 0 {
            prop_assert_eq!(rem, dice);
        }
    }

    #[test]
    fn prop_adding_a_scoring_die_never_decreases(dice in arb_dice(5), face in prop::sample::select(vec![1u8, 5])) {
        let (base, _) = score(0, &dice);
        let mut bigger = dice;
        bigger.add(face, 1);
        let (grown, _) = score(0, &bigger);
        prop_assert!(grown >= base);
    }

    #[test]
    fn prop_bust_dice_score_nothing(dice in arb_bust_dice()) {
        let (points, rem) = score(0, &dice);
        prop_assert_eq!(points, 0);
        prop_assert_eq!(rem, dice);
    }

    #[test]
    fn prop_scoring_subset_fully_scores(dice in arb_dice(6)) {
        let (points, kept) = scoring_subset(score, &dice);
        // The kept dice re-score to the same points with no remainder,
        // which is exactly the keep contract strategies must meet.
        let (rescored, rem) = score(0, &kept);
        prop_assert_eq!(rescored, points);
        prop_assert!(rem.is_empty());
    }
}
