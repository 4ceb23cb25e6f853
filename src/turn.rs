//! Turn controller: the re-roll loop for one player's turn.
//!
//! Each iteration rolls the dice still in hand, checks for a bust,
//! consults the strategy, validates its keep and either banks, loops
//! with fewer dice, or resets to a full hand on hot dice.
//!
//! Busting is normal control flow and yields [`TurnOutcome::Busted`].
//! A strategy returning an illegal keep is a programming error in the
//! strategy, surfaced as a fatal [`ContractViolation`].

use thiserror::Error;
use tracing::trace;

use crate::core::{Dice, GameConfig, GameRng, PlayerId, Scoreboard};
use crate::score::ScoreFn;
use crate::strategy::{Context, Decision, Strategy};

/// How a turn ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The strategy stopped voluntarily; provisional points become
    /// permanent.
    Banked(u32),
    /// A fresh roll contained no scoring combination; all provisional
    /// points from earlier rolls this turn are discarded.
    Busted,
}

impl TurnOutcome {
    /// Net permanent-score gain from the turn.
    #[must_use]
    pub fn points(self) -> u32 {
        match self {
            TurnOutcome::Banked(points) => points,
            TurnOutcome::Busted => 0,
        }
    }
}

/// A strategy broke the keep contract. Fatal: the game aborts rather
/// than guessing what the strategy meant.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ContractViolation {
    /// The keep claims more dice of some face than were rolled.
    #[error("keep {kept} exceeds rolled dice {rolled}")]
    KeepExceedsRoll {
        /// The offending keep.
        kept: Dice,
        /// The dice actually rolled.
        rolled: Dice,
    },
    /// The keep contains dice that score nothing (or is empty).
    /// Every kept die must contribute points.
    #[error("keep {kept} contains non-scoring dice")]
    NonScoringKeep {
        /// The offending keep.
        kept: Dice,
    },
}

/// Play one turn for `player`, returning its outcome.
///
/// Rolls start from a full hand of `config.dice_per_hand` dice. A keep
/// that consumes the last die in hand means every rolled die scored
/// (valid keeps score with zero remainder), so the hand resets to full:
/// hot dice.
pub fn play_turn(
    config: &GameConfig,
    scores: &Scoreboard,
    player: PlayerId,
    final_round: bool,
    score_fn: ScoreFn,
    rng: &mut GameRng,
    strategy: &dyn Strategy,
) -> Result<TurnOutcome, ContractViolation> {
    let mut points = 0u32;
    let mut in_hand = config.dice_per_hand;

    loop {
        let rolled = Dice::roll(rng, in_hand);
        trace!(%player, %rolled, points, in_hand, "rolled");

        // A fresh roll with nothing scoring busts the whole turn.
        let (roll_points, _) = score_fn(0, &rolled);
        if roll_points == 0 {
            trace!(%player, lost = points, "bust");
            return Ok(TurnOutcome::Busted);
        }

        let ctx = Context {
            scores,
            player,
            points,
            win_threshold: config.win_threshold,
            bank_threshold: config.bank_threshold,
            final_round,
            score_fn,
        };

        let kept = match strategy.decide(&ctx, &rolled) {
            Decision::Stop => {
                trace!(%player, points, "banked");
                return Ok(TurnOutcome::Banked(points));
            }
            Decision::Keep(kept) => kept,
        };

        if !kept.is_subset_of(&rolled) {
            return Err(ContractViolation::KeepExceedsRoll { kept, rolled });
        }
        let (kept_points, kept_rem) = score_fn(0, &kept);
        if kept_points == 0 || !kept_rem.is_empty() {
            return Err(ContractViolation::NonScoringKeep { kept });
        }

        points += kept_points;
        in_hand -= kept.total();
        if in_hand == 0 {
            // Every die in hand scored: hot dice, fresh hand.
            trace!(%player, points, "hot dice");
            in_hand = config.dice_per_hand;
        }
    }
}
