//! Player strategies: the decision point consulted once per roll.
//!
//! A [`Strategy`] sees an immutable [`Context`] snapshot plus the fresh
//! roll and answers with a [`Decision`]: keep some scoring dice and roll
//! on, or stop and bank the provisional points earned so far.
//!
//! The keep contract (enforced by the turn controller, not here):
//! a kept multiset must be a sub-multiset of the roll and every kept die
//! must score. Violating either aborts the game as a strategy bug.

use crate::core::{Dice, PlayerId, Scoreboard};
use crate::score::{scoring_subset, ScoreFn};

/// Immutable per-roll snapshot handed to a strategy.
///
/// Borrowed, not copied: the scoreboard reference is frozen for the
/// duration of the call, so a strategy can observe standings but never
/// later mutations.
#[derive(Clone, Copy)]
pub struct Context<'a> {
    /// Permanent scores of all players, including the acting player.
    pub scores: &'a Scoreboard,
    /// The acting player.
    pub player: PlayerId,
    /// Provisional points accumulated so far this turn; lost on bust.
    pub points: u32,
    /// Permanent score that triggers the end-game.
    pub win_threshold: u32,
    /// Minimum provisional points a turn is expected to bank.
    pub bank_threshold: u32,
    /// True during the forced equal-turns round after some player has
    /// reached the win threshold (and during tie-break rounds).
    pub final_round: bool,
    /// The scoring ruleset in effect for this game.
    pub score_fn: ScoreFn,
}

/// A strategy's answer for one roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Set these dice aside and re-roll the rest.
    Keep(Dice),
    /// End the turn, banking the provisional points accumulated on
    /// prior rolls. The current roll's dice are forfeited.
    Stop,
}

/// A pluggable per-roll decision rule.
///
/// The single extension point for new player behaviors: implementors
/// observe the context and the roll and return a [`Decision`].
pub trait Strategy {
    /// Decide which dice to set aside, or stop the turn.
    fn decide(&self, ctx: &Context<'_>, rolled: &Dice) -> Decision;
}

/// Keeps every scoring die and re-rolls until bust, forever chasing hot
/// dice — unless `stop_at` is set, in which case it banks once the
/// turn's provisional points reach that safety-net target.
#[derive(Clone, Copy, Debug, Default)]
pub struct GoForIt {
    /// Provisional-point target at which to bank instead of re-rolling.
    pub stop_at: Option<u32>,
}

impl GoForIt {
    /// A strategy that never stops voluntarily.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A strategy that banks once provisional points reach `target`.
    #[must_use]
    pub fn stop_at(target: u32) -> Self {
        Self {
            stop_at: Some(target),
        }
    }
}

impl Strategy for GoForIt {
    fn decide(&self, ctx: &Context<'_>, rolled: &Dice) -> Decision {
        if self.stop_at.is_some_and(|target| ctx.points >= target) {
            return Decision::Stop;
        }
        let (_, keep) = scoring_subset(ctx.score_fn, rolled);
        Decision::Keep(keep)
    }
}

/// Banks as soon as provisional points reach the configured bank
/// threshold; below it, keeps every scoring die like [`GoForIt`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Hold;

impl Strategy for Hold {
    fn decide(&self, ctx: &Context<'_>, rolled: &Dice) -> Decision {
        if ctx.points >= ctx.bank_threshold {
            return Decision::Stop;
        }
        let (_, keep) = scoring_subset(ctx.score_fn, rolled);
        Decision::Keep(keep)
    }
}
