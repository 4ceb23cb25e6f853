//! Game controller: rounds, end-game handling and tie-breaking.
//!
//! Players take turns in fixed order. The first turn that ends at or
//! above the win threshold starts the end-game: the players still
//! waiting in that round get one final turn (flagged as such in their
//! [`Context`](crate::strategy::Context)), so everyone has had an equal
//! number of turns. The highest score then wins; ties are settled by
//! further full rounds until a unique maximum exists.

use thiserror::Error;
use tracing::debug;

use crate::core::{GameConfig, GameRng, PlayerId, Scoreboard};
use crate::score::{score, ScoreFn};
use crate::strategy::Strategy;
use crate::turn::{play_turn, ContractViolation};

/// Error ending a game without a result.
#[derive(Debug, Error)]
pub enum GameError {
    /// A strategy returned an illegal keep; see [`ContractViolation`].
    #[error("{player} violated the keep contract: {violation}")]
    Contract {
        /// The player whose strategy misbehaved.
        player: PlayerId,
        /// What the strategy did wrong.
        violation: ContractViolation,
    },
    /// The configured round cap was reached with no winner.
    #[error("no winner after {limit} rounds")]
    RoundLimit {
        /// The `max_rounds` value that was exceeded.
        limit: u32,
    },
    /// The strategy list was empty.
    #[error("a game requires at least one player strategy")]
    NoPlayers,
}

/// One game: a config, a scoring ruleset and one strategy per player.
///
/// ```
/// use farkle_sim::core::GameRng;
/// use farkle_sim::game::Game;
/// use farkle_sim::strategy::{GoForIt, Hold};
///
/// let (aggressive, careful) = (GoForIt::stop_at(1000), Hold);
/// let game = Game::new(vec![&aggressive, &careful]);
/// let scores = game.play(&mut GameRng::new(42)).unwrap();
/// assert_eq!(scores.player_count(), 2);
/// ```
pub struct Game<'a> {
    config: GameConfig,
    score_fn: ScoreFn,
    strategies: Vec<&'a dyn Strategy>,
}

impl<'a> Game<'a> {
    /// Create a game with the standard ruleset and default config.
    /// Player order follows the strategy list.
    #[must_use]
    pub fn new(strategies: Vec<&'a dyn Strategy>) -> Self {
        Self {
            config: GameConfig::default(),
            score_fn: score,
            strategies,
        }
    }

    /// Replace the game configuration.
    #[must_use]
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the scoring ruleset.
    #[must_use]
    pub fn with_score_fn(mut self, score_fn: ScoreFn) -> Self {
        self.score_fn = score_fn;
        self
    }

    /// Play the game to completion, returning the final scoreboard.
    ///
    /// The winner can be read off with
    /// [`Scoreboard::winner`](crate::core::Scoreboard::winner); by
    /// construction it is unique when this returns `Ok`.
    pub fn play(&self, rng: &mut GameRng) -> Result<Scoreboard, GameError> {
        if self.strategies.is_empty() {
            return Err(GameError::NoPlayers);
        }

        let mut scores = Scoreboard::new(self.strategies.len());
        let mut end_game = false;
        let mut round = 0u32;

        loop {
            round += 1;
            if let Some(limit) = self.config.max_rounds {
                if round > limit {
                    return Err(GameError::RoundLimit { limit });
                }
            }

            for (index, strategy) in self.strategies.iter().enumerate() {
                let player = PlayerId::new(index as u8);
                let outcome = play_turn(
                    &self.config,
                    &scores,
                    player,
                    end_game,
                    self.score_fn,
                    rng,
                    *strategy,
                )
                .map_err(|violation| GameError::Contract { player, violation })?;
                scores.add(player, outcome.points());

                // The breaking player triggers the end-game; everyone
                // still waiting this round plays their final turn.
                if !end_game && scores.breaker(self.config.win_threshold).is_some() {
                    debug!(%player, round, score = scores.get(player), "end-game triggered");
                    end_game = true;
                }
            }

            debug!(round, scores = ?scores.as_slice(), "round complete");

            if end_game {
                let winners = scores.winners();
                if winners.len() == 1 {
                    debug!(winner = %winners[0], "game over");
                    return Ok(scores);
                }
                // Tied at the top: play another full round, still
                // flagged final, until the tie breaks.
                debug!(?winners, "tie at the top, extra round");
            }
        }
    }
}

/// Play one game and return the final scores in player order.
///
/// Convenience wrapper with defaults filled in: `rng` falls back to an
/// entropy-seeded source (non-reproducible across runs) and `score_fn` to
/// the standard ruleset.
pub fn play_game(
    rng: Option<GameRng>,
    score_fn: Option<ScoreFn>,
    strategies: &[&dyn Strategy],
) -> Result<Vec<u32>, GameError> {
    let mut rng = rng.unwrap_or_else(GameRng::from_entropy);
    let mut game = Game::new(strategies.to_vec());
    if let Some(score_fn) = score_fn {
        game = game.with_score_fn(score_fn);
    }
    game.play(&mut rng).map(|scores| scores.as_slice().to_vec())
}
