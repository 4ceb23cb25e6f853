//! # farkle-sim
//!
//! A simulator for the dice game Farkle: a pure scoring engine, a turn
//! state machine and a multi-round game loop, with player behavior
//! supplied through pluggable strategies.
//!
//! ## Design Principles
//!
//! 1. **Pure scoring**: [`score::score`] is a deterministic function from
//!    a dice multiset to points plus the non-scoring remainder. Bust
//!    detection is just "the whole roll is remainder".
//!
//! 2. **Strategies decide, controllers enforce**: a [`strategy::Strategy`]
//!    only answers "which dice, or stop" per roll; the turn controller
//!    validates every keep and owns bust, hot-dice and banking rules.
//!
//! 3. **Injectable randomness**: one seeded [`core::GameRng`] per game
//!    makes every match reproducible; fork it to run independent games.
//!
//! ## Modules
//!
//! - `core`: dice multiset, player IDs, scoreboard, RNG, configuration
//! - `score`: the scoring ruleset (straight, triples, singles)
//! - `strategy`: decision trait plus the bundled `GoForIt` / `Hold`
//! - `turn`: the per-turn re-roll loop with bust and hot-dice handling
//! - `game`: round orchestration, end-game round and tie-breaking
//!
//! ## Example
//!
//! ```
//! use farkle_sim::core::GameRng;
//! use farkle_sim::game::Game;
//! use farkle_sim::strategy::{GoForIt, Hold};
//!
//! let (risky, careful) = (GoForIt::new(), Hold);
//! let game = Game::new(vec![&risky, &careful]);
//!
//! let scores = game.play(&mut GameRng::new(42)).unwrap();
//! println!("winner: {}", scores.winner());
//! ```

pub mod core;
pub mod game;
pub mod score;
pub mod strategy;
pub mod turn;

// Re-export commonly used types
pub use crate::core::{Dice, GameConfig, GameRng, GameRngState, PlayerId, Scoreboard};

pub use crate::score::{score, scoring_subset, ScoreFn};

pub use crate::strategy::{Context, Decision, GoForIt, Hold, Strategy};

pub use crate::turn::{play_turn, ContractViolation, TurnOutcome};

pub use crate::game::{play_game, Game, GameError};
