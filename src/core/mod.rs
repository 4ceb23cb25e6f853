//! Core types: dice, players, scores, RNG, configuration.
//!
//! These are the building blocks the scoring engine and the controllers
//! are written against; none of them know any game rules themselves.

pub mod config;
pub mod dice;
pub mod player;
pub mod rng;

pub use config::GameConfig;
pub use dice::{Dice, FACES};
pub use player::{PlayerId, Scoreboard};
pub use rng::{GameRng, GameRngState};
