//! Game configuration parameters.

use serde::{Deserialize, Serialize};

/// Game configuration parameters.
///
/// The defaults are the standard Farkle parameters; strategies see the
/// thresholds through the per-roll `Context` rather than reading the
/// config directly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Permanent score a player must reach to trigger the end-game
    /// (default: 5000).
    pub win_threshold: u32,

    /// Minimum provisional points a turn must accumulate before a
    /// strategy would normally bank them (default: 350).
    /// Advisory: the turn controller does not enforce it.
    pub bank_threshold: u32,

    /// Dice in a fresh hand, at turn start and after hot dice
    /// (default: 6).
    pub dice_per_hand: u8,

    /// Optional cap on the number of rounds before the game aborts.
    /// Guards against degenerate strategies that never bank a point
    /// (default: None, no cap).
    pub max_rounds: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            win_threshold: 5000,
            bank_threshold: 350,
            dice_per_hand: 6,
            max_rounds: None,
        }
    }
}

impl GameConfig {
    /// Create a new config with a custom win threshold.
    pub fn with_win_threshold(mut self, threshold: u32) -> Self {
        self.win_threshold = threshold;
        self
    }

    /// Create a new config with a custom bank threshold.
    pub fn with_bank_threshold(mut self, threshold: u32) -> Self {
        self.bank_threshold = threshold;
        self
    }

    /// Create a new config with a custom hand size.
    pub fn with_dice_per_hand(mut self, dice: u8) -> Self {
        assert!(dice > 0, "hand must hold at least one die");
        self.dice_per_hand = dice;
        self
    }

    /// Create a new config with a round cap.
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = Some(rounds);
        self
    }
}
