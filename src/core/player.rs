//! Player identification and permanent score storage.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 1-255 players.
//!
//! ## Scoreboard
//!
//! Per-player permanent scores backed by `Vec` for O(1) access, plus the
//! queries the game controller needs: who broke the win threshold, who
//! currently leads, and which players are tied for the lead.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use farkle_sim::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players.len(), 3);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Permanent scores for every player in a game.
///
/// Scores start at zero and only grow: a turn that banks adds its
/// provisional points here, a bust adds nothing. Strategies receive the
/// scoreboard by shared reference, so they can observe standings but
/// never mutate them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    scores: Vec<u32>,
}

impl Scoreboard {
    /// Create a scoreboard with all scores at zero.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        Self {
            scores: vec![0; player_count],
        }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.scores.len()
    }

    /// Get a player's permanent score.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> u32 {
        self.scores[player.index()]
    }

    /// Add banked points to a player's permanent score.
    pub fn add(&mut self, player: PlayerId, points: u32) {
        self.scores[player.index()] += points;
    }

    /// Iterate over `(PlayerId, score)` pairs in player order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, u32)> + '_ {
        self.scores
            .iter()
            .enumerate()
            .map(|(i, &s)| (PlayerId(i as u8), s))
    }

    /// Scores as a plain slice, in player order.
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.scores
    }

    /// The first player whose score has reached or passed `threshold`,
    /// or `None` if nobody qualifies yet.
    ///
    /// Reaching the threshold exactly counts (`>=`). This only decides
    /// whether end-game handling starts; it never picks the winner.
    #[must_use]
    pub fn breaker(&self, threshold: u32) -> Option<PlayerId> {
        self.iter()
            .find(|&(_, score)| score >= threshold)
            .map(|(player, _)| player)
    }

    /// The lowest-indexed player holding the maximum score.
    #[must_use]
    pub fn winner(&self) -> PlayerId {
        // player_count >= 1, so winners() is never empty
        self.winners()[0]
    }

    /// All players tied for the maximum score, in player order.
    #[must_use]
    pub fn winners(&self) -> Vec<PlayerId> {
        let best = self.scores.iter().copied().max().unwrap_or(0);
        self.iter()
            .filter(|&(_, score)| score == best)
            .map(|(player, _)| player)
            .collect()
    }
}

impl Index<PlayerId> for Scoreboard {
    type Output = u32;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.scores[player.index()]
    }
}
