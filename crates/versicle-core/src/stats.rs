//! Per-player cumulative statistics.
//!
//! Stats live for the whole game session and are never reset; the session
//! owns one entry per player (a single entry in single-player games).

use serde::{Deserialize, Serialize};

/// Cumulative counters for one player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Rounds this player won.
    pub rounds_won: u32,
    /// Guesses made across all rounds.
    pub total_guesses: u32,
    /// Cumulative points; floored at zero after each round's awards.
    pub total_points: i32,
    /// Fewest guesses this player needed to win a round. `None` until the
    /// first win.
    pub min_guesses: Option<u32>,
    /// Most words still unrevealed at the moment of a win. `None` until
    /// the first win.
    pub max_unrevealed: Option<u32>,
}

impl PlayerStats {
    /// Record a won round, updating the extremum trackers.
    pub fn record_win(&mut self, guesses_in_round: u32, unrevealed: u32) {
        self.rounds_won += 1;
        if self.min_guesses.is_none_or(|min| guesses_in_round < min) {
            self.min_guesses = Some(guesses_in_round);
        }
        if self.max_unrevealed.is_none_or(|max| unrevealed > max) {
            self.max_unrevealed = Some(unrevealed);
        }
    }

    /// Apply a point delta without clamping; the floor is applied once all
    /// of a round's awards are in, via [`PlayerStats::clamp_floor`].
    pub fn add_points(&mut self, delta: i32) {
        self.total_points += delta;
    }

    /// Floor the cumulative total at zero.
    pub fn clamp_floor(&mut self) {
        if self.total_points < 0 {
            self.total_points = 0;
        }
    }
}
