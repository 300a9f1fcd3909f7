//! Session events for the presentation layer.
//!
//! Every state transition appends an event; the presentation layer drains
//! them with [`crate::session::GameSession::take_events`] and renders the
//! guess list, reveal counter and stats from what it finds.

use crate::locator::VerseLocation;
use crate::scoring::PointsAward;
use crate::session::GuessOutcome;
use crate::types::PlayerId;
use serde::{Deserialize, Serialize};

/// A round lifecycle event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A new round began; the verse text is loaded and masked.
    RoundStarted {
        round: u32,
        starter: PlayerId,
        word_count: usize,
    },
    /// A valid guess was recorded.
    GuessAccepted {
        player: PlayerId,
        guess: VerseLocation,
        outcome: GuessOutcome,
    },
    /// A player passed without guessing.
    TurnSkipped { player: PlayerId },
    /// A word was unmasked.
    WordRevealed {
        index: usize,
        revealed: usize,
        total: usize,
    },
    /// The round was won and points were handed out.
    RoundSolved {
        round: u32,
        winner: PlayerId,
        award: PointsAward,
    },
    /// Cumulative statistics changed; displays should refresh.
    StatsChanged,
}
