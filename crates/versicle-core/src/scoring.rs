//! Round scoring: base points for the winning guess and uniquely-first
//! bonuses for testament, book and chapter.
//!
//! Bonuses are scanned over the round's guesses in chronological order. In
//! multiplayer that order interleaves the players round-robin starting from
//! the round's starting player, so turn order decides ties. Each bonus goes
//! to at most one (player, guess) pair per round.

use crate::catalog::{BookCatalog, TranslationKind};
use crate::locator::VerseLocation;
use crate::types::PlayerId;
use serde::{Deserialize, Serialize};

/// Point coefficients for a round.
///
/// `per_revealed_word` is typically zero or negative (a penalty for having
/// needed reveals).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointRules {
    /// Base points for the correct guess.
    pub base: i32,
    /// Points per word still hidden when the round was won.
    pub per_unrevealed_word: i32,
    /// Points per revealed word.
    pub per_revealed_word: i32,
    /// Bonus for the first guess in the correct testament.
    pub testament_bonus: i32,
    /// Bonus for the first guess of the correct book.
    pub book_bonus: i32,
    /// Bonus for the first guess of the correct book and chapter.
    pub chapter_bonus: i32,
}

impl Default for PointRules {
    fn default() -> Self {
        Self {
            base: 12,
            per_unrevealed_word: 1,
            per_revealed_word: 0,
            testament_bonus: 2,
            book_bonus: 5,
            chapter_bonus: 9,
        }
    }
}

impl PointRules {
    /// Apply a positional override: the first N supplied values replace the
    /// first N coefficients in declaration order (base, per-unrevealed,
    /// per-revealed, testament, book, chapter).
    pub fn apply_overrides(&mut self, values: &[i32]) {
        let fields = [
            &mut self.base,
            &mut self.per_unrevealed_word,
            &mut self.per_revealed_word,
            &mut self.testament_bonus,
            &mut self.book_bonus,
            &mut self.chapter_bonus,
        ];
        for (field, &value) in fields.into_iter().zip(values) {
            *field = value;
        }
    }
}

/// The three independently awarded bonuses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BonusKind {
    /// Guess and solution lie in the same testament.
    Testament,
    /// Guess names the solution's book.
    Book,
    /// Guess names the solution's book and chapter.
    Chapter,
}

impl BonusKind {
    /// Medal marker the presentation layer attaches to the awarded guess.
    pub const fn medal(&self) -> &'static str {
        match self {
            BonusKind::Testament => "✝️",
            BonusKind::Book => "📖",
            BonusKind::Chapter => "📄",
        }
    }
}

/// One bonus credited to a specific guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusAward {
    pub kind: BonusKind,
    /// Player whose guess earned the bonus.
    pub player: PlayerId,
    /// Display slot of that guess: `round * player_count + turn_offset`,
    /// where the offset counts from the round's starting player.
    pub slot: usize,
    pub points: i32,
}

/// Everything awarded when a round is won.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsAward {
    /// Player who made the winning guess.
    pub winner: PlayerId,
    /// Base-formula points, paid to the winner.
    pub round_points: i32,
    /// Bonuses in award order.
    pub bonuses: Vec<BonusAward>,
}

impl PointsAward {
    /// Net point change for one player from this award.
    pub fn player_delta(&self, player: PlayerId) -> i32 {
        let bonus: i32 = self
            .bonuses
            .iter()
            .filter(|b| b.player == player)
            .map(|b| b.points)
            .sum();
        if player == self.winner {
            self.round_points + bonus
        } else {
            bonus
        }
    }

    /// Whether a specific bonus was handed out.
    pub fn has_bonus(&self, kind: BonusKind) -> bool {
        self.bonuses.iter().any(|b| b.kind == kind)
    }
}

/// Inputs to a round's scoring pass.
pub struct ScoreContext<'a> {
    pub catalog: &'a BookCatalog,
    pub rules: &'a PointRules,
    pub solution: VerseLocation,
    /// Player who made the winning guess.
    pub winner: PlayerId,
    /// Starting player of the round; bonus scanning begins here.
    pub starter: PlayerId,
    /// Guess history, one chronological list per player. Single-player
    /// games pass a single list.
    pub guesses: &'a [Vec<VerseLocation>],
    /// Word count of the verse.
    pub all_words: usize,
    /// Raw revealed-entry count at the time of the win.
    pub revealed: usize,
}

/// Compute the award for a won round.
pub fn score_round(ctx: &ScoreContext<'_>) -> PointsAward {
    let round_points = ctx.rules.base
        + ctx.rules.per_unrevealed_word * (ctx.all_words as i32 - ctx.revealed as i32)
        + ctx.rules.per_revealed_word * ctx.revealed as i32;

    let solution_in_nt = ctx
        .catalog
        .is_available(ctx.solution.book, TranslationKind::NewTestament);

    let player_count = ctx.guesses.len().max(1);
    let max_rounds = ctx.guesses.iter().map(Vec::len).max().unwrap_or(0);

    let mut bonuses = Vec::new();
    let mut testament_given = false;
    let mut book_given = false;
    let mut chapter_given = false;

    for round in 0..max_rounds {
        for offset in 0..player_count {
            let player = (ctx.starter as usize + offset) % player_count;
            let Some(guess) = ctx.guesses[player].get(round) else {
                // Skipped turns leave no guess entry for this slot.
                continue;
            };
            let slot = round * player_count + offset;
            if !testament_given {
                let guess_in_nt = ctx
                    .catalog
                    .is_available(guess.book, TranslationKind::NewTestament);
                if guess_in_nt == solution_in_nt {
                    bonuses.push(BonusAward {
                        kind: BonusKind::Testament,
                        player: player as PlayerId,
                        slot,
                        points: ctx.rules.testament_bonus,
                    });
                    testament_given = true;
                }
            }
            if !book_given && guess.book == ctx.solution.book {
                bonuses.push(BonusAward {
                    kind: BonusKind::Book,
                    player: player as PlayerId,
                    slot,
                    points: ctx.rules.book_bonus,
                });
                book_given = true;
            }
            if !chapter_given
                && guess.book == ctx.solution.book
                && guess.chapter == ctx.solution.chapter
            {
                bonuses.push(BonusAward {
                    kind: BonusKind::Chapter,
                    player: player as PlayerId,
                    slot,
                    points: ctx.rules.chapter_bonus,
                });
                chapter_given = true;
            }
        }
    }

    log::debug!(
        "scored round: winner {} gets {} round points, {} bonuses",
        ctx.winner,
        round_points,
        bonuses.len()
    );

    PointsAward {
        winner: ctx.winner,
        round_points,
        bonuses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BookEntry;

    fn test_catalog() -> BookCatalog {
        let book = |code: &str, chapters: &[u32]| BookEntry {
            code: code.to_string(),
            name: code.to_string(),
            sort_name: code.to_string(),
            abbrevs: Vec::new(),
            chapters: chapters.to_vec(),
        };
        // GEN-MAL marks the Old Testament boundary.
        BookCatalog::new(vec![
            book("GEN", &[31, 25, 24]),
            book("PSA", &[6, 12, 9]),
            book("MAL", &[14, 17, 24]),
            book("MAT", &[25, 23, 17]),
            book("JHN", &[51, 25, 36]),
        ])
        .unwrap()
    }

    fn loc(book: usize, chapter: u32, verse: u32) -> VerseLocation {
        VerseLocation::new(book, chapter, verse)
    }

    #[test]
    fn test_base_formula() {
        // A 5-word verse with 2 revealed entries at win time:
        // 12 + 1*3 + 0*2 = 15.
        let catalog = test_catalog();
        let rules = PointRules {
            base: 12,
            per_unrevealed_word: 1,
            per_revealed_word: 0,
            testament_bonus: 0,
            book_bonus: 0,
            chapter_bonus: 0,
        };
        let guesses = vec![vec![loc(4, 3, 16)]];
        let award = score_round(&ScoreContext {
            catalog: &catalog,
            rules: &rules,
            solution: loc(4, 3, 16),
            winner: 0,
            starter: 0,
            guesses: &guesses,
            all_words: 5,
            revealed: 2,
        });
        assert_eq!(award.round_points, 15);
        assert_eq!(award.player_delta(0), 15);
    }

    #[test]
    fn test_revealed_word_penalty() {
        let catalog = test_catalog();
        let rules = PointRules {
            base: 10,
            per_unrevealed_word: 2,
            per_revealed_word: -3,
            testament_bonus: 0,
            book_bonus: 0,
            chapter_bonus: 0,
        };
        let guesses = vec![vec![loc(0, 1, 1)]];
        let award = score_round(&ScoreContext {
            catalog: &catalog,
            rules: &rules,
            solution: loc(0, 1, 1),
            winner: 0,
            starter: 0,
            guesses: &guesses,
            all_words: 6,
            revealed: 4,
        });
        // 10 + 2*2 - 3*4 = 2
        assert_eq!(award.round_points, 2);
    }

    #[test]
    fn test_single_player_bonuses_go_to_first_matching_guess() {
        let catalog = test_catalog();
        let rules = PointRules::default();
        // Guess 0: NT book (testament matches), wrong book.
        // Guess 1: right book, wrong chapter.
        // Guess 2: right book and chapter, the win.
        let guesses = vec![vec![loc(3, 1, 1), loc(4, 1, 2), loc(4, 3, 16)]];
        let award = score_round(&ScoreContext {
            catalog: &catalog,
            rules: &rules,
            solution: loc(4, 3, 16),
            winner: 0,
            starter: 0,
            guesses: &guesses,
            all_words: 8,
            revealed: 0,
        });
        let slots: Vec<(BonusKind, usize)> =
            award.bonuses.iter().map(|b| (b.kind, b.slot)).collect();
        assert_eq!(
            slots,
            vec![
                (BonusKind::Testament, 0),
                (BonusKind::Book, 1),
                (BonusKind::Chapter, 2),
            ]
        );
        // 12 + 8 base-formula points plus 2 + 5 + 9 in bonuses.
        assert_eq!(award.player_delta(0), 20 + 16);
    }

    #[test]
    fn test_bonus_awarded_at_most_once() {
        let catalog = test_catalog();
        let rules = PointRules::default();
        // Every guess is in the right book; only the first gets the bonus.
        let guesses = vec![vec![loc(4, 1, 1), loc(4, 2, 2), loc(4, 3, 16)]];
        let award = score_round(&ScoreContext {
            catalog: &catalog,
            rules: &rules,
            solution: loc(4, 3, 16),
            winner: 0,
            starter: 0,
            guesses: &guesses,
            all_words: 4,
            revealed: 0,
        });
        let books = award
            .bonuses
            .iter()
            .filter(|b| b.kind == BonusKind::Book)
            .count();
        assert_eq!(books, 1);
        assert_eq!(award.bonuses.iter().find(|b| b.kind == BonusKind::Book).unwrap().slot, 0);
    }

    #[test]
    fn test_multiplayer_scan_starts_from_starter() {
        let catalog = test_catalog();
        let rules = PointRules::default();
        // Two players, round started by player 1. Both named the right
        // book in their first guess; player 1's turn came first, so the
        // book bonus is theirs at slot 0.
        let guesses = vec![vec![loc(4, 1, 1)], vec![loc(4, 2, 2), loc(4, 3, 16)]];
        let award = score_round(&ScoreContext {
            catalog: &catalog,
            rules: &rules,
            solution: loc(4, 3, 16),
            winner: 1,
            starter: 1,
            guesses: &guesses,
            all_words: 4,
            revealed: 0,
        });
        let book = award
            .bonuses
            .iter()
            .find(|b| b.kind == BonusKind::Book)
            .unwrap();
        assert_eq!(book.player, 1);
        assert_eq!(book.slot, 0);
        // Player 0's guess sits at offset 1 of scan round 0.
        let testament = award
            .bonuses
            .iter()
            .find(|b| b.kind == BonusKind::Testament)
            .unwrap();
        assert_eq!(testament.player, 1);
    }

    #[test]
    fn test_multiplayer_interleave_slots() {
        let catalog = test_catalog();
        let rules = PointRules::default();
        // Player 0 starts. Player 1's first guess has the right book;
        // player 0's second guess would too, but arrives later in the
        // interleaved order (slot 2 vs slot 1).
        let guesses = vec![
            vec![loc(0, 1, 1), loc(4, 1, 1)],
            vec![loc(4, 2, 2)],
        ];
        let award = score_round(&ScoreContext {
            catalog: &catalog,
            rules: &rules,
            solution: loc(4, 3, 16),
            winner: 0,
            starter: 0,
            guesses: &guesses,
            all_words: 4,
            revealed: 0,
        });
        let book = award
            .bonuses
            .iter()
            .find(|b| b.kind == BonusKind::Book)
            .unwrap();
        assert_eq!((book.player, book.slot), (1, 1));
    }

    #[test]
    fn test_uneven_guess_histories() {
        let catalog = test_catalog();
        let rules = PointRules::default();
        // Player 1 skipped their later turns, so their list is shorter and
        // the scan passes over the missing slots.
        let guesses = vec![
            vec![loc(0, 1, 1), loc(4, 1, 1)],
            vec![loc(1, 1, 1)],
        ];
        let award = score_round(&ScoreContext {
            catalog: &catalog,
            rules: &rules,
            solution: loc(4, 3, 16),
            winner: 0,
            starter: 0,
            guesses: &guesses,
            all_words: 4,
            revealed: 0,
        });
        let book = award
            .bonuses
            .iter()
            .find(|b| b.kind == BonusKind::Book)
            .unwrap();
        assert_eq!((book.player, book.slot), (0, 2));
    }

    #[test]
    fn test_testament_bonus_for_old_testament_match() {
        let catalog = test_catalog();
        let rules = PointRules::default();
        // Solution in the OT; an OT guess earns the testament bonus even
        // with the wrong book.
        let guesses = vec![vec![loc(1, 2, 3), loc(0, 2, 5)]];
        let award = score_round(&ScoreContext {
            catalog: &catalog,
            rules: &rules,
            solution: loc(0, 2, 5),
            winner: 0,
            starter: 0,
            guesses: &guesses,
            all_words: 4,
            revealed: 0,
        });
        let testament = award
            .bonuses
            .iter()
            .find(|b| b.kind == BonusKind::Testament)
            .unwrap();
        assert_eq!(testament.slot, 0);
    }

    #[test]
    fn test_point_rules_overrides() {
        let mut rules = PointRules::default();
        rules.apply_overrides(&[20, 2]);
        assert_eq!(rules.base, 20);
        assert_eq!(rules.per_unrevealed_word, 2);
        // Remaining coefficients untouched.
        assert_eq!(rules.per_revealed_word, 0);
        assert_eq!(rules.chapter_bonus, 9);

        rules.apply_overrides(&[1, 1, -1, 3, 4, 5]);
        assert_eq!(rules.per_revealed_word, -1);
        assert_eq!(rules.chapter_bonus, 5);
    }

    #[test]
    fn test_award_serialization() {
        let award = PointsAward {
            winner: 1,
            round_points: 15,
            bonuses: vec![BonusAward {
                kind: BonusKind::Book,
                player: 0,
                slot: 3,
                points: 5,
            }],
        };
        let json = serde_json::to_string(&award).unwrap();
        let restored: PointsAward = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, award);
    }
}
