//! The round/game state machine.
//!
//! A [`GameSession`] is constructed once per game and owns everything the
//! round lifecycle touches: the catalog, the settings, the RNG, per-player
//! statistics and the current round. All operations go through the session
//! handle, so multiple sessions can coexist (and tests never share state).
//!
//! A round moves `AwaitingGuess -> Solved` on a correct guess and loops on
//! anything else. Advancing to the next round is simply another
//! [`GameSession::start_round`] call; the presentation layer is expected to
//! confirm with the user first when [`GameSession::is_solved`] is false.

use crate::catalog::{BookCatalog, Translation};
use crate::events::SessionEvent;
use crate::locator::{random_location, VerseLocation};
use crate::reveal::{self, RevealOutcome, RevealSet};
use crate::rng::SeededRng;
use crate::scoring::{score_round, ScoreContext};
use crate::settings::{GameSettings, SettingsError};
use crate::source::{VerseRef, VerseSource};
use crate::stats::PlayerStats;
use crate::types::PlayerId;
use serde::{Deserialize, Serialize};

/// Feedback for a recorded guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// Exact match; the round is solved.
    Correct,
    /// The solution lies earlier in Scripture than the guess.
    SolutionEarlier,
    /// The solution lies later in Scripture than the guess.
    SolutionLater,
}

/// State of the round currently being played.
#[derive(Clone, Debug)]
struct RoundState {
    number: u32,
    starter: PlayerId,
    current_player: PlayerId,
    solution: VerseLocation,
    text: String,
    word_count: usize,
    revealed: RevealSet,
    solved: bool,
    /// One chronological guess list per player; skips leave no entry.
    guesses: Vec<Vec<VerseLocation>>,
}

/// A complete game: catalog, settings, statistics and the active round.
#[derive(Debug)]
pub struct GameSession {
    catalog: BookCatalog,
    settings: GameSettings,
    translation: Translation,
    rng: SeededRng,
    stats: Vec<PlayerStats>,
    rounds_started: u32,
    round: Option<RoundState>,
    events: Vec<SessionEvent>,
}

impl GameSession {
    /// Create a session with an entropy-seeded RNG.
    pub fn new(catalog: BookCatalog, settings: GameSettings) -> Result<Self, SessionError> {
        Self::with_rng(catalog, settings, SeededRng::from_entropy())
    }

    /// Create a session with a caller-supplied RNG, for reproducible runs.
    pub fn with_rng(
        catalog: BookCatalog,
        settings: GameSettings,
        rng: SeededRng,
    ) -> Result<Self, SessionError> {
        settings.validate()?;
        let translation = Translation::by_code(&settings.translation).ok_or_else(|| {
            SessionError::Settings(SettingsError::UnknownTranslation(
                settings.translation.clone(),
            ))
        })?;
        let stats = vec![PlayerStats::default(); settings.player_count as usize];
        Ok(Self {
            catalog,
            settings,
            translation,
            rng,
            stats,
            rounds_started: 0,
            round: None,
            events: Vec::new(),
        })
    }

    /// Start the next round: rotate the starting player, draw a verse,
    /// await its text and apply the auto-reveal opening.
    ///
    /// On a fetch failure no round is active afterwards; the caller may
    /// retry with the same or another source. The round counter only
    /// advances on success, so a retried round keeps its number.
    pub async fn start_round<S: VerseSource>(&mut self, source: &S) -> Result<(), SessionError> {
        let number = self.rounds_started;
        let starter = (number % self.settings.player_count as u32) as PlayerId;
        let solution = match self.settings.debug_location {
            Some(location) => location,
            None => random_location(&self.catalog, self.translation.kind, &mut self.rng)
                .ok_or(SessionError::NoAvailableBooks)?,
        };
        let verse_ref = VerseRef::resolve(&self.catalog, &self.translation, solution)
            .ok_or(SessionError::InvalidLocation(solution))?;

        let text = match source.fetch(&verse_ref).await {
            Ok(text) => text,
            Err(error) => {
                log::warn!("verse fetch failed for {}: {}", verse_ref.label(), error);
                self.round = None;
                return Err(SessionError::VerseFetchFailed(error.to_string()));
            }
        };

        let word_count = reveal::word_count(&text);
        let mut revealed = RevealSet::new();
        if self.settings.auto_reveal {
            revealed.reveal_first_and_last();
        }
        self.rounds_started += 1;
        self.round = Some(RoundState {
            number,
            starter,
            current_player: starter,
            solution,
            text,
            word_count,
            revealed,
            solved: false,
            guesses: vec![Vec::new(); self.settings.player_count as usize],
        });
        self.events.push(SessionEvent::RoundStarted {
            round: number,
            starter,
            word_count,
        });
        log::debug!("round {} started, starter player {}", number, starter);
        Ok(())
    }

    /// Record the current player's guess.
    ///
    /// Validation failures leave the round untouched and the guess
    /// unrecorded. A correct guess solves the round, updates statistics and
    /// hands out points; anything else yields directional feedback, rotates
    /// the turn in multiplayer and triggers the auto-reveal.
    pub fn submit_guess(
        &mut self,
        book: &str,
        chapter: u32,
        verse: u32,
    ) -> Result<GuessOutcome, GuessError> {
        {
            let round = self.round.as_ref().ok_or(GuessError::NoActiveRound)?;
            if round.solved {
                return Err(GuessError::RoundAlreadySolved);
            }
        }
        let book_index = self
            .catalog
            .resolve(book, self.translation.kind, false)
            .ok_or_else(|| GuessError::BookNotFound(book.to_string()))?;
        let entry = self
            .catalog
            .get(book_index)
            .ok_or_else(|| GuessError::BookNotFound(book.to_string()))?;
        let chapter_bad = chapter < 1 || chapter > entry.chapter_count();
        let verse_bad = verse < 1
            || (!chapter_bad && entry.verse_count(chapter).is_some_and(|count| verse > count));
        if chapter_bad || verse_bad {
            return Err(GuessError::OutOfRange {
                chapter: chapter_bad,
                verse: verse_bad,
            });
        }
        let guess = VerseLocation::new(book_index, chapter, verse);

        let player_count = self.settings.player_count;
        let round = self.round.as_mut().ok_or(GuessError::NoActiveRound)?;
        let player = round.current_player;
        round.guesses[player as usize].push(guess);
        self.stats[player as usize].total_guesses += 1;

        let solution = round.solution;
        let outcome = if guess == solution {
            round.solved = true;
            let unrevealed = round.word_count.saturating_sub(round.revealed.len()) as u32;
            let guesses_made = round.guesses[player as usize].len() as u32;
            self.stats[player as usize].record_win(guesses_made, unrevealed);

            let award = score_round(&ScoreContext {
                catalog: &self.catalog,
                rules: &self.settings.rules,
                solution,
                winner: player,
                starter: round.starter,
                guesses: &round.guesses,
                all_words: round.word_count,
                revealed: round.revealed.len(),
            });
            for p in 0..player_count {
                self.stats[p as usize].add_points(award.player_delta(p));
            }
            for stats in &mut self.stats {
                stats.clamp_floor();
            }

            log::debug!("round {} solved by player {}", round.number, player);
            self.events.push(SessionEvent::GuessAccepted {
                player,
                guess,
                outcome: GuessOutcome::Correct,
            });
            self.events.push(SessionEvent::RoundSolved {
                round: round.number,
                winner: player,
                award,
            });
            self.events.push(SessionEvent::StatsChanged);
            GuessOutcome::Correct
        } else {
            let outcome = if guess < solution {
                GuessOutcome::SolutionLater
            } else {
                GuessOutcome::SolutionEarlier
            };
            self.events.push(SessionEvent::GuessAccepted {
                player,
                guess,
                outcome,
            });
            self.events.push(SessionEvent::StatsChanged);
            if player_count > 1 {
                round.current_player = (player + 1) % player_count;
            }
            if self.settings.auto_reveal {
                if let RevealOutcome::Revealed(index) =
                    round.revealed.reveal_random(round.word_count, &mut self.rng)
                {
                    self.events.push(SessionEvent::WordRevealed {
                        index,
                        revealed: round.revealed.len(),
                        total: round.word_count,
                    });
                }
            }
            outcome
        };
        Ok(outcome)
    }

    /// Pass the current player's turn without recording a guess.
    /// Multiplayer only.
    pub fn skip_turn(&mut self) -> Result<(), SessionError> {
        if !self.settings.is_multiplayer() {
            return Err(SessionError::NotMultiplayer);
        }
        let round = self.round.as_mut().ok_or(SessionError::NoActiveRound)?;
        if round.solved {
            return Err(SessionError::RoundAlreadySolved);
        }
        let player = round.current_player;
        round.current_player = (player + 1) % self.settings.player_count;
        self.events.push(SessionEvent::TurnSkipped { player });
        if self.settings.auto_reveal {
            if let RevealOutcome::Revealed(index) =
                round.revealed.reveal_random(round.word_count, &mut self.rng)
            {
                self.events.push(SessionEvent::WordRevealed {
                    index,
                    revealed: round.revealed.len(),
                    total: round.word_count,
                });
            }
        }
        Ok(())
    }

    /// Reveal one more random word. Returns the exhausted signal when
    /// every word is visible, the round is solved, or no round is active,
    /// so the caller can disable the reveal control.
    pub fn reveal_word(&mut self) -> RevealOutcome {
        let Some(round) = self.round.as_mut() else {
            return RevealOutcome::Exhausted;
        };
        if round.solved {
            return RevealOutcome::Exhausted;
        }
        let outcome = round.revealed.reveal_random(round.word_count, &mut self.rng);
        if let RevealOutcome::Revealed(index) = outcome {
            self.events.push(SessionEvent::WordRevealed {
                index,
                revealed: round.revealed.len(),
                total: round.word_count,
            });
        }
        outcome
    }

    /// The verse text as it should be shown: masked while the round is
    /// open, the full text once solved. `None` when no round is active.
    pub fn display_text(&self) -> Option<String> {
        let round = self.round.as_ref()?;
        if round.solved {
            Some(round.text.clone())
        } else {
            Some(reveal::mask(&round.text, &round.revealed))
        }
    }

    /// Word count of the current verse (0 when no round is active).
    pub fn word_count(&self) -> usize {
        self.round.as_ref().map_or(0, |r| r.word_count)
    }

    /// Raw revealed-entry count of the current round.
    pub fn revealed_count(&self) -> usize {
        self.round.as_ref().map_or(0, |r| r.revealed.len())
    }

    /// Whose turn it is.
    pub fn current_player(&self) -> Option<PlayerId> {
        self.round.as_ref().map(|r| r.current_player)
    }

    /// Number of the current round (0-based).
    pub fn round_number(&self) -> Option<u32> {
        self.round.as_ref().map(|r| r.number)
    }

    /// Whether the current round has been solved.
    pub fn is_solved(&self) -> bool {
        self.round.as_ref().is_some_and(|r| r.solved)
    }

    /// Whether a round is active and still open. The presentation layer
    /// asks for confirmation before advancing past an open round.
    pub fn round_in_progress(&self) -> bool {
        self.round.as_ref().is_some_and(|r| !r.solved)
    }

    /// The solution, revealed only once the round is solved.
    pub fn solution(&self) -> Option<VerseLocation> {
        self.round
            .as_ref()
            .filter(|r| r.solved)
            .map(|r| r.solution)
    }

    /// A player's guesses this round, in order.
    pub fn guess_history(&self, player: PlayerId) -> Option<&[VerseLocation]> {
        self.round
            .as_ref()
            .and_then(|r| r.guesses.get(player as usize))
            .map(Vec::as_slice)
    }

    /// Per-player statistics snapshot.
    pub fn stats(&self) -> &[PlayerStats] {
        &self.stats
    }

    /// The session settings.
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// The active translation.
    pub fn translation(&self) -> &Translation {
        &self.translation
    }

    /// The book catalog.
    pub fn catalog(&self) -> &BookCatalog {
        &self.catalog
    }

    /// Drain the pending session events.
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Errors from session lifecycle operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// The settings failed validation.
    Settings(SettingsError),
    /// No book of the catalog is available in the active translation.
    NoAvailableBooks,
    /// A fixed debug location does not exist in the catalog.
    InvalidLocation(VerseLocation),
    /// The verse text could not be fetched; no round is active.
    VerseFetchFailed(String),
    /// The operation needs an active round.
    NoActiveRound,
    /// The round is already solved.
    RoundAlreadySolved,
    /// The operation only applies to multiplayer games.
    NotMultiplayer,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::Settings(e) => write!(f, "Invalid settings: {}", e),
            SessionError::NoAvailableBooks => {
                write!(f, "No books available in the active translation")
            }
            SessionError::InvalidLocation(loc) => {
                write!(f, "Location {} does not exist in the catalog", loc)
            }
            SessionError::VerseFetchFailed(msg) => write!(f, "Verse fetch failed: {}", msg),
            SessionError::NoActiveRound => write!(f, "No active round"),
            SessionError::RoundAlreadySolved => write!(f, "The round is already solved"),
            SessionError::NotMultiplayer => write!(f, "Only available in multiplayer games"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<SettingsError> for SessionError {
    fn from(e: SettingsError) -> Self {
        SessionError::Settings(e)
    }
}

/// Errors from guess validation. The guess is not recorded and the round
/// state is unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuessError {
    /// The operation needs an active round.
    NoActiveRound,
    /// The round is already solved; input is disabled.
    RoundAlreadySolved,
    /// The book identifier did not resolve.
    BookNotFound(String),
    /// Chapter and/or verse are out of range for the guessed book.
    OutOfRange { chapter: bool, verse: bool },
}

impl std::fmt::Display for GuessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GuessError::NoActiveRound => write!(f, "No active round"),
            GuessError::RoundAlreadySolved => write!(f, "The round is already solved"),
            GuessError::BookNotFound(entry) => write!(f, "Unknown book: {}", entry),
            GuessError::OutOfRange { chapter, verse } => {
                match (*chapter, *verse) {
                    (true, true) => write!(f, "Chapter and verse are out of range"),
                    (true, false) => write!(f, "Chapter is out of range"),
                    _ => write!(f, "Verse is out of range"),
                }
            }
        }
    }
}

impl std::error::Error for GuessError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BookEntry;

    /// A source that always returns the same text.
    struct FixedSource(&'static str);

    impl VerseSource for FixedSource {
        type Error = SessionError;

        async fn fetch(&self, _verse: &VerseRef) -> Result<String, Self::Error> {
            Ok(self.0.to_string())
        }
    }

    /// A source that always fails.
    struct FailingSource;

    impl VerseSource for FailingSource {
        type Error = SessionError;

        async fn fetch(&self, _verse: &VerseRef) -> Result<String, Self::Error> {
            Err(SessionError::VerseFetchFailed("offline".to_string()))
        }
    }

    fn test_catalog() -> BookCatalog {
        let book = |code: &str, chapters: &[u32]| BookEntry {
            code: code.to_string(),
            name: code.to_string(),
            sort_name: code.to_string(),
            abbrevs: Vec::new(),
            chapters: chapters.to_vec(),
        };
        BookCatalog::new(vec![
            book("GEN", &[31, 25, 24]),
            book("MAL", &[14, 17, 24]),
            book("MAT", &[25, 23, 17]),
            book("JHN", &[51, 25, 36]),
        ])
        .unwrap()
    }

    fn debug_settings(players: u8) -> GameSettings {
        let mut settings = GameSettings::new(players);
        settings.translation = "SZIT".to_string();
        settings.debug_location = Some(VerseLocation::new(3, 3, 16));
        settings.auto_reveal = false;
        settings
    }

    fn started_session(players: u8) -> GameSession {
        let mut session = GameSession::with_rng(
            test_catalog(),
            debug_settings(players),
            SeededRng::seeded(7),
        )
        .unwrap();
        let source = FixedSource("Mert úgy szerette Isten a világot");
        futures_block_on(session.start_round(&source)).unwrap();
        session
    }

    /// Minimal executor for the async session calls in these tests.
    fn futures_block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(future)
    }

    #[test]
    fn test_start_round_rotates_starter() {
        let mut session = started_session(3);
        assert_eq!(session.round_number(), Some(0));
        assert_eq!(session.current_player(), Some(0));

        let source = FixedSource("Az Úr az én pásztorom");
        futures_block_on(session.start_round(&source)).unwrap();
        assert_eq!(session.round_number(), Some(1));
        assert_eq!(session.current_player(), Some(1));

        futures_block_on(session.start_round(&source)).unwrap();
        futures_block_on(session.start_round(&source)).unwrap();
        // Round 3 wraps back to player 0.
        assert_eq!(session.current_player(), Some(0));
    }

    #[test]
    fn test_fetch_failure_leaves_no_round() {
        let mut session = GameSession::with_rng(
            test_catalog(),
            debug_settings(1),
            SeededRng::seeded(1),
        )
        .unwrap();
        let result = futures_block_on(session.start_round(&FailingSource));
        assert!(matches!(result, Err(SessionError::VerseFetchFailed(_))));
        assert_eq!(session.round_number(), None);
        assert_eq!(session.display_text(), None);

        // The retry succeeds and keeps the round number.
        let source = FixedSource("A kezdetben volt az Ige");
        futures_block_on(session.start_round(&source)).unwrap();
        assert_eq!(session.round_number(), Some(0));
    }

    #[test]
    fn test_guess_validation() {
        let mut session = started_session(1);
        assert_eq!(
            session.submit_guess("NOPE", 1, 1),
            Err(GuessError::BookNotFound("NOPE".to_string()))
        );
        assert_eq!(
            session.submit_guess("JHN", 22, 1),
            Err(GuessError::OutOfRange {
                chapter: true,
                verse: false
            })
        );
        assert_eq!(
            session.submit_guess("JHN", 3, 37),
            Err(GuessError::OutOfRange {
                chapter: false,
                verse: true
            })
        );
        assert_eq!(
            session.submit_guess("JHN", 0, 0),
            Err(GuessError::OutOfRange {
                chapter: true,
                verse: true
            })
        );
        // Nothing was recorded.
        assert_eq!(session.stats()[0].total_guesses, 0);
        assert_eq!(session.guess_history(0).unwrap().len(), 0);
    }

    #[test]
    fn test_directional_feedback() {
        let mut session = started_session(1);
        // Solution is JHN (book 3) 3,16.
        assert_eq!(
            session.submit_guess("GEN", 1, 1),
            Ok(GuessOutcome::SolutionLater)
        );
        assert_eq!(
            session.submit_guess("JHN", 3, 20),
            Ok(GuessOutcome::SolutionEarlier)
        );
        assert_eq!(
            session.submit_guess("JHN", 3, 16),
            Ok(GuessOutcome::Correct)
        );
        assert!(session.is_solved());
    }

    #[test]
    fn test_solved_round_rejects_input() {
        let mut session = started_session(1);
        session.submit_guess("JHN", 3, 16).unwrap();
        assert_eq!(
            session.submit_guess("GEN", 1, 1),
            Err(GuessError::RoundAlreadySolved)
        );
        assert_eq!(session.reveal_word(), RevealOutcome::Exhausted);
    }

    #[test]
    fn test_win_updates_stats_and_points() {
        let mut session = started_session(1);
        session.submit_guess("MAT", 1, 1).unwrap();
        session.submit_guess("JHN", 3, 16).unwrap();
        let stats = &session.stats()[0];
        assert_eq!(stats.rounds_won, 1);
        assert_eq!(stats.total_guesses, 2);
        assert_eq!(stats.min_guesses, Some(2));
        // 6 words, nothing revealed: 12 + 6 base-formula points, plus
        // testament (first guess), book and chapter (winning guess).
        assert_eq!(stats.max_unrevealed, Some(6));
        assert_eq!(stats.total_points, 18 + 2 + 5 + 9);
    }

    #[test]
    fn test_multiplayer_turn_rotation_and_skip() {
        let mut session = started_session(2);
        assert_eq!(session.current_player(), Some(0));
        session.submit_guess("GEN", 1, 1).unwrap();
        assert_eq!(session.current_player(), Some(1));
        session.skip_turn().unwrap();
        assert_eq!(session.current_player(), Some(0));
        // Skips leave no guess entry.
        assert_eq!(session.guess_history(1).unwrap().len(), 0);
        assert_eq!(session.stats()[1].total_guesses, 0);
    }

    #[test]
    fn test_skip_rejected_in_single_player() {
        let mut session = started_session(1);
        assert_eq!(session.skip_turn(), Err(SessionError::NotMultiplayer));
    }

    #[test]
    fn test_winner_turn_does_not_rotate() {
        let mut session = started_session(2);
        session.submit_guess("JHN", 3, 16).unwrap();
        assert!(session.is_solved());
        // Input is disabled; the current player stays on the winner.
        assert_eq!(session.current_player(), Some(0));
        assert_eq!(session.stats()[0].rounds_won, 1);
        assert_eq!(session.stats()[1].rounds_won, 0);
    }

    #[test]
    fn test_auto_reveal_after_wrong_guess_and_skip() {
        let mut settings = debug_settings(2);
        settings.auto_reveal = true;
        let mut session =
            GameSession::with_rng(test_catalog(), settings, SeededRng::seeded(3)).unwrap();
        let source = FixedSource("Mert úgy szerette Isten a világot");
        futures_block_on(session.start_round(&source)).unwrap();
        // First and last words are pre-revealed.
        assert_eq!(session.revealed_count(), 2);
        session.submit_guess("GEN", 1, 1).unwrap();
        assert_eq!(session.revealed_count(), 3);
        session.skip_turn().unwrap();
        assert_eq!(session.revealed_count(), 4);
    }

    #[test]
    fn test_masked_display_until_solved() {
        let mut session = started_session(1);
        let masked = session.display_text().unwrap();
        assert!(masked.contains('_'));
        assert_eq!(session.solution(), None);
        session.submit_guess("JHN", 3, 16).unwrap();
        assert_eq!(
            session.display_text().unwrap(),
            "Mert úgy szerette Isten a világot"
        );
        assert_eq!(session.solution(), Some(VerseLocation::new(3, 3, 16)));
    }

    #[test]
    fn test_reveal_word_until_exhausted() {
        let mut session = started_session(1);
        let words = session.word_count();
        for _ in 0..words {
            assert!(matches!(session.reveal_word(), RevealOutcome::Revealed(_)));
        }
        assert_eq!(session.reveal_word(), RevealOutcome::Exhausted);
        // Everything is visible now even though the round is open.
        assert_eq!(
            session.display_text().unwrap(),
            "Mert úgy szerette Isten a világot"
        );
    }

    #[test]
    fn test_events_are_drained() {
        let mut session = started_session(1);
        session.submit_guess("GEN", 1, 1).unwrap();
        let events = session.take_events();
        assert!(events
            .iter()
            .any(|e| matches!(e, SessionEvent::RoundStarted { round: 0, .. })));
        assert!(events
            .iter()
            .any(|e| matches!(e, SessionEvent::GuessAccepted { player: 0, .. })));
        assert!(session.take_events().is_empty());
    }

    #[test]
    fn test_round_solved_event_carries_award() {
        let mut session = started_session(1);
        session.submit_guess("JHN", 3, 16).unwrap();
        let events = session.take_events();
        let award = events
            .iter()
            .find_map(|e| match e {
                SessionEvent::RoundSolved { award, .. } => Some(award),
                _ => None,
            })
            .unwrap();
        assert_eq!(award.winner, 0);
        assert_eq!(award.round_points, 18);
        assert_eq!(award.bonuses.len(), 3);
    }

    #[test]
    fn test_deterministic_replay_with_same_seed() {
        let run = || {
            let mut settings = GameSettings::new(1);
            settings.translation = "SZIT".to_string();
            settings.auto_reveal = true;
            let mut session = GameSession::with_rng(
                test_catalog(),
                settings,
                SeededRng::seeded(1234),
            )
            .unwrap();
            let source = FixedSource("Az Úr az én pásztorom nem szűkölködöm");
            futures_block_on(session.start_round(&source)).unwrap();
            let first = session.display_text().unwrap();
            session.reveal_word();
            (first, session.display_text().unwrap())
        };
        assert_eq!(run(), run());
    }
}
