//! Versicle Core Library
//!
//! This crate contains the core game logic for Versicle, a verse guessing
//! game: a random scripture verse is drawn and masked, and players guess
//! its book/chapter/verse location for points.
//!
//! # Design Principles
//!
//! - **No UI dependencies**: This crate is purely game logic
//! - **Deterministic**: A session built from a fixed seed replays the same
//!   verses and reveals
//! - **Serializable**: All state components can be saved/loaded via serde
//! - **Explicit ownership**: Every operation goes through a
//!   [`GameSession`] handle; there is no ambient global state

// Catalog and verse selection
pub mod catalog;
pub mod locator;

// Round mechanics
pub mod reveal;
pub mod scoring;

// Session state
pub mod session;
pub mod settings;
pub mod stats;

// Collaborators and plumbing
pub mod events;
pub mod rng;
pub mod source;
pub mod types;

// Re-exports for convenience
pub use catalog::{BookCatalog, BookEntry, CatalogError, Translation, TranslationKind};
pub use events::SessionEvent;
pub use locator::{random_location, VerseLocation};
pub use reveal::{collapse_whitespace, mask, word_count, RevealOutcome, RevealSet, MASK_CHAR};
pub use rng::SeededRng;
pub use scoring::{score_round, BonusAward, BonusKind, PointRules, PointsAward, ScoreContext};
pub use session::{GameSession, GuessError, GuessOutcome, SessionError};
pub use settings::{GameSettings, SettingsError};
pub use source::{VerseRef, VerseSource};
pub use stats::PlayerStats;
pub use types::{BookIndex, PlayerId, Testament};
