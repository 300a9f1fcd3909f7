//! Core type aliases used throughout the crate.

use serde::{Deserialize, Serialize};

/// Player index (0-based; 0 is the only player in single-player games).
pub type PlayerId = u8;

/// Index of a book in the canonical catalog order (0-based).
pub type BookIndex = usize;

/// Coarse Old/New Testament classification of a book.
///
/// Derived from the new-testament-only exclusion list rather than stored on
/// the book entries: a book that survives the `NewTestament` exclusions is a
/// New Testament book.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Testament {
    Old,
    New,
}

impl std::fmt::Display for Testament {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Testament::Old => write!(f, "Old Testament"),
            Testament::New => write!(f, "New Testament"),
        }
    }
}
