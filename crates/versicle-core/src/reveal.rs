//! Word reveal tracking and verse text masking.
//!
//! Words are the space-separated tokens of the verse text; punctuation
//! attached to a word belongs to that word's token. A [`RevealSet`] stores
//! which word positions are visible. Negative indices count from the end
//! (`-1` is the last word), matching how the auto-reveal policy marks the
//! last word without knowing the verse length up front.

use crate::rng::SeededRng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Characters preserved verbatim when a word is masked.
const PUNCTUATION: &[char] = &[
    '\n', '.', ',', ';', ':', '!', '?', '(', ')', '[', ']', '{', '}', '"', '\'', '„', '″', '“',
    '”', '‟',
];

/// The character unrevealed letters are replaced with.
pub const MASK_CHAR: char = '_';

/// Outcome of a reveal request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// A word at this index was revealed.
    Revealed(usize),
    /// Nothing left to reveal (or the round is over); the reveal control
    /// should be disabled. Not an error.
    Exhausted,
}

/// The set of revealed word positions for the current verse.
///
/// Raw entries may be negative (end-relative) or stale (past the end of a
/// shorter verse); [`RevealSet::normalized`] resolves both before use.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealSet {
    indices: BTreeSet<i64>,
}

impl RevealSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a raw (possibly negative) word index. Returns whether it was
    /// newly inserted.
    pub fn insert(&mut self, index: i64) -> bool {
        self.indices.insert(index)
    }

    /// Whether the raw index is present.
    pub fn contains(&self, index: i64) -> bool {
        self.indices.contains(&index)
    }

    /// Number of raw entries.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.indices.clear();
    }

    /// Mark the first and last words revealed (the auto-reveal opening).
    pub fn reveal_first_and_last(&mut self) {
        self.insert(0);
        self.insert(-1);
    }

    /// Resolve raw entries against a word count: indices `>= word_count`
    /// are dropped, negative index `-k` maps to `word_count - k`, and
    /// anything still out of range is discarded.
    pub fn normalized(&self, word_count: usize) -> BTreeSet<usize> {
        self.indices
            .iter()
            .filter(|&&i| i < word_count as i64)
            .map(|&i| if i < 0 { word_count as i64 + i } else { i })
            .filter(|&i| i >= 0 && i < word_count as i64)
            .map(|i| i as usize)
            .collect()
    }

    /// Whether every word is revealed for the given word count.
    pub fn is_exhausted(&self, word_count: usize) -> bool {
        self.indices.len() >= word_count
    }

    /// Pick a uniformly random unrevealed word index in `[0, word_count)`
    /// and add it. Returns the exhausted signal once the set size reaches
    /// the word count.
    ///
    /// An index counts as revealed if present directly or through its
    /// end-relative negative alias, so the pre-revealed last word is never
    /// drawn twice.
    pub fn reveal_random(&mut self, word_count: usize, rng: &mut SeededRng) -> RevealOutcome {
        if word_count == 0 || self.is_exhausted(word_count) {
            return RevealOutcome::Exhausted;
        }
        let mut index = rng.next_index(word_count);
        while self.contains(index as i64) || self.contains(index as i64 - word_count as i64) {
            index = rng.next_index(word_count);
        }
        self.insert(index as i64);
        log::debug!("revealed word {} ({}/{})", index, self.len(), word_count);
        RevealOutcome::Revealed(index)
    }
}

/// Collapse whitespace runs to single spaces and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Number of maskable words in a verse text.
pub fn word_count(text: &str) -> usize {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        0
    } else {
        trimmed.split(' ').count()
    }
}

/// Render the verse with unrevealed words masked.
///
/// Every character of an unrevealed word is replaced with [`MASK_CHAR`]
/// except punctuation, which stays in place. Masking is idempotent: a
/// masked word masks to itself.
pub fn mask(text: &str, revealed: &RevealSet) -> String {
    let words: Vec<&str> = text.trim().split(' ').collect();
    let visible = revealed.normalized(words.len());
    words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if visible.contains(&i) {
                (*word).to_string()
            } else {
                word.chars()
                    .map(|c| if PUNCTUATION.contains(&c) { c } else { MASK_CHAR })
                    .collect()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
