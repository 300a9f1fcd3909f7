//! Canned verse sources for the deterministic debug mode and tests.

use crate::FetchError;
use std::collections::HashMap;
use versicle_core::{VerseRef, VerseSource};

/// A verse source backed by an in-memory table.
///
/// Lookups are keyed on (book code, chapter, verse); a fallback text can
/// answer everything else, which is how the debug mode serves a single
/// canned verse regardless of the fixed location.
#[derive(Clone, Debug, Default)]
pub struct FixtureSource {
    verses: HashMap<(String, u32, u32), String>,
    fallback: Option<String>,
}

impl FixtureSource {
    /// An empty fixture; every lookup fails until verses are inserted.
    pub fn new() -> Self {
        Self::default()
    }

    /// A fixture that answers every lookup with the same text.
    pub fn with_fallback(text: impl Into<String>) -> Self {
        Self {
            verses: HashMap::new(),
            fallback: Some(text.into()),
        }
    }

    /// The canned verse used by the debug mode.
    pub fn canned() -> Self {
        Self::with_fallback(
            "Mert úgy szerette Isten a világot, hogy egyszülött Fiát adta, \
             hogy aki hisz őbenne, el ne vesszen, hanem örök élete legyen.",
        )
    }

    /// Register the text of a specific verse.
    pub fn insert(&mut self, book_code: &str, chapter: u32, verse: u32, text: &str) {
        self.verses
            .insert((book_code.to_string(), chapter, verse), text.to_string());
    }
}

impl VerseSource for FixtureSource {
    type Error = FetchError;

    async fn fetch(&self, verse: &VerseRef) -> Result<String, Self::Error> {
        self.verses
            .get(&(verse.book_code.clone(), verse.chapter, verse.verse))
            .or(self.fallback.as_ref())
            .cloned()
            .ok_or_else(|| FetchError::NotFound(verse.label()))
    }
}
