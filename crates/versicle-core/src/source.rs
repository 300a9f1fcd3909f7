//! The verse-lookup collaborator seam.
//!
//! The session never talks to the network itself; it resolves the drawn
//! location into a [`VerseRef`] and awaits the text from a [`VerseSource`].
//! The client crate provides a live implementation; tests plug in stubs.

use crate::catalog::{BookCatalog, Translation};
use crate::locator::VerseLocation;
use serde::{Deserialize, Serialize};

/// A fully resolved verse reference, ready for a text lookup.
///
/// Carries both the stable USX code and the translation-appropriate
/// abbreviation, since lookup services address verses by abbreviation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRef {
    /// USX-style book code (e.g. `JHN`).
    pub book_code: String,
    /// Abbreviation under the requested translation (e.g. `Jn`).
    pub abbreviation: String,
    /// 1-based chapter.
    pub chapter: u32,
    /// 1-based verse.
    pub verse: u32,
    /// Translation identifier (e.g. `RUF`).
    pub translation: String,
}

impl VerseRef {
    /// Resolve a location against a catalog and translation. Returns
    /// `None` when the location is not valid in the catalog.
    pub fn resolve(
        catalog: &BookCatalog,
        translation: &Translation,
        location: VerseLocation,
    ) -> Option<VerseRef> {
        if !location.is_valid(catalog) {
            return None;
        }
        let entry = catalog.get(location.book)?;
        let abbreviation = catalog.abbreviation(location.book, translation.kind)?;
        Some(VerseRef {
            book_code: entry.code.clone(),
            abbreviation: abbreviation.to_string(),
            chapter: location.chapter,
            verse: location.verse,
            translation: translation.code.clone(),
        })
    }

    /// Human-readable reference, e.g. `Jn 3,16`.
    pub fn label(&self) -> String {
        format!("{} {},{}", self.abbreviation, self.chapter, self.verse)
    }
}

/// A source of verse text.
///
/// Implementations fetch from the live text service, a fixture, or a test
/// stub. A failed lookup is an error; the session maps any failure to its
/// own fetch-failed state rather than proceeding with stale text.
#[allow(async_fn_in_trait)]
pub trait VerseSource {
    type Error: std::fmt::Display;

    /// Fetch the plain text of a verse.
    async fn fetch(&self, verse: &VerseRef) -> Result<String, Self::Error>;
}
