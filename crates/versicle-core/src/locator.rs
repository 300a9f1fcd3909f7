//! Verse locations and random verse selection.

use crate::catalog::{BookCatalog, TranslationKind};
use crate::rng::SeededRng;
use crate::types::BookIndex;
use serde::{Deserialize, Serialize};

/// A location within the canon: book index (0-based), chapter and verse
/// (both 1-based).
///
/// The derived ordering is lexicographic on (book, chapter, verse), which is
/// exactly "position within Scripture" and drives the earlier/later guess
/// feedback.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct VerseLocation {
    pub book: BookIndex,
    pub chapter: u32,
    pub verse: u32,
}

impl VerseLocation {
    /// Create a location. No validation; see [`VerseLocation::is_valid`].
    pub fn new(book: BookIndex, chapter: u32, verse: u32) -> Self {
        Self {
            book,
            chapter,
            verse,
        }
    }

    /// Whether this location exists in the given catalog.
    pub fn is_valid(&self, catalog: &BookCatalog) -> bool {
        let Some(entry) = catalog.get(self.book) else {
            return false;
        };
        self.chapter >= 1
            && self.chapter <= entry.chapter_count()
            && self.verse >= 1
            && entry
                .verse_count(self.chapter)
                .is_some_and(|count| self.verse <= count)
    }
}

impl std::fmt::Display for VerseLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {},{}", self.book, self.chapter, self.verse)
    }
}

/// Draw a uniformly random valid location among the books available in the
/// given translation kind.
///
/// Book selection uses rejection sampling: redraw until the book is
/// available. The exclusion lists are small and static, so this converges
/// quickly. Returns `None` when the catalog is empty or no book is
/// available at all.
pub fn random_location(
    catalog: &BookCatalog,
    kind: TranslationKind,
    rng: &mut SeededRng,
) -> Option<VerseLocation> {
    if catalog.is_empty() {
        return None;
    }
    if !(0..catalog.len()).any(|b| catalog.is_available(b, kind)) {
        return None;
    }
    let mut book = rng.next_index(catalog.len());
    while !catalog.is_available(book, kind) {
        book = rng.next_index(catalog.len());
    }
    let entry = catalog.get(book)?;
    let chapter = rng.next_range(entry.chapter_count()) + 1;
    let verse = rng.next_range(entry.verse_count(chapter)?) + 1;
    Some(VerseLocation::new(book, chapter, verse))
}
