//! The canonical book catalog and translation metadata.
//!
//! The catalog is an ordered list of books (canonical order, Genesis first)
//! with per-chapter verse counts and naming metadata. It is loaded once and
//! never mutated; a [`crate::session::GameSession`] owns its own copy.
//!
//! Book naming is messy in practice: a book can be referenced by its USX
//! code (`JHN`), a translation-dependent abbreviation (`Jn`, `Ján`), its
//! display name, or the composed "Name (Abbrev)" form used by pickers.
//! [`BookCatalog::resolve`] accepts all of them.

use crate::types::{BookIndex, Testament};
use serde::{Deserialize, Serialize};

/// One book of the canon.
///
/// Immutable after load. The display name may carry an alternate-tradition
/// name in parentheses (e.g. `"Teremtés könyve (Mózes I.)"`); see
/// [`BookEntry::alternate_name`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookEntry {
    /// USX-style book code (e.g. `GEN`, `JHN`).
    pub code: String,
    /// Display name.
    pub name: String,
    /// Default abbreviation.
    pub sort_name: String,
    /// Alternate abbreviations, first is the default protestant-style one.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub abbrevs: Vec<String>,
    /// Verse count of each chapter, in order.
    pub chapters: Vec<u32>,
}

impl BookEntry {
    /// Number of chapters in this book.
    pub fn chapter_count(&self) -> u32 {
        self.chapters.len() as u32
    }

    /// Verse count of a 1-based chapter, or `None` if out of range.
    pub fn verse_count(&self, chapter: u32) -> Option<u32> {
        if chapter == 0 {
            return None;
        }
        self.chapters.get(chapter as usize - 1).copied()
    }

    /// The alternate name carried in parentheses inside the display name,
    /// or the display name itself when there is none.
    ///
    /// A "könyve" suffix on the primary name carries over to the alternate
    /// when the alternate lacks it ("Teremtés könyve (Mózes I.)" yields
    /// "Mózes I. könyve").
    pub fn alternate_name(&self) -> String {
        let (Some(start), Some(end)) = (self.name.find('('), self.name.rfind(')')) else {
            return self.name.clone();
        };
        if end <= start + 1 {
            return self.name.clone();
        }
        let mut alt = self.name[start + 1..end].to_string();
        if self.name.contains("könyve") && !alt.contains("könyve") {
            alt.push_str(" könyve");
        }
        alt
    }
}

/// Classification of a translation, determining which books it carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TranslationKind {
    /// Full canon including the deuterocanonical books.
    Catholic,
    /// New Testament only.
    NewTestament,
    /// Canon without the deuterocanonical books.
    #[default]
    Protestant,
}

impl TranslationKind {
    /// Books excluded from translations of this kind: single codes or
    /// inclusive `START-END` code ranges over the canonical order.
    pub const fn excluded_books(&self) -> &'static [&'static str] {
        match self {
            TranslationKind::Catholic => &[],
            TranslationKind::NewTestament => &["GEN-MAL"],
            TranslationKind::Protestant => {
                &["TOB", "JDT", "1MA", "2MA", "WIS", "SIR", "BAR"]
            }
        }
    }
}

/// A Bible translation offered by the verse text service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    /// Identifier used by the verse text service (e.g. `RUF`).
    pub code: String,
    /// Display name.
    pub name: String,
    /// Canon classification.
    pub kind: TranslationKind,
}

impl Translation {
    fn new(code: &str, name: &str, kind: TranslationKind) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            kind,
        }
    }

    /// Szent István Társulati Biblia (full catholic canon).
    pub fn szit() -> Self {
        Self::new(
            "SZIT",
            "Szent István Társulati Biblia",
            TranslationKind::Catholic,
        )
    }

    /// Káldi György Neovulgátája (New Testament).
    pub fn knb() -> Self {
        Self::new(
            "KNB",
            "Káldi György Neovulgátája",
            TranslationKind::NewTestament,
        )
    }

    /// Simon Tamás László Újszövetség-fordítása (New Testament).
    pub fn stl() -> Self {
        Self::new(
            "STL",
            "Simon Tamás László Újszövetség-fordítása",
            TranslationKind::NewTestament,
        )
    }

    /// Békés-Dalos Újszövetség (New Testament).
    pub fn bd() -> Self {
        Self::new("BD", "Békés-Dalos Újszövetség", TranslationKind::NewTestament)
    }

    /// Magyar Bibliatársulat újfordítású Bibliája, 2014 (protestant).
    pub fn ruf() -> Self {
        Self::new(
            "RUF",
            "Magyar Bibliatársulat újfordítású Bibliája (2014)",
            TranslationKind::Protestant,
        )
    }

    /// Károli Gáspár újfordítása, 1908 (protestant).
    pub fn kg() -> Self {
        Self::new(
            "KG",
            "Károli Gáspár Újfordítása 1908-ból",
            TranslationKind::Protestant,
        )
    }

    /// All supported translations.
    pub fn all() -> Vec<Translation> {
        vec![
            Self::szit(),
            Self::knb(),
            Self::stl(),
            Self::bd(),
            Self::ruf(),
            Self::kg(),
        ]
    }

    /// Look up a translation by its identifier.
    pub fn by_code(code: &str) -> Option<Translation> {
        Self::all().into_iter().find(|t| t.code == code)
    }
}

/// The ordered book catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookCatalog {
    books: Vec<BookEntry>,
}

impl BookCatalog {
    /// Build a catalog from book entries, validating the chapter invariants.
    pub fn new(books: Vec<BookEntry>) -> Result<Self, CatalogError> {
        for book in &books {
            if book.chapters.is_empty() {
                return Err(CatalogError::NoChapters {
                    code: book.code.clone(),
                });
            }
            for (i, &verses) in book.chapters.iter().enumerate() {
                if verses == 0 {
                    return Err(CatalogError::EmptyChapter {
                        code: book.code.clone(),
                        chapter: i as u32 + 1,
                    });
                }
            }
        }
        Ok(Self { books })
    }

    /// Parse a catalog from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let books: Vec<BookEntry> = serde_json::from_str(json)?;
        Self::new(books)
    }

    /// Load the built-in catalog shipped with the crate.
    pub fn load_default() -> Result<Self, CatalogError> {
        Self::from_json(include_str!("../data/books.json"))
    }

    /// Number of books.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the catalog has no books.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Get a book by index.
    pub fn get(&self, book: BookIndex) -> Option<&BookEntry> {
        self.books.get(book)
    }

    /// All books in canonical order.
    pub fn books(&self) -> &[BookEntry] {
        &self.books
    }

    /// Index of a book by its exact code.
    pub fn index_of_code(&self, code: &str) -> Option<BookIndex> {
        self.books.iter().position(|b| b.code == code)
    }

    /// The abbreviation appropriate for a translation kind.
    ///
    /// Protestant translations prefer the first alternate abbreviation;
    /// catholic and new-testament translations use the default one.
    pub fn abbreviation(&self, book: BookIndex, kind: TranslationKind) -> Option<&str> {
        let entry = self.books.get(book)?;
        let abbr = match kind {
            TranslationKind::Protestant => entry
                .abbrevs
                .first()
                .map(String::as_str)
                .unwrap_or(&entry.sort_name),
            TranslationKind::Catholic | TranslationKind::NewTestament => &entry.sort_name,
        };
        Some(abbr)
    }

    /// The composed "Name (Abbrev)" label used by book pickers.
    pub fn composed_label(&self, book: BookIndex, kind: TranslationKind) -> Option<String> {
        let entry = self.books.get(book)?;
        let abbr = self.abbreviation(book, kind)?;
        Some(format!("{} ({})", entry.name, abbr))
    }

    /// Resolve a book identifier to its index.
    ///
    /// The identifier may be a composed "Name (Abbrev)" label, an
    /// alternate-name label, a USX code, any abbreviation, the plain display
    /// name, or the default abbreviation; matched in that order, first match
    /// wins. With `exact` set, only the two composed label forms match.
    pub fn resolve(
        &self,
        identifier: &str,
        kind: TranslationKind,
        exact: bool,
    ) -> Option<BookIndex> {
        let found = self
            .books
            .iter()
            .enumerate()
            .position(|(i, _)| self.composed_label(i, kind).as_deref() == Some(identifier))
            .or_else(|| {
                self.books.iter().enumerate().position(|(i, b)| {
                    self.abbreviation(i, kind)
                        .map(|abbr| format!("{} ({})", b.alternate_name(), abbr))
                        .as_deref()
                        == Some(identifier)
                })
            })
            .or_else(|| {
                if exact {
                    return None;
                }
                self.books
                    .iter()
                    .position(|b| b.code == identifier)
                    .or_else(|| {
                        self.books
                            .iter()
                            .position(|b| b.abbrevs.iter().any(|a| a == identifier))
                    })
                    .or_else(|| self.books.iter().position(|b| b.name == identifier))
                    .or_else(|| self.books.iter().position(|b| b.sort_name == identifier))
            });
        log::debug!(
            "resolve {:?} -> {:?}",
            identifier,
            found.map(|i| &self.books[i].code)
        );
        found
    }

    /// Whether a book is present in translations of the given kind.
    pub fn is_available(&self, book: BookIndex, kind: TranslationKind) -> bool {
        let Some(entry) = self.books.get(book) else {
            return false;
        };
        for excluded in kind.excluded_books() {
            if let Some((start, end)) = excluded.split_once('-') {
                match (self.index_of_code(start), self.index_of_code(end)) {
                    (Some(s), Some(e)) => {
                        if book >= s && book <= e {
                            return false;
                        }
                    }
                    _ => log::warn!("exclusion range {} references unknown codes", excluded),
                }
            } else if entry.code == *excluded {
                return false;
            }
        }
        true
    }

    /// Old/New Testament classification of a book.
    pub fn testament(&self, book: BookIndex) -> Testament {
        if self.is_available(book, TranslationKind::NewTestament) {
            Testament::New
        } else {
            Testament::Old
        }
    }
}

/// Errors from loading or validating a catalog.
#[derive(Debug)]
pub enum CatalogError {
    /// The catalog JSON could not be parsed.
    Parse(serde_json::Error),
    /// A book has an empty chapter list.
    NoChapters { code: String },
    /// A chapter has a zero verse count.
    EmptyChapter { code: String, chapter: u32 },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Parse(e) => write!(f, "Failed to parse catalog: {}", e),
            CatalogError::NoChapters { code } => {
                write!(f, "Book {} has no chapters", code)
            }
            CatalogError::EmptyChapter { code, chapter } => {
                write!(f, "Book {} chapter {} has no verses", code, chapter)
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Parse(e)
    }
}
