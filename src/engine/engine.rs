use super::search::{normalize_query, scan_book};
use super::types::{BookFailure, SearchOutcome};
use crate::cache::BookCache;
use crate::corpus::{Book, Corpus, VerseRecord};
use crate::error::CorpusError;
use crate::loader::{BookLoader, BookResources};

use std::sync::Arc;

/// The corpus query facade.
///
/// Owns the catalog and the lazy book cache; every content query goes through
/// here. All entry points that can touch a resource are async so interactive
/// callers never block on decode or on the search scan.
pub struct CorpusEngine {
    catalog: Corpus,
    cache: Arc<BookCache>,
}

impl CorpusEngine {
    pub fn new(catalog: Corpus, resources: Arc<dyn BookResources>) -> Self {
        let loader = BookLoader::new(catalog.clone(), resources);
        Self {
            catalog,
            cache: Arc::new(BookCache::new(loader)),
        }
    }

    /// The ordered book identifiers. Pure and static, no I/O.
    pub fn list_books(&self) -> Vec<u32> {
        self.catalog.book_numbers()
    }

    /// The decoded book handle, decoding on first access.
    ///
    /// Callers slice the result through `Book::verses`, `Book::chapter`,
    /// `Book::verse` and `Book::chapter_count`; repeated calls share the same
    /// decoded allocation.
    pub async fn book(&self, number: u32) -> Result<Arc<Book>, CorpusError> {
        self.cache.get(number).await
    }

    /// Verses of one chapter, in source order. Empty when the chapter number
    /// exceeds the book's content; absent chapters are valid "no content".
    pub async fn chapter(&self, book: u32, chapter: u32) -> Result<Vec<VerseRecord>, CorpusError> {
        Ok(self.book(book).await?.chapter(chapter))
    }

    /// One addressed verse as a 0-or-1-element sequence.
    pub async fn verse(
        &self,
        book: u32,
        chapter: u32,
        shloka: u32,
    ) -> Result<Vec<VerseRecord>, CorpusError> {
        Ok(self.book(book).await?.verse(chapter, shloka))
    }

    /// Chapter count of a book: the chapter of its last verse in sequence
    /// order (see `Book::chapter_count` for the exact rule).
    pub async fn chapter_count(&self, book: u32) -> Result<u32, CorpusError> {
        Ok(self.book(book).await?.chapter_count())
    }

    /// Case-insensitive substring search across the entire corpus.
    ///
    /// Scans books in ascending number order and verses in sequence order,
    /// forcing decode of any book not yet cached. A blank query is a cleared
    /// search and returns an empty outcome without touching resources.
    ///
    /// A book that fails to decode does not abort the scan: it is skipped,
    /// logged, and reported in `SearchOutcome::failures` so the caller can
    /// render a degraded result list.
    pub async fn search(&self, query: &str) -> SearchOutcome {
        let needle = normalize_query(query);
        if needle.is_empty() {
            return SearchOutcome::default();
        }

        let mut outcome = SearchOutcome::default();

        for number in self.list_books() {
            match self.cache.get(number).await {
                Ok(book) => {
                    let hits = scan_book(&book, &needle);
                    tracing::debug!(
                        "Search '{}': book {} produced {} matches",
                        needle,
                        number,
                        hits.len()
                    );
                    outcome.matches.extend(hits);
                }
                Err(error) => {
                    tracing::warn!("Search skipping book {}: {}", number, error);
                    outcome.failures.push(BookFailure {
                        book: number,
                        error,
                    });
                }
            }
        }

        outcome
    }
}
