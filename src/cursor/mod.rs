//! Reading Cursor Module
//!
//! Tracks the last (book, chapter, verse) the user viewed. The position is
//! advisory UI state: nothing checks that it points at an existing verse,
//! and the engine itself never reads it. Callers record progress through the
//! narrow `CursorStore` port; durable storage (preferences, a file, nothing
//! at all) stays outside this crate.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

/// The last-read position. All-zero means "never recorded".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingPosition {
    pub book: u32,
    pub chapter: u32,
    pub shloka: u32,
}

/// Port to whatever keeps the position between sessions.
pub trait CursorStore: Send + Sync {
    fn load(&self) -> ReadingPosition;
    fn store(&self, position: ReadingPosition);
}

/// Process-local store, used when no durable backend is wired in.
#[derive(Debug, Default)]
pub struct MemoryCursorStore {
    position: RwLock<ReadingPosition>,
}

impl CursorStore for MemoryCursorStore {
    fn load(&self) -> ReadingPosition {
        *self.position.read().unwrap()
    }

    fn store(&self, position: ReadingPosition) {
        *self.position.write().unwrap() = position;
    }
}

/// What collaborators hold: read the position, record it whole or piecemeal.
///
/// Piecemeal updates mirror how a reader UI records progress — opening a book
/// records the book, opening a chapter records book and chapter, landing on a
/// search hit records all three.
#[derive(Clone)]
pub struct ReadingCursor {
    store: Arc<dyn CursorStore>,
}

impl ReadingCursor {
    pub fn new(store: Arc<dyn CursorStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryCursorStore::default()))
    }

    pub fn position(&self) -> ReadingPosition {
        self.store.load()
    }

    pub fn record(&self, position: ReadingPosition) {
        self.store.store(position);
    }

    pub fn record_book(&self, book: u32) {
        let mut position = self.store.load();
        position.book = book;
        self.store.store(position);
    }

    pub fn record_chapter(&self, book: u32, chapter: u32) {
        let mut position = self.store.load();
        position.book = book;
        position.chapter = chapter;
        self.store.store(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_position_is_zeroed() {
        let cursor = ReadingCursor::in_memory();

        assert_eq!(cursor.position(), ReadingPosition::default());
    }

    #[test]
    fn test_record_and_read_back() {
        let cursor = ReadingCursor::in_memory();

        let position = ReadingPosition {
            book: 6,
            chapter: 25,
            shloka: 47,
        };
        cursor.record(position);

        assert_eq!(cursor.position(), position);
    }

    #[test]
    fn test_partial_updates_touch_only_their_fields() {
        let cursor = ReadingCursor::in_memory();
        cursor.record(ReadingPosition {
            book: 1,
            chapter: 2,
            shloka: 3,
        });

        cursor.record_book(5);
        assert_eq!(
            cursor.position(),
            ReadingPosition {
                book: 5,
                chapter: 2,
                shloka: 3,
            }
        );

        cursor.record_chapter(5, 9);
        assert_eq!(
            cursor.position(),
            ReadingPosition {
                book: 5,
                chapter: 9,
                shloka: 3,
            }
        );
    }

    #[test]
    fn test_clones_share_the_store() {
        let cursor = ReadingCursor::in_memory();
        let other = cursor.clone();

        other.record_book(12);

        assert_eq!(cursor.position().book, 12);
    }
}
