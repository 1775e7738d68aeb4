use crate::corpus::Book;
use crate::error::CorpusError;
use crate::loader::BookLoader;

use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// In-memory book store keyed by book number.
///
/// Each book gets its own `OnceCell` slot. The cell's initialization permit
/// is the single-flight guarantee: while one caller decodes, concurrent
/// callers for the same book await the permit instead of decoding again, and
/// then observe the fully populated result. A failed initialization releases
/// the permit with the slot still empty, so the next caller retries.
///
/// A reader therefore sees either "absent" or a complete `Book`, never a
/// partially constructed one.
pub struct BookCache {
    loader: Arc<BookLoader>,
    slots: DashMap<u32, Arc<OnceCell<Arc<Book>>>>,
}

impl BookCache {
    pub fn new(loader: BookLoader) -> Self {
        Self {
            loader: Arc::new(loader),
            slots: DashMap::new(),
        }
    }

    /// Returns the decoded book, decoding it on first access.
    ///
    /// # Returns
    /// * `Ok(Arc<Book>)` — the shared decoded book; repeated calls return the
    ///   same allocation without re-invoking the loader.
    /// * `Err` — the loader's failure, propagated unchanged and not cached.
    pub async fn get(&self, number: u32) -> Result<Arc<Book>, CorpusError> {
        let slot = self.slot(number)?;

        if let Some(book) = slot.get() {
            tracing::debug!("Cache hit for book {}", number);
            return Ok(book.clone());
        }

        let loader = self.loader.clone();
        let book = slot
            .get_or_try_init(|| async move {
                tracing::debug!("Cache miss for book {}, decoding", number);
                loader.load(number).map(Arc::new)
            })
            .await?;

        Ok(book.clone())
    }

    /// True when the book has already been decoded. Never triggers a decode.
    pub fn is_loaded(&self, number: u32) -> bool {
        self.slots
            .get(&number)
            .map(|slot| slot.initialized())
            .unwrap_or(false)
    }

    pub fn loaded_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|entry| entry.value().initialized())
            .count()
    }

    // Resolve the per-book slot, cloning the Arc out of the map so no map
    // guard is held across an await.
    fn slot(&self, number: u32) -> Result<Arc<OnceCell<Arc<Book>>>, CorpusError> {
        if !(1..=crate::corpus::BOOK_COUNT).contains(&number) {
            return Err(CorpusError::InvalidBookNumber(number));
        }
        Ok(self
            .slots
            .entry(number)
            .or_insert_with(|| Arc::new(OnceCell::new()))
            .clone())
    }
}
