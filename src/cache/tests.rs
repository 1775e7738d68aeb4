//! Cache Module Tests
//!
//! Validates the lazy, single-flight decode discipline.
//!
//! ## Test Scopes
//! - **Idempotency**: Repeated access decodes once and shares one allocation.
//! - **Single-flight**: Concurrent first access triggers exactly one decode.
//! - **Failure recovery**: Failed loads are not cached and retry cleanly.

#[cfg(test)]
mod tests {
    use crate::cache::memory::BookCache;
    use crate::corpus::Corpus;
    use crate::error::CorpusError;
    use crate::loader::loader::BookLoader;
    use crate::loader::resource::BookResources;

    use std::io;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::time::Duration;

    // Counts every open() so tests can assert how often the loader really ran.
    struct CountingResources {
        opens: Arc<AtomicUsize>,
        broken: Arc<AtomicBool>,
        delay: Option<Duration>,
    }

    impl CountingResources {
        fn new() -> (Arc<Self>, Arc<AtomicUsize>) {
            let opens = Arc::new(AtomicUsize::new(0));
            let resources = Arc::new(Self {
                opens: opens.clone(),
                broken: Arc::new(AtomicBool::new(false)),
                delay: None,
            });
            (resources, opens)
        }

        fn slow(delay: Duration) -> (Arc<Self>, Arc<AtomicUsize>) {
            let opens = Arc::new(AtomicUsize::new(0));
            let resources = Arc::new(Self {
                opens: opens.clone(),
                broken: Arc::new(AtomicBool::new(false)),
                delay: Some(delay),
            });
            (resources, opens)
        }

        fn breakable() -> (Arc<Self>, Arc<AtomicBool>) {
            let broken = Arc::new(AtomicBool::new(true));
            let resources = Arc::new(Self {
                opens: Arc::new(AtomicUsize::new(0)),
                broken: broken.clone(),
                delay: None,
            });
            (resources, broken)
        }
    }

    impl BookResources for CountingResources {
        fn open(&self, source_name: &str) -> io::Result<Vec<u8>> {
            self.opens.fetch_add(1, Ordering::SeqCst);

            if self.broken.load(Ordering::SeqCst) {
                return Err(io::Error::new(io::ErrorKind::NotFound, "asset missing"));
            }
            if let Some(delay) = self.delay {
                std::thread::sleep(delay);
            }

            // Derive the book number back out of the source name so every
            // book resolves to a small distinct payload.
            let number: u32 = source_name.rsplit('_').next().unwrap().parse().unwrap();
            let content = format!(
                r#"[{{"book": {n}, "chapter": 1, "shloka": 1, "text": "verse of book {n}"}}]"#,
                n = number
            );
            Ok(content.into_bytes())
        }
    }

    fn cache_with(resources: Arc<CountingResources>) -> Arc<BookCache> {
        Arc::new(BookCache::new(BookLoader::new(Corpus::new(), resources)))
    }

    // ============================================================
    // IDEMPOTENCY TESTS
    // ============================================================

    #[tokio::test]
    async fn test_second_get_does_not_reload() {
        let (resources, opens) = CountingResources::new();
        let cache = cache_with(resources);

        let first = cache.get(1).await.unwrap();
        let second = cache.get(1).await.unwrap();

        assert_eq!(opens.load(Ordering::SeqCst), 1, "decode must happen once");
        assert!(
            Arc::ptr_eq(&first, &second),
            "both calls must share one decoded allocation"
        );
    }

    #[tokio::test]
    async fn test_distinct_books_load_separately() {
        let (resources, opens) = CountingResources::new();
        let cache = cache_with(resources);

        let one = cache.get(1).await.unwrap();
        let two = cache.get(2).await.unwrap();

        assert_eq!(opens.load(Ordering::SeqCst), 2);
        assert_eq!(one.number(), 1);
        assert_eq!(two.number(), 2);
        assert!(cache.is_loaded(1));
        assert!(cache.is_loaded(2));
        assert_eq!(cache.loaded_count(), 2);
    }

    #[tokio::test]
    async fn test_invalid_book_number_is_rejected_without_loading() {
        let (resources, opens) = CountingResources::new();
        let cache = cache_with(resources);

        let error = cache.get(0).await.unwrap_err();
        assert!(matches!(error, CorpusError::InvalidBookNumber(0)));
        assert!(!error.is_retryable(), "a bad book number never recovers");
        assert!(matches!(
            cache.get(19).await,
            Err(CorpusError::InvalidBookNumber(19))
        ));
        assert_eq!(opens.load(Ordering::SeqCst), 0);
    }

    // ============================================================
    // SINGLE-FLIGHT TESTS
    // ============================================================

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_concurrent_first_access_decodes_once() {
        // ARRANGE: a slow decode so all tasks overlap the first flight
        let (resources, opens) = CountingResources::slow(Duration::from_millis(50));
        let cache = cache_with(resources);

        // ACT: eight concurrent first-time readers of the same book
        let mut handles = Vec::new();
        for _ in 0..8 {
            let cache = cache.clone();
            handles.push(tokio::spawn(async move { cache.get(1).await }));
        }

        let mut books = Vec::new();
        for handle in handles {
            books.push(handle.await.unwrap().unwrap());
        }

        // ASSERT: one decode, one shared allocation, identical content
        assert_eq!(opens.load(Ordering::SeqCst), 1, "single-flight violated");
        for book in &books {
            assert!(Arc::ptr_eq(book, &books[0]));
            assert_eq!(book.verses(), books[0].verses());
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_loads_for_distinct_books_run_concurrently() {
        let (resources, _) = CountingResources::slow(Duration::from_millis(40));
        let cache = cache_with(resources);

        let started = std::time::Instant::now();
        let a = tokio::spawn({
            let cache = cache.clone();
            async move { cache.get(1).await }
        });
        let b = tokio::spawn({
            let cache = cache.clone();
            async move { cache.get(2).await }
        });

        a.await.unwrap().unwrap();
        b.await.unwrap().unwrap();

        // Serialized loads would need ~80ms; allow generous slack under CI.
        assert!(
            started.elapsed() < Duration::from_millis(75),
            "loads for distinct books must not share a lock"
        );
    }

    // ============================================================
    // FAILURE RECOVERY TESTS
    // ============================================================

    #[tokio::test]
    async fn test_failed_load_is_not_cached() {
        let (resources, broken) = CountingResources::breakable();
        let cache = cache_with(resources);

        let error = cache.get(1).await.unwrap_err();
        assert!(matches!(error, CorpusError::ResourceUnavailable { .. }));
        assert!(error.is_retryable());
        assert!(!cache.is_loaded(1));

        // Repair the resource; the same cache must recover without rebuild
        broken.store(false, Ordering::SeqCst);

        let second = cache.get(1).await.unwrap();
        assert_eq!(second.number(), 1);
        assert!(cache.is_loaded(1));
    }
}
