use crate::corpus::{Book, VerseRecord};

pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

pub fn scan_book(book: &Book, needle: &str) -> Vec<VerseRecord> {
    book.verses()
        .iter()
        .filter(|verse| verse.text.to_lowercase().contains(needle))
        .cloned()
        .collect()
}
