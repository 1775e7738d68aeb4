use serde::{Deserialize, Serialize};

/// One verse of the corpus.
///
/// Identity is the (book, chapter, shloka) triple; the text payload is
/// arbitrary-length and may contain punctuation and non-ASCII script.
/// Deserialization is structural: a record missing any field, or carrying a
/// wrong-typed field, is rejected. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRecord {
    /// Book number this verse belongs to (1-based).
    pub book: u32,
    /// Chapter number within the book (1-based).
    pub chapter: u32,
    /// Verse number within the chapter (1-based).
    pub shloka: u32,
    /// The verse text itself.
    pub text: String,
}

impl VerseRecord {
    /// The dotted citation form used throughout reader UIs, e.g. "1.2.14".
    pub fn reference(&self) -> String {
        format!("{}.{}.{}", self.book, self.chapter, self.shloka)
    }
}
