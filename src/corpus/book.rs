use super::types::VerseRecord;

/// One decoded book: its number, the resource it was decoded from, and the
/// verse sequence in source order.
///
/// Source order is chapter-major then verse-minor and is trusted as-is; the
/// engine never re-sorts. Disorder in the source is a source defect that
/// flows through unchanged.
#[derive(Debug, Clone)]
pub struct Book {
    number: u32,
    source_name: String,
    verses: Vec<VerseRecord>,
}

impl Book {
    pub(crate) fn new(number: u32, source_name: String, verses: Vec<VerseRecord>) -> Self {
        Self {
            number,
            source_name,
            verses,
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// The full verse sequence in source order.
    pub fn verses(&self) -> &[VerseRecord] {
        &self.verses
    }

    /// Verses of one chapter, preserving their relative source order.
    ///
    /// A chapter number beyond the book's content yields an empty sequence,
    /// not an error: chapter counts vary per book and callers probe ranges.
    pub fn chapter(&self, chapter: u32) -> Vec<VerseRecord> {
        self.verses
            .iter()
            .filter(|verse| verse.chapter == chapter)
            .cloned()
            .collect()
    }

    /// A single addressed verse, as a sequence of 0 or 1 elements.
    ///
    /// The contract returns a sequence rather than asserting uniqueness; a
    /// well-formed corpus never repeats a (chapter, shloka) pair within a
    /// book, but the model does not enforce that here.
    pub fn verse(&self, chapter: u32, shloka: u32) -> Vec<VerseRecord> {
        self.verses
            .iter()
            .filter(|verse| verse.chapter == chapter && verse.shloka == shloka)
            .cloned()
            .collect()
    }

    /// Number of chapters, defined as the chapter of the LAST verse in
    /// sequence order — not `max(chapter)`. If the source is out of chapter
    /// order the two disagree and sequence order wins. An empty book has 0.
    pub fn chapter_count(&self) -> u32 {
        self.verses.last().map(|verse| verse.chapter).unwrap_or(0)
    }

    pub fn verse_count(&self) -> usize {
        self.verses.len()
    }
}
