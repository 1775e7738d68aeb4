use crate::error::CorpusError;

/// The corpus is a fixed set of 18 books (parvas). The catalog never grows or
/// shrinks at runtime.
pub const BOOK_COUNT: u32 = 18;

const SOURCE_PREFIX: &str = "mahabharata_book";

/// The fixed, ordered catalog of book identifiers and their resource names.
///
/// Constructed once and passed to the engine; immutable thereafter.
#[derive(Debug, Clone)]
pub struct Corpus {
    source_names: Vec<String>,
}

impl Corpus {
    pub fn new() -> Self {
        let source_names = (1..=BOOK_COUNT)
            .map(|number| format!("{}_{}", SOURCE_PREFIX, number))
            .collect();
        Self { source_names }
    }

    /// Ordered book numbers, 1..=18.
    pub fn book_numbers(&self) -> Vec<u32> {
        (1..=self.source_names.len() as u32).collect()
    }

    /// Resource name backing the given book, e.g. "mahabharata_book_7".
    pub fn source_name(&self, number: u32) -> Result<&str, CorpusError> {
        let index = number
            .checked_sub(1)
            .map(|i| i as usize)
            .filter(|&i| i < self.source_names.len())
            .ok_or(CorpusError::InvalidBookNumber(number))?;
        Ok(&self.source_names[index])
    }

    pub fn contains(&self, number: u32) -> bool {
        (1..=self.source_names.len() as u32).contains(&number)
    }

    pub fn len(&self) -> usize {
        self.source_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source_names.is_empty()
    }
}

impl Default for Corpus {
    fn default() -> Self {
        Self::new()
    }
}
