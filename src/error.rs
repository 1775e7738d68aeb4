//! Corpus Error Taxonomy
//!
//! Every failure the engine can surface falls into one of three categories:
//! a backing resource that cannot be opened, a resource whose content fails
//! structural parsing, or a request for a book number outside the corpus.
//! The loader and cache propagate these unchanged; the engine never
//! substitutes empty data for a failed load.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
    /// The backing resource for a book could not be opened (missing asset,
    /// unreadable file).
    #[error("book resource '{name}' is unavailable")]
    ResourceUnavailable {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// The resource was opened but its content does not parse into the
    /// expected verse-record shape.
    #[error("book resource '{name}' is malformed: {reason}")]
    Format { name: String, reason: String },

    /// A request addressed a book number outside the fixed corpus range.
    #[error("book number {0} is not part of the corpus")]
    InvalidBookNumber(u32),
}

impl CorpusError {
    /// True when a retry against the same book could plausibly succeed.
    /// Invalid book numbers are permanent; resource and format failures can
    /// clear up if the underlying asset is repaired.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, CorpusError::InvalidBookNumber(_))
    }
}
