use super::resource::BookResources;
use crate::corpus::{Book, Corpus, VerseRecord};
use crate::error::CorpusError;

use std::sync::Arc;

/// Decodes one packaged book resource into an ordered verse sequence.
///
/// Parsing is structural-only: it trusts the field-level typing of the
/// serialized form and rejects any record lacking `book`, `chapter`,
/// `shloka`, or `text`. There is no schema migration and no partial-success
/// mode. Verse order is taken from the source as-is.
pub struct BookLoader {
    catalog: Corpus,
    resources: Arc<dyn BookResources>,
}

impl BookLoader {
    pub fn new(catalog: Corpus, resources: Arc<dyn BookResources>) -> Self {
        Self { catalog, resources }
    }

    pub fn load(&self, number: u32) -> Result<Book, CorpusError> {
        let source_name = self.catalog.source_name(number)?;

        let bytes =
            self.resources
                .open(source_name)
                .map_err(|source| CorpusError::ResourceUnavailable {
                    name: source_name.to_string(),
                    source,
                })?;

        let verses: Vec<VerseRecord> =
            serde_json::from_slice(&bytes).map_err(|err| CorpusError::Format {
                name: source_name.to_string(),
                reason: err.to_string(),
            })?;

        tracing::info!(
            "Decoded book {} from '{}' ({} verses)",
            number,
            source_name,
            verses.len()
        );

        Ok(Book::new(number, source_name.to_string(), verses))
    }
}
