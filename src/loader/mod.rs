//! Book Loader Module
//!
//! Handles the acquisition and structural decoding of book resources.
//!
//! ## Workflow
//! 1. **Resolve**: Map a book number to its deterministic resource name via
//!    the catalog.
//! 2. **Open**: Fetch the raw bytes through the `BookResources` port.
//! 3. **Decode**: Parse the bytes as a JSON array of verse records.
//!
//! Decoding is fail-fast: a single malformed record fails the whole book,
//! because a silently truncated book would corrupt every downstream chapter
//! computation that assumes completeness.

pub mod loader;
pub mod resource;

pub use loader::BookLoader;
pub use resource::{BookResources, FsBookResources};
