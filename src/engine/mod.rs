//! Corpus Engine Module
//!
//! The query facade the surrounding application talks to.
//!
//! ## Responsibilities
//! - **Enumeration**: Listing the fixed book identifiers without I/O.
//! - **Access**: Handing out lazily decoded books and chapter/verse slices.
//! - **Search**: Scanning every verse of every book for a case-insensitive
//!   substring, forcing decode of books not yet cached.
//! - **Degradation**: A book that fails to decode is skipped during search
//!   and reported in the outcome instead of aborting the whole scan.
//!
//! ## Submodules
//! - **`engine`**: The `CorpusEngine` facade itself.
//! - **`search`**: The linear verse-scan helpers.
//! - **`types`**: Result DTOs (`SearchOutcome`, `BookFailure`).

pub mod engine;
pub mod search;
pub mod types;

pub use engine::CorpusEngine;
pub use types::{BookFailure, SearchOutcome};
