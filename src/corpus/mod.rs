//! Corpus Data Model Module
//!
//! Defines the immutable units of content and the fixed catalog of books.
//!
//! ## Core Concepts
//! - **Verse**: The smallest addressable text unit (`VerseRecord`), numbered
//!   within its chapter by its shloka index.
//! - **Book**: One of the 18 fixed top-level partitions. Holds its verse
//!   sequence in source order and answers chapter/verse slicing queries.
//! - **Catalog**: `Corpus` maps book numbers to deterministic resource names.
//!   It is an explicitly constructed immutable value, not a process-wide
//!   singleton, so embedders control its lifetime.

pub mod book;
pub mod catalog;
pub mod types;

pub use book::Book;
pub use catalog::{BOOK_COUNT, Corpus};
pub use types::VerseRecord;
