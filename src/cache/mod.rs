//! Book Cache Module
//!
//! The lazy store that owns at most one decoded representation per book.
//!
//! ## Core Concepts
//! - **Lazy decode**: A book is decoded on first access and kept for the
//!   process lifetime. There is no eviction; the corpus is 18 books.
//! - **Single-flight**: Concurrent first-access requests for the same book
//!   trigger at most one decode; everyone else awaits the same result. Loads
//!   for distinct books proceed independently — there is no global lock.
//! - **Failure is not cached**: A failed load leaves the slot empty, so a
//!   later request retries and a transient resource error recovers without a
//!   process restart.

pub mod memory;

pub use memory::BookCache;

#[cfg(test)]
mod tests;
