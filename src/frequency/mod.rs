//! Frequency Control Module
//!
//! Scheduling primitives that keep interactive callers from flooding the
//! engine.
//!
//! ## Core Concepts
//! - **Trailing-edge debounce** (`Debouncer`): every submission supersedes the
//!   previous one; only the last submission in a quiet window executes, once,
//!   after the interval elapses. One long-lived instance per logical search
//!   box.
//! - **Staleness tickets**: each submission carries a monotonically increasing
//!   sequence number. A completed action whose ticket is no longer current is
//!   discarded, so a superseded search can never overwrite a later result.
//! - **Leading-edge throttle** (`Throttler`): runs immediately, then drops
//!   calls until the interval has passed.

pub mod debouncer;
pub mod throttler;

pub use debouncer::{Debouncer, Ticket};
pub use throttler::Throttler;
