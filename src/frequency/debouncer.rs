use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Trailing-edge debouncer.
///
/// Two states: idle, or one pending scheduled execution. Every `submit` call
/// supersedes whatever was pending — the pending task is aborted and a new
/// one is scheduled `interval` in the future. If no further submission
/// arrives before it comes due, the action runs exactly once.
///
/// Cancellation is best-effort: an action that has already started is not
/// interrupted, only queued-but-unstarted executions are aborted. The
/// sequence ticket closes that gap — an action checks `Ticket::is_current`
/// after expensive awaits and drops its result if it has been superseded.
pub struct Debouncer {
    interval: Duration,
    latest: Arc<AtomicU64>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            latest: Arc::new(AtomicU64::new(0)),
            pending: Mutex::new(None),
        }
    }

    /// Schedules `action` to run after the quiet interval, superseding any
    /// pending submission.
    ///
    /// The action receives the submission's `Ticket`. It only starts at all
    /// if the ticket is still current at its due time; long-running actions
    /// should re-check the ticket before delivering results.
    pub fn submit<F, Fut>(&self, action: F)
    where
        F: FnOnce(Ticket) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        // Claiming a fresh sequence number invalidates every earlier ticket,
        // even if the abort below loses a race with the scheduler.
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let ticket = Ticket {
            seq,
            latest: self.latest.clone(),
        };
        let interval = self.interval;

        let task = tokio::spawn(async move {
            tokio::time::sleep(interval).await;
            if ticket.is_current() {
                // Detached: once started, the action is never aborted from
                // here. Staleness is handled through the ticket instead.
                tokio::spawn(action(ticket));
            } else {
                tracing::debug!("Dropping superseded debounce action (seq {})", seq);
            }
        });

        let mut pending = self.pending.lock().unwrap();
        if let Some(previous) = pending.replace(task) {
            previous.abort();
        }
    }

    /// Drops any pending scheduled execution without scheduling a new one
    /// (a cleared search box). Bumps the sequence so an already-started
    /// action discards its result through its ticket.
    pub fn cancel(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
        let mut pending = self.pending.lock().unwrap();
        if let Some(task) = pending.take() {
            task.abort();
        }
    }
}

/// Proof of a specific submission. Stale the moment a newer submission
/// exists on the same debouncer.
#[derive(Debug, Clone)]
pub struct Ticket {
    seq: u64,
    latest: Arc<AtomicU64>,
}

impl Ticket {
    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.seq
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}
